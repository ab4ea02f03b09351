use std::{path::{Path, PathBuf}, process::ExitCode};

use clap::{Arg, ArgAction, Command, value_parser};
use log::{error, info, warn};
use tag_extractor::{fs_helpers, report::OutputFormat, stop_words::StopWordSet, tag_processor::sort_by_frequency};

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("Tag Extractor")
        .about("Extracts keyword frequencies from a text file")
        .arg(Arg::new("text-file")
            .required(true)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("stop-words")
            .short('s')
            .long("stop-words")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("write the report to a file, e.g. tags_output.txt")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .default_value("table")
            .value_parser(["table", "json", "yaml"]))
        .arg(Arg::new("top")
            .short('n')
            .long("top")
            .action(ArgAction::Set)
            .value_parser(value_parser!(usize)))
        .get_matches();

    let text_file = matches.get_one::<PathBuf>("text-file").expect("text-file is required");
    let stop_words_file = matches.get_one::<PathBuf>("stop-words");
    let output_file = matches.get_one::<PathBuf>("output");
    let top = matches.get_one::<usize>("top").copied();
    let format = match matches.get_one::<String>("format").map(|s| s.parse::<OutputFormat>()) {
        Some(Ok(format)) => format,
        Some(Err(err)) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        },
        None => OutputFormat::default(),
    };

    let stop_words = match stop_words_file {
        Some(path) => match fs_helpers::load_stop_words(path) {
            Ok(stop_words) => {
                println!("Loaded {} stop words.", stop_words.len());
                stop_words
            },
            Err(err) => {
                error!("failed loading stop words from {:?}: {}", path, err);
                return ExitCode::FAILURE;
            },
        },
        None => {
            warn!("no stop words loaded, every word will be counted");
            StopWordSet::new()
        },
    };

    let table = match fs_helpers::extract_tags(text_file, &stop_words) {
        Ok(table) => table,
        Err(err) => {
            error!("error processing file {:?}: {}", text_file, err);
            return ExitCode::FAILURE;
        },
    };
    info!("{} distinct tags found in {:?}", table.len(), text_file);

    let mut entries = sort_by_frequency(&table);
    if let Some(top) = top {
        entries.truncate(top);
    }

    match format.render(&display_name(text_file), &entries) {
        Ok(rendered) => print!("{}", rendered),
        Err(err) => {
            error!("failed rendering tags: {}", err);
            return ExitCode::FAILURE;
        },
    }

    if let Some(path) = output_file {
        if let Err(err) = fs_helpers::save_tags(path, &entries) {
            error!("failed to save tags to {:?}: {}", path, err);
            return ExitCode::FAILURE;
        }
        println!("Saved tags to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
