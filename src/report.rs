use std::{fmt::Write as _, io::{self, Error, ErrorKind, Write}, str::FromStr};

use crate::tag_processor::RankedEntry;

pub const SEPARATOR: &str = "-----------------------------";

pub const NO_TAGS_MESSAGE: &str = "No tags found (check stop words file).";

/// Renders `entries` as the fixed-width two column report:
///
/// ```text
///  Count  Tag
/// -----------------------------
///     12  example
///      7  another
/// ```
pub fn format_report(entries: &[RankedEntry]) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "{:>6}  {}", "Count", "Tag");
    let _ = writeln!(report, "{}", SEPARATOR);
    for entry in entries {
        let _ = writeln!(report, "{:>6}  {}", entry.count, entry.word);
    }
    report
}

pub fn write_report(writer: &mut impl Write, entries: &[RankedEntry]) -> io::Result<()> {
    writer.write_all(format_report(entries).as_bytes())
}

/// The on-screen variant of the report, headed by the input file name.
pub fn format_display(file_name: &str, entries: &[RankedEntry]) -> String {
    let mut display = format!("File: {}\n\n", file_name);
    display.push_str(&format_report(entries));
    if entries.is_empty() {
        display.push('\n');
        display.push_str(NO_TAGS_MESSAGE);
        display.push('\n');
    }
    display
}

/// Reads the data rows of a report produced by `format_report` back into entries.
///
/// Header, separator and any other line that is not `<count>  <word>` are skipped.
pub fn parse_report(text: &str) -> Vec<RankedEntry> {
    text.lines()
        .filter_map(|line| {
            let (count, word) = line.trim_start().split_once("  ")?;
            let count = count.parse::<usize>().ok()?;
            match word.is_empty() {
                true => None,
                false => Some(RankedEntry::new(word, count)),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render(&self, file_name: &str, entries: &[RankedEntry]) -> io::Result<String> {
        match self {
            Self::Table => Ok(format_display(file_name, entries)),
            Self::Json => Ok(serde_json::to_string_pretty(entries)? + "\n"),
            Self::Yaml => serde_yaml::to_string(entries)
                .map_err(|err| Error::new(ErrorKind::InvalidData, err)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            x => Err(Error::new(ErrorKind::InvalidInput,
                format!("output format {} does not exist", x))),
        }
    }
}
