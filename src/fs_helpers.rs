use std::{fs::File, io::{self, BufReader, BufWriter, Write}, path::Path};

use log::{debug, info};

use crate::{
    report::write_report,
    stop_words::StopWordSet,
    tag_processor::{self, FrequencyTable, RankedEntry},
};

pub fn load_stop_words(path: &Path) -> io::Result<StopWordSet> {
    let file_handle = File::open(path)?;
    let stop_words = StopWordSet::from_reader(BufReader::new(file_handle))?;
    info!("loaded {} stop words from {:?}", stop_words.len(), path);
    Ok(stop_words)
}

pub fn extract_tags(path: &Path, stop_words: &StopWordSet) -> io::Result<FrequencyTable> {
    debug!("extracting tags from {:?}", path);
    let file_handle = File::open(path)?;
    tag_processor::extract_tags(BufReader::new(file_handle), stop_words)
}

/// Writes the fixed-width report to `path`, truncating any existing file.
pub fn save_tags(path: &Path, entries: &[RankedEntry]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, entries)?;
    writer.flush()?;
    info!("saved {} tags to {:?}", entries.len(), path);
    Ok(())
}
