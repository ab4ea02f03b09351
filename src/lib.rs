pub mod fs_helpers;
pub mod report;
pub mod stop_words;
pub mod tag_processor;
pub mod word_filtering;
