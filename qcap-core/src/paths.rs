use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const JOURNALS_DIR: &str = "journals";

pub fn journals_dir(knowledge_base: &Path) -> PathBuf {
    knowledge_base.join(JOURNALS_DIR)
}

pub fn day_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y_%m_%d"))
}

pub fn day_path(knowledge_base: &Path, date: NaiveDate) -> PathBuf {
    journals_dir(knowledge_base).join(day_file_name(date))
}
