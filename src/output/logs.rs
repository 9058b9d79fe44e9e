use crate::error::Error;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Persist a log as `<name>_<YYYYmmdd_HHMMSS>.txt` in `dir`, one line per
/// entry, UTF-8.
pub fn save_log(lines: &[String], dir: &Path, name: &str) -> Result<PathBuf, Error> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}_{}.txt", name, timestamp));
    fs::write(&path, lines.join("\n"))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_newline_joined_lines() {
        let tmp = tempdir().unwrap();
        let lines = vec!["first".to_string(), "second".to_string()];
        let path = save_log(&lines, tmp.path(), "processing_log").unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("processing_log_"));
        assert!(file_name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond");
    }
}
