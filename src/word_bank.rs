// File: src/word_bank.rs
use crate::error::{Result, TrainerError};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a newline-delimited word list, one target word per line.
///
/// Lines are kept verbatim apart from a trailing `\r`; blank lines are
/// skipped. An empty result is not an error here, the session generator
/// decides that.
pub fn load_word_bank(path: &Path) -> Result<Vec<String>> {
    let unreadable = |source: std::io::Error| TrainerError::WordBankUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let mut words = Vec::with_capacity(64);
    for line in BufReader::new(file).lines() {
        let line = line.map_err(unreadable)?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_word_bank() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "ねこ\r\nいぬ\n\nさかな\n").unwrap();

        let words = load_word_bank(file.path()).unwrap();
        assert_eq!(words, vec!["ねこ", "いぬ", "さかな"]);
    }

    #[test]
    fn test_missing_word_bank() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_word_bank(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, TrainerError::WordBankUnreadable { .. }));
    }
}
