use crate::DEFAULT_FORMAT;
use chrono::format::{Item, StrftimeItems};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub directory: PathBuf,
    pub format: String,
    pub prefix: Option<String>,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            format: DEFAULT_FORMAT.to_string(),
            prefix: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("日時フォーマットが空です")]
    Empty,
    #[error("未対応のフォーマット指定子が含まれています: {0}")]
    Invalid(String),
}

pub fn validate_format(format: &str) -> Result<(), FormatError> {
    if format.is_empty() {
        return Err(FormatError::Empty);
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::Invalid(format.to_string()));
    }

    Ok(())
}
