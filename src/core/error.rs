use crate::content::ContentError;
use crate::i18n::TranslationError;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Validation(String),
    Config(String),
    Translation(TranslationError),
    Content(ContentError),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        AppError::Translation(err)
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        AppError::Content(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "IO Error: {}", err),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            AppError::Translation(err) => write!(f, "Translation Error: {}", err),
            AppError::Content(err) => write!(f, "Content Error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}
pub type Result<T> = std::result::Result<T, AppError>;
