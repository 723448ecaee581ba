//! Loader errors

use super::SHEET_NAME;

/// Error from loading a Passport workbook
#[derive(Debug)]
pub enum LoadError {
    /// The required sheet is missing from the workbook
    SheetNotFound,
    /// The workbook could not be opened or read
    Workbook(calamine::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::SheetNotFound => {
                write!(f, "workbook must contain a '{}' sheet", SHEET_NAME)
            }
            LoadError::Workbook(e) => write!(f, "failed to read workbook: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::SheetNotFound => None,
            LoadError::Workbook(e) => Some(e),
        }
    }
}

impl From<calamine::Error> for LoadError {
    fn from(e: calamine::Error) -> Self {
        LoadError::Workbook(e)
    }
}
