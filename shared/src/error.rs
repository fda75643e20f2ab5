use std::fmt;

use validator::ValidationError;

use crate::constants::{EMPTY_NAME_ERROR, MISSING_NAME_ERROR, SPIN_IN_PROGRESS_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelError {
    /// The name form was committed with blank text.
    EmptyName,
    /// The spin screen was entered without a usable name.
    MissingNameOnEntry,
    /// A spin was requested while the wheel is still turning.
    SpinInProgress,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            WheelError::EmptyName => EMPTY_NAME_ERROR,
            WheelError::MissingNameOnEntry => MISSING_NAME_ERROR,
            WheelError::SpinInProgress => SPIN_IN_PROGRESS_ERROR,
        };
        f.write_str(message)
    }
}

impl std::error::Error for WheelError {}

impl From<ValidationError> for WheelError {
    fn from(_: ValidationError) -> Self {
        WheelError::EmptyName
    }
}
