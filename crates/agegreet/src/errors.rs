//! Input errors and exit codes for agegreet.

use thiserror::Error;

/// Failures while reading interactive input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("'{token}' is not a whole number")]
    NotAnInteger { token: String },

    #[error("input closed before an age was entered")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when stdin closes before the interaction completes
pub const EXIT_INPUT_CLOSED: i32 = 66;
