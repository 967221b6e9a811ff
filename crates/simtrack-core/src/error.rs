//! Menu selection errors.
//!
//! Both variants are recovered by re-prompting; neither ends the menu loop.

use thiserror::Error;

/// Why a line typed at the menu prompt was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The input did not parse as an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The input is an integer, possibly too large for any machine type,
    /// but names no menu entry.
    #[error("option {choice} is outside 1..={max}")]
    OutOfRange { choice: String, max: usize },
}

impl SelectionError {
    /// The line shown to the operator before re-prompting.
    pub fn prompt_message(&self) -> &'static str {
        match self {
            SelectionError::NotANumber(_) => "Please enter a valid number.",
            SelectionError::OutOfRange { .. } => "Invalid option, please try again.",
        }
    }
}
