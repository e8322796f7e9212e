use thiserror::Error;

/// Errors raised by the checked cursor operations.
///
/// The unchecked operations treat the same situations as broken
/// preconditions and panic or debug-assert instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cursor is at the end of the view")]
    AtEnd,
    #[error("Cursor is at the beginning of the view")]
    AtBeginning,
    #[error("Cursors belong to different views")]
    ForeignCursor,
    // The bounds are relative to the cursor the jump started from.
    #[error("Offset {offset} is outside of {min}..={max}")]
    OutOfRange { offset: i128, min: i128, max: i128 },
}

pub type Result<T> = std::result::Result<T, Error>;
