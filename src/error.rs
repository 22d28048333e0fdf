use std::io;

use thiserror::Error;

pub type DispatchResult<T> = Result<T, FuzzlingError>;

#[derive(Debug, Error)]
pub enum FuzzlingError {
    /// Unrecoverable fault raised by the E terminal; expected to unwind
    /// uncaught to the process boundary.
    #[error("E just failed!")]
    Fault,
    #[error("failed to write terminal output")]
    Io(#[from] io::Error),
}
