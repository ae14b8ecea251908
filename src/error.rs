use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Select at least one character type")]
    NoClassesSelected,

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
