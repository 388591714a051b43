use std::io;

use thiserror::Error;

/// Everything that can end a game early.
///
/// All of these are fatal: the game has no way to recover from bad input, so they bubble up to `main`.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// The player typed something that isn't an integer when one was expected.
    #[error("expected a whole number, but got {token:?}")]
    NotANumber { token: String },
    /// Input ran out before the player finished answering.
    #[error("input closed before every number was entered")]
    InputClosed,
    /// Reading from or writing to the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
