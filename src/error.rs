use std::{io, path::PathBuf};
use thiserror::Error;

/// Any error that can happen while reading or writing a property list.
///
/// Every operation of this crate returns either a [ReadError] or a
/// [WriteError]; this type unifies both so callers can propagate them with `?`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlistError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl PlistError {
    /// Checks if the error happened while reading a plist.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read(_))
    }

    /// Checks if the error happened while writing a plist.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

/// An error that may happen during reading a plist from a file or a byte slice.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadError {
    /// Happens if a file cannot be opened for reading.
    #[error("Unable to open plist '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Happens if contents cannot be read or aren't a valid plist.
    #[error("Unable to decode plist: {0}")]
    Decode(#[source] plist::Error),
}

/// An error that may happen during writing a plist into a file or a byte buffer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WriteError {
    /// Happens if a file cannot be created or truncated.
    #[error("Unable to create plist '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Happens if a value contains something the chosen format can't hold,
    /// or if the codec fails to write it out (the codec flushes the output
    /// itself, so a full disk also ends up here).
    #[error("Unable to encode plist: {0}")]
    Encode(#[source] plist::Error),
}
