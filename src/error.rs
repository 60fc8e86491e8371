use std::fmt;

/// Errors returned by fallible [`Tree`][crate::Tree] operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// [`Tree::remove`][crate::Tree::remove] was asked for an item the tree doesn't hold.
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => f.write_str("item not in tree"),
        }
    }
}

impl std::error::Error for Error {}
