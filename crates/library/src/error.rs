use bookstoread_core::BookError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("BookShelf capacity of {capacity} is reached. You can't add more books.")]
    CapacityExceeded { capacity: usize },

    #[error("Progress is undefined for an empty bookshelf")]
    DivisionUndefined,

    #[error("Invalid capacity: {0}. A bookshelf must hold at least one book")]
    InvalidCapacity(usize),

    #[error("Invalid shelf config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse shelf config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Book error: {0}")]
    Book(#[from] BookError),
}

impl LibraryError {
    /// Returns true if the caller can continue using the shelf after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidConfig(_) | Self::ConfigParse(_))
    }
}

// Both type aliases for convenience
pub type Result<T> = std::result::Result<T, LibraryError>;
pub type LibraryResult<T> = std::result::Result<T, LibraryError>;
