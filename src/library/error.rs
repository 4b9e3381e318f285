use thiserror::Error;

/// Everything that can go wrong inside the library.
///
/// All variants are recoverable business-rule failures reported to the
/// immediate caller; none of them aborts the program.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LibraryError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("key already exists: {0}")]
    DuplicateKey(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("book not found: {0}")]
    BookNotFound(String),
    #[error("no copies available: {0}")]
    NoCopiesAvailable(String),
    #[error("loan limit reached ({limit})")]
    LoanLimitExceeded { limit: usize },
    #[error("user {user_id} already borrowed {book_key}")]
    AlreadyBorrowed { user_id: String, book_key: String },
    #[error("user {user_id} has not borrowed {book_key}")]
    NotBorrowed { user_id: String, book_key: String },
}

pub type LibraryResult<T> = Result<T, LibraryError>;
