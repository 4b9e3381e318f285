use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::domain::{
    Book, Genre, LoanRecord, LoanStatus, NewBook, NewUser, SearchField, User,
};

use super::error::{LibraryError, LibraryResult};

/// Number of columns in the genre/month loan matrix, one per calendar month.
pub const MONTHS: usize = 12;

/// In-memory catalog, user registry, and loan ledger.
///
/// Books and users live in insertion-ordered vectors with key→index maps
/// on the side, so lookups are O(1) while searches, listings, and rankings
/// keep the order entries were added in. The ledger is append-only; a
/// record is mutated exactly once, when its loan is returned.
///
/// The library is not safe for concurrent mutation. Callers that share an
/// instance across threads must wrap it in their own lock.
pub struct Library {
    books: Vec<Book>,
    book_index: HashMap<String, usize>,
    users: Vec<User>,
    user_index: HashMap<String, usize>,
    ledger: Vec<LoanRecord>,
    genre_index: [Vec<String>; Genre::COUNT],
    active_borrowers: HashSet<String>,
    loan_counts: HashMap<String, u64>,
    matrix: [[u64; MONTHS]; Genre::COUNT],
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            book_index: HashMap::new(),
            users: Vec::new(),
            user_index: HashMap::new(),
            ledger: Vec::new(),
            genre_index: Default::default(),
            active_borrowers: HashSet::new(),
            loan_counts: HashMap::new(),
            matrix: [[0; MONTHS]; Genre::COUNT],
        }
    }

    // --- Catalog management ---

    /// Adds a book to the catalog with every copy available.
    ///
    /// # Errors
    /// `Validation` if key, title, or author is empty or the book has no
    /// copies; `DuplicateKey` if the catalog already holds the key.
    pub fn add_book(&mut self, new: NewBook) -> LibraryResult<()> {
        if new.key.is_empty() || new.title.is_empty() || new.author.is_empty() {
            return Err(LibraryError::Validation(
                "a book needs a key, a title, and an author".into(),
            ));
        }
        if new.total_copies == 0 {
            return Err(LibraryError::Validation(format!(
                "book {} must have at least one copy",
                new.key
            )));
        }
        if self.book_index.contains_key(&new.key) {
            return Err(LibraryError::DuplicateKey(new.key));
        }

        let book = Book {
            key: new.key.clone(),
            title: new.title,
            author: new.author,
            genre: new.genre,
            year: new.year,
            total_copies: new.total_copies,
            available_copies: new.total_copies,
        };

        self.genre_index[new.genre.index()].push(new.key.clone());
        self.loan_counts.insert(new.key.clone(), 0);
        self.book_index.insert(new.key, self.books.len());
        self.books.push(book);
        Ok(())
    }

    pub fn find_book(&self, key: &str) -> Option<&Book> {
        self.book_index.get(key).map(|&i| &self.books[i])
    }

    /// Case-insensitive substring search over one book attribute, in
    /// catalog insertion order.
    pub fn search_books(&self, field: SearchField, needle: &str) -> Vec<&Book> {
        let needle = needle.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                let haystack = match field {
                    SearchField::Title => book.title.as_str(),
                    SearchField::Author => book.author.as_str(),
                    SearchField::Genre => book.genre.as_str(),
                };
                haystack.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Books with at least one copy on the shelf, in catalog order.
    pub fn available_books(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.available_copies > 0)
            .collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    // --- User management ---

    /// Registers a user with an empty borrowed list.
    ///
    /// # Errors
    /// `Validation` if id or name is empty; `DuplicateKey` if the id is
    /// already registered. Email may be empty.
    pub fn register_user(&mut self, new: NewUser) -> LibraryResult<()> {
        if new.id.is_empty() || new.name.is_empty() {
            return Err(LibraryError::Validation(
                "a user needs an id and a name".into(),
            ));
        }
        if self.user_index.contains_key(&new.id) {
            return Err(LibraryError::DuplicateKey(new.id));
        }

        let user = User {
            id: new.id.clone(),
            name: new.name,
            email: new.email,
            membership: new.membership,
            borrowed: Vec::new(),
            total_loans: 0,
            history: Vec::new(),
        };

        self.user_index.insert(new.id, self.users.len());
        self.users.push(user);
        Ok(())
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.user_index.get(id).map(|&i| &self.users[i])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Whether the user exists and still has room under their
    /// membership's loan limit.
    pub fn loan_eligible(&self, user_id: &str) -> bool {
        self.find_user(user_id)
            .map(|user| user.borrowed.len() < user.membership.limit())
            .unwrap_or(false)
    }

    // --- Loans ---

    /// Loans a book to a user, dated today.
    pub fn loan_book(&mut self, user_id: &str, book_key: &str) -> LibraryResult<String> {
        self.loan_book_on(user_id, book_key, Utc::now().date_naive())
    }

    /// Loans a book to a user on an explicit date.
    ///
    /// Checks run in a fixed order: unknown user, unknown book, no copies
    /// on the shelf, loan limit reached, book already out to this user.
    /// The first failed check wins and nothing is mutated. In particular,
    /// a repeat loan of the same book fails `AlreadyBorrowed` only when
    /// copies remain; with none left it fails `NoCopiesAvailable` first.
    ///
    /// On success the confirmation names the book and the borrower.
    pub fn loan_book_on(
        &mut self,
        user_id: &str,
        book_key: &str,
        date: NaiveDate,
    ) -> LibraryResult<String> {
        let user_idx = *self
            .user_index
            .get(user_id)
            .ok_or_else(|| LibraryError::UserNotFound(user_id.into()))?;
        let book_idx = *self
            .book_index
            .get(book_key)
            .ok_or_else(|| LibraryError::BookNotFound(book_key.into()))?;

        if self.books[book_idx].available_copies == 0 {
            return Err(LibraryError::NoCopiesAvailable(book_key.into()));
        }
        let limit = self.users[user_idx].membership.limit();
        if self.users[user_idx].borrowed.len() >= limit {
            return Err(LibraryError::LoanLimitExceeded { limit });
        }
        if self.users[user_idx].borrowed.iter().any(|k| k == book_key) {
            return Err(LibraryError::AlreadyBorrowed {
                user_id: user_id.into(),
                book_key: book_key.into(),
            });
        }

        let book = &mut self.books[book_idx];
        book.available_copies -= 1;
        let record = LoanRecord {
            book_key: book_key.into(),
            user_id: user_id.into(),
            book_title: book.title.clone(),
            user_name: self.users[user_idx].name.clone(),
            loaned_on: date,
            returned_on: None,
            status: LoanStatus::Active,
        };
        let genre_row = book.genre.index();
        let confirmation = format!("\"{}\" → {}", record.book_title, record.user_name);

        let user = &mut self.users[user_idx];
        user.borrowed.push(book_key.into());
        user.total_loans += 1;
        user.history.push(self.ledger.len());
        self.ledger.push(record);

        self.active_borrowers.insert(user_id.into());
        *self.loan_counts.entry(book_key.into()).or_insert(0) += 1;
        self.matrix[genre_row][date.month0() as usize] += 1;

        debug!(user_id, book_key, "loan recorded");
        Ok(confirmation)
    }

    /// Returns a book, dated today.
    pub fn return_book(&mut self, user_id: &str, book_key: &str) -> LibraryResult<String> {
        self.return_book_on(user_id, book_key, Utc::now().date_naive())
    }

    /// Returns a book on an explicit date.
    ///
    /// The most recent active ledger record for this (user, book) pair is
    /// marked returned. A passing borrowed-list check with no matching
    /// ledger record means the two structures disagree; the original
    /// behavior of leaving the ledger untouched is kept, with a warning.
    pub fn return_book_on(
        &mut self,
        user_id: &str,
        book_key: &str,
        date: NaiveDate,
    ) -> LibraryResult<String> {
        let user_idx = *self
            .user_index
            .get(user_id)
            .ok_or_else(|| LibraryError::UserNotFound(user_id.into()))?;
        let book_idx = *self
            .book_index
            .get(book_key)
            .ok_or_else(|| LibraryError::BookNotFound(book_key.into()))?;

        let user = &mut self.users[user_idx];
        let borrowed_at = user
            .borrowed
            .iter()
            .position(|k| k == book_key)
            .ok_or_else(|| LibraryError::NotBorrowed {
                user_id: user_id.into(),
                book_key: book_key.into(),
            })?;

        user.borrowed.remove(borrowed_at);
        if user.borrowed.is_empty() {
            self.active_borrowers.remove(user_id);
        }
        let user_name = user.name.clone();

        let book = &mut self.books[book_idx];
        book.available_copies += 1;
        let confirmation = format!("\"{}\" ← {}", book.title, user_name);

        match self
            .ledger
            .iter_mut()
            .rev()
            .find(|r| r.book_key == book_key && r.user_id == user_id && r.is_active())
        {
            Some(record) => {
                record.status = LoanStatus::Returned;
                record.returned_on = Some(date);
            }
            None => {
                warn!(user_id, book_key, "no active ledger record for return");
            }
        }

        debug!(user_id, book_key, "return recorded");
        Ok(confirmation)
    }

    /// Ledger records still out, in loan order.
    pub fn active_loans(&self) -> Vec<&LoanRecord> {
        self.ledger.iter().filter(|r| r.is_active()).collect()
    }

    /// The user's loan records, oldest first, or `None` for an unknown id.
    pub fn user_history(&self, user_id: &str) -> Option<Vec<&LoanRecord>> {
        let user = self.find_user(user_id)?;
        Some(user.history.iter().map(|&i| &self.ledger[i]).collect())
    }

    pub fn ledger(&self) -> &[LoanRecord] {
        &self.ledger
    }

    pub(super) fn loan_count(&self, book_key: &str) -> u64 {
        self.loan_counts.get(book_key).copied().unwrap_or(0)
    }

    pub(super) fn active_borrower_count(&self) -> usize {
        self.active_borrowers.len()
    }

    pub fn is_active_borrower(&self, user_id: &str) -> bool {
        self.active_borrowers.contains(user_id)
    }

    pub(super) fn genre_book_keys(&self, genre: Genre) -> &[String] {
        &self.genre_index[genre.index()]
    }

    /// Loan counts per genre row and calendar month column.
    pub fn genre_month_matrix(&self) -> &[[u64; MONTHS]; Genre::COUNT] {
        &self.matrix
    }
}
