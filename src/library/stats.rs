use crate::domain::{Book, Genre, User};

use super::repository::Library;

/// Snapshot of the library's aggregate counters. Pure read, no mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStats {
    pub total_books: usize,
    pub total_copies: u32,
    pub available_copies: u32,
    pub loaned_copies: u32,
    pub total_users: usize,
    pub active_users: usize,
    pub total_loans: usize,
    pub active_loans: usize,
}

/// One row of the most-borrowed ranking.
#[derive(Debug, Clone)]
pub struct RankedBook<'a> {
    pub book: &'a Book,
    pub loans: u64,
}

/// One row of the most-active-users ranking.
#[derive(Debug, Clone)]
pub struct RankedUser<'a> {
    pub user: &'a User,
    pub loans: u64,
}

/// Per-genre shelf summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreStats {
    pub genre: Genre,
    pub books: usize,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl Library {
    pub fn statistics(&self) -> LibraryStats {
        let total_copies: u32 = self.books().iter().map(|b| b.total_copies).sum();
        let available_copies: u32 = self.books().iter().map(|b| b.available_copies).sum();
        LibraryStats {
            total_books: self.books().len(),
            total_copies,
            available_copies,
            loaned_copies: total_copies - available_copies,
            total_users: self.users().len(),
            active_users: self.active_borrower_count(),
            total_loans: self.ledger().len(),
            active_loans: self.active_loans().len(),
        }
    }

    /// At most `n` books ranked by cumulative loan count, descending.
    /// Ties keep catalog order; the sort is stable.
    pub fn most_borrowed(&self, n: usize) -> Vec<RankedBook<'_>> {
        let mut ranking: Vec<RankedBook<'_>> = self
            .books()
            .iter()
            .map(|book| RankedBook {
                loans: self.loan_count(&book.key),
                book,
            })
            .collect();
        ranking.sort_by(|a, b| b.loans.cmp(&a.loans));
        ranking.truncate(n);
        ranking
    }

    /// At most `n` users ranked by historical loan count, descending.
    /// Ties keep registration order.
    pub fn most_active_users(&self, n: usize) -> Vec<RankedUser<'_>> {
        let mut ranking: Vec<RankedUser<'_>> = self
            .users()
            .iter()
            .map(|user| RankedUser {
                loans: user.total_loans,
                user,
            })
            .collect();
        ranking.sort_by(|a, b| b.loans.cmp(&a.loans));
        ranking.truncate(n);
        ranking
    }

    /// Shelf summary for every genre, in the fixed genre order.
    pub fn genre_statistics(&self) -> Vec<GenreStats> {
        Genre::ALL
            .iter()
            .map(|&genre| {
                let mut stats = GenreStats {
                    genre,
                    books: 0,
                    total_copies: 0,
                    available_copies: 0,
                };
                for key in self.genre_book_keys(genre) {
                    if let Some(book) = self.find_book(key) {
                        stats.books += 1;
                        stats.total_copies += book.total_copies;
                        stats.available_copies += book.available_copies;
                    }
                }
                stats
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Membership, NewBook, NewUser};

    fn seeded() -> Library {
        let mut lib = Library::new();
        lib.add_book(NewBook::new("B1", "Dune", "Frank Herbert", Genre::ScienceFiction, 1965, 3))
            .unwrap();
        lib.add_book(NewBook::new("B2", "Hamlet", "Shakespeare", Genre::Drama, 1603, 2))
            .unwrap();
        lib.add_book(NewBook::new("B3", "Sapiens", "Harari", Genre::History, 2011, 2))
            .unwrap();
        lib.register_user(NewUser::new("U1", "Ana", Membership::Student)).unwrap();
        lib.register_user(NewUser::new("U2", "Pedro", Membership::Professor)).unwrap();
        lib
    }

    #[test]
    fn statistics_track_loans_and_returns() {
        let mut lib = seeded();
        lib.loan_book("U1", "B1").unwrap();
        lib.loan_book("U2", "B1").unwrap();
        lib.loan_book("U2", "B2").unwrap();
        lib.return_book("U2", "B2").unwrap();

        let stats = lib.statistics();
        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.total_copies, 7);
        assert_eq!(stats.available_copies, 5);
        assert_eq!(stats.loaned_copies, 2);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.active_users, 2);
        assert_eq!(stats.total_loans, 3);
        assert_eq!(stats.active_loans, 2);
    }

    #[test]
    fn most_borrowed_is_descending_and_bounded() {
        let mut lib = seeded();
        lib.loan_book("U1", "B2").unwrap();
        lib.return_book("U1", "B2").unwrap();
        lib.loan_book("U1", "B2").unwrap();
        lib.loan_book("U2", "B1").unwrap();

        let top = lib.most_borrowed(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].book.key, "B2");
        assert_eq!(top[0].loans, 2);
        assert_eq!(top[1].book.key, "B1");
        assert_eq!(top[1].loans, 1);
    }

    #[test]
    fn most_borrowed_ties_keep_catalog_order() {
        let mut lib = seeded();
        lib.loan_book("U1", "B1").unwrap();
        lib.loan_book("U1", "B2").unwrap();
        lib.loan_book("U1", "B3").unwrap();

        let top: Vec<_> = lib.most_borrowed(3).iter().map(|r| r.book.key.clone()).collect();
        assert_eq!(top, vec!["B1".to_string(), "B2".into(), "B3".into()]);
    }

    #[test]
    fn most_active_users_rank_by_historical_count() {
        let mut lib = seeded();
        lib.loan_book("U2", "B1").unwrap();
        lib.loan_book("U2", "B2").unwrap();
        lib.loan_book("U1", "B3").unwrap();
        // Returns do not shrink the historical count.
        lib.return_book("U2", "B2").unwrap();

        let top = lib.most_active_users(5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].user.id, "U2");
        assert_eq!(top[0].loans, 2);
        assert_eq!(top[1].user.id, "U1");
    }

    #[test]
    fn genre_statistics_cover_every_genre() {
        let mut lib = seeded();
        lib.loan_book("U1", "B1").unwrap();

        let stats = lib.genre_statistics();
        assert_eq!(stats.len(), Genre::COUNT);

        let sci_fi = &stats[Genre::ScienceFiction.index()];
        assert_eq!(sci_fi.books, 1);
        assert_eq!(sci_fi.total_copies, 3);
        assert_eq!(sci_fi.available_copies, 2);

        let poetry = &stats[Genre::Poetry.index()];
        assert_eq!(poetry.books, 0);
    }
}
