use chrono::NaiveDate;

/// Lifecycle of a loan record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    Active,
    Returned,
}

/// One borrowing event in the ledger.
///
/// Title and user name are snapshots taken at loan time. Renaming a book
/// or a user later must not rewrite past records, so the ledger keeps its
/// own copies instead of pointing back into the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRecord {
    pub book_key: String,
    pub user_id: String,
    pub book_title: String,
    pub user_name: String,
    pub loaned_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
    pub status: LoanStatus,
}

impl LoanRecord {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}
