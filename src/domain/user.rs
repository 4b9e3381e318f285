use std::fmt;

/// Membership tiers. Each tier carries its own simultaneous-loan limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Student,
    Professor,
    General,
}

impl Membership {
    /// Maximum number of books a user of this tier may hold at once.
    pub fn limit(self) -> usize {
        match self {
            Membership::Student => 3,
            Membership::Professor => 5,
            Membership::General => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Membership::Student => "student",
            Membership::Professor => "professor",
            Membership::General => "general",
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered library user.
///
/// `borrowed` holds the keys of books currently out to this user, never
/// with duplicates. `history` holds indices into the library's global
/// ledger, so the per-user view and the ledger always describe the same
/// records. `total_loans` only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub membership: Membership,
    pub borrowed: Vec<String>,
    pub total_loans: u64,
    pub(crate) history: Vec<usize>,
}

/// Payload for registering a new user. Email is optional.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub membership: Membership,
}

impl NewUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>, membership: Membership) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            membership,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
