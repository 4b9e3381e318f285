use std::fmt;

/// The fixed set of genres the catalog recognizes.
///
/// Each genre has a dense index so it can address a row of the
/// genre/month loan matrix and a slot of the genre index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Novel,
    ScienceFiction,
    Children,
    History,
    Poetry,
    Drama,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Novel,
        Genre::ScienceFiction,
        Genre::Children,
        Genre::History,
        Genre::Poetry,
        Genre::Drama,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Dense row index, stable across the lifetime of the program.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Novel => "novel",
            Genre::ScienceFiction => "science fiction",
            Genre::Children => "children",
            Genre::History => "history",
            Genre::Poetry => "poetry",
            Genre::Drama => "drama",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogued book. The key is an ISBN-like string unique within the
/// catalog. `available_copies` never exceeds `total_copies`.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub key: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub year: u16,
    pub total_copies: u32,
    pub available_copies: u32,
}

/// Payload for adding a book to the catalog.
///
/// `available_copies` is not a field: a freshly catalogued book always
/// starts with every copy on the shelf.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub key: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub year: u16,
    pub total_copies: u32,
}

impl NewBook {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        year: u16,
        total_copies: u32,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            author: author.into(),
            genre,
            year,
            total_copies,
        }
    }
}

/// Which book attribute a catalog search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}
