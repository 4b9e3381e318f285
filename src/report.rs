//! Text rendering for the console reports. Every function returns a
//! `String`; the caller decides where it goes.

use crate::library::{Library, MONTHS};

const MONTH_LABELS: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn catalog(library: &Library) -> String {
    let mut out = format!("CATALOG ({} books)\n", library.books().len());
    for (i, book) in library.books().iter().enumerate() {
        out.push_str(&format!(
            "{}. \"{}\" - {} ({}) [{}/{} available]\n",
            i + 1,
            book.title,
            book.author,
            book.genre,
            book.available_copies,
            book.total_copies,
        ));
    }
    out
}

pub fn users(library: &Library) -> String {
    let mut out = format!("REGISTERED USERS ({})\n", library.users().len());
    for user in library.users() {
        out.push_str(&format!(
            "- {} ({}) - {}/{} books borrowed\n",
            user.name,
            user.membership,
            user.borrowed.len(),
            user.membership.limit(),
        ));
    }
    out
}

pub fn active_loans(library: &Library) -> String {
    let active = library.active_loans();
    let mut out = format!("ACTIVE LOANS ({})\n", active.len());
    if active.is_empty() {
        out.push_str("No active loans.\n");
        return out;
    }
    for record in active {
        out.push_str(&format!(
            "- \"{}\" → {} (since {})\n",
            record.book_title, record.user_name, record.loaned_on,
        ));
    }
    out
}

pub fn statistics(library: &Library) -> String {
    let stats = library.statistics();
    format!(
        "Books in catalog: {}\n\
         Total copies: {}\n\
         Available copies: {}\n\
         Loaned copies: {}\n\
         Registered users: {}\n\
         Users with active loans: {}\n\
         Historical loans: {}\n\
         Active loans: {}\n",
        stats.total_books,
        stats.total_copies,
        stats.available_copies,
        stats.loaned_copies,
        stats.total_users,
        stats.active_users,
        stats.total_loans,
        stats.active_loans,
    )
}

pub fn most_borrowed(library: &Library, n: usize) -> String {
    let mut out = format!("TOP {} MOST BORROWED BOOKS\n", n);
    for (i, entry) in library.most_borrowed(n).iter().enumerate() {
        out.push_str(&format!(
            "{}. \"{}\" - {} loans\n",
            i + 1,
            entry.book.title,
            entry.loans,
        ));
    }
    out
}

pub fn most_active_users(library: &Library, n: usize) -> String {
    let mut out = format!("TOP {} MOST ACTIVE USERS\n", n);
    for (i, entry) in library.most_active_users(n).iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - {} loans\n",
            i + 1,
            entry.user.name,
            entry.loans,
        ));
    }
    out
}

/// Per-genre shelf summary; genres with no books are skipped.
pub fn genre_statistics(library: &Library) -> String {
    let mut out = String::from("STATISTICS BY GENRE\n");
    for stats in library.genre_statistics() {
        if stats.books == 0 {
            continue;
        }
        out.push_str(&format!(
            "- {}: {} books, {}/{} copies available\n",
            stats.genre, stats.books, stats.available_copies, stats.total_copies,
        ));
    }
    out
}

/// The genre/month loan matrix with a month header and per-genre totals.
pub fn genre_month_matrix(library: &Library) -> String {
    let matrix = library.genre_month_matrix();
    let mut out = String::from("                ");
    for label in MONTH_LABELS {
        out.push_str(&format!("{:>5}", label));
    }
    out.push_str("  Total\n");

    for (row, counts) in matrix.iter().enumerate() {
        let genre = crate::domain::Genre::ALL[row];
        out.push_str(&format!("{:<16}", genre.as_str()));
        let mut total = 0;
        for count in counts {
            out.push_str(&format!("{:>5}", count));
            total += count;
        }
        out.push_str(&format!("{:>7}\n", total));
    }
    out
}

pub fn available_books(library: &Library) -> String {
    let mut out = String::from("BOOKS CURRENTLY AVAILABLE\n");
    for book in library.available_books() {
        out.push_str(&format!(
            "- \"{}\" ({} copies)\n",
            book.title, book.available_copies,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Genre, Membership, NewBook, NewUser};

    fn seeded() -> Library {
        let mut lib = Library::new();
        lib.add_book(NewBook::new("B1", "Dune", "Frank Herbert", Genre::ScienceFiction, 1965, 2))
            .unwrap();
        lib.register_user(NewUser::new("U1", "Ana", Membership::Student)).unwrap();
        lib
    }

    #[test]
    fn catalog_lists_availability() {
        let lib = seeded();
        let text = catalog(&lib);
        assert!(text.contains("CATALOG (1 books)"));
        assert!(text.contains("\"Dune\" - Frank Herbert (science fiction) [2/2 available]"));
    }

    #[test]
    fn active_loans_report_handles_the_empty_case() {
        let lib = seeded();
        assert!(active_loans(&lib).contains("No active loans."));
    }

    #[test]
    fn matrix_report_has_a_row_per_genre() {
        let mut lib = seeded();
        lib.loan_book_on(
            "U1",
            "B1",
            chrono::NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        )
        .unwrap();

        let text = genre_month_matrix(&lib);
        assert_eq!(text.lines().count(), Genre::COUNT + 1);
        let sci_fi_row = text
            .lines()
            .find(|l| l.starts_with("science fiction"))
            .unwrap();
        assert!(sci_fi_row.ends_with("1"));
    }

    #[test]
    fn genre_statistics_skip_empty_genres() {
        let lib = seeded();
        let text = genre_statistics(&lib);
        assert!(text.contains("science fiction: 1 books"));
        assert!(!text.contains("poetry"));
    }
}
