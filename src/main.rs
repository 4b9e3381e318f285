mod domain;
mod library;
mod report;
mod telemetry;

#[cfg(test)]
mod integration_tests;

use tracing::{info, warn};

use crate::domain::{Genre, Membership, NewBook, NewUser, SearchField};
use crate::library::Library;
use crate::telemetry::setup_tracing;

/// Loads the sample catalog and user registry.
fn seed(library: &mut Library) {
    let books = [
        NewBook::new("978-84-376-0494-7", "Don Quijote de la Mancha", "Miguel de Cervantes", Genre::Novel, 1605, 3),
        NewBook::new("978-84-204-8499-3", "Cien años de soledad", "Gabriel García Márquez", Genre::Novel, 1967, 2),
        NewBook::new("978-84-9838-074-5", "El principito", "Antoine de Saint-Exupéry", Genre::Children, 1943, 4),
        NewBook::new("978-84-663-2738-8", "1984", "George Orwell", Genre::ScienceFiction, 1949, 2),
        NewBook::new("978-84-9759-632-1", "La sombra del viento", "Carlos Ruiz Zafón", Genre::Novel, 2001, 3),
        NewBook::new("978-84-233-4789-1", "Breve historia del tiempo", "Stephen Hawking", Genre::ScienceFiction, 1988, 2),
        NewBook::new("978-84-9104-925-2", "Sapiens", "Yuval Noah Harari", Genre::History, 2011, 3),
        NewBook::new("978-84-670-5052-1", "Romeo y Julieta", "William Shakespeare", Genre::Drama, 1597, 2),
    ];
    for book in books {
        if let Err(e) = library.add_book(book) {
            warn!(error = %e, "could not seed book");
        }
    }

    let users = [
        NewUser::new("U001", "Ana García", Membership::Student).with_email("ana@email.com"),
        NewUser::new("U002", "Carlos López", Membership::Professor).with_email("carlos@email.com"),
        NewUser::new("U003", "María Rodríguez", Membership::Student).with_email("maria@email.com"),
        NewUser::new("U004", "Pedro Sánchez", Membership::General).with_email("pedro@email.com"),
        NewUser::new("U005", "Laura Martínez", Membership::Professor).with_email("laura@email.com"),
    ];
    for user in users {
        if let Err(e) = library.register_user(user) {
            warn!(error = %e, "could not seed user");
        }
    }
}

fn print_outcome(result: Result<String, library::LibraryError>) {
    match result {
        Ok(msg) => println!("✓ {msg}"),
        Err(e) => println!("✗ {e}"),
    }
}

fn main() {
    setup_tracing();
    info!("starting library system demo");

    let mut library = Library::new();
    seed(&mut library);

    println!("{}", report::catalog(&library));
    println!("{}", report::users(&library));

    println!("LOAN OPERATIONS");
    println!("{}", "-".repeat(60));
    print_outcome(library.loan_book("U001", "978-84-376-0494-7"));
    print_outcome(library.loan_book("U001", "978-84-204-8499-3"));
    print_outcome(library.loan_book("U002", "978-84-9838-074-5"));
    print_outcome(library.loan_book("U002", "978-84-663-2738-8"));
    print_outcome(library.loan_book("U003", "978-84-376-0494-7"));
    print_outcome(library.loan_book("U003", "978-84-9838-074-5"));
    print_outcome(library.loan_book("U004", "978-84-9759-632-1"));
    print_outcome(library.loan_book("U004", "978-84-9104-925-2"));
    // U004 is general membership: this one exceeds the limit of 2.
    print_outcome(library.loan_book("U004", "978-84-670-5052-1"));
    print_outcome(library.return_book("U001", "978-84-204-8499-3"));

    println!();
    println!("{}", report::active_loans(&library));

    println!("BOOK SEARCH");
    println!("{}", "-".repeat(60));
    println!("Books by author 'García':");
    for book in library.search_books(SearchField::Author, "García") {
        println!("  - \"{}\" by {}", book.title, book.author);
    }
    println!("Books in genre 'novel':");
    for book in library.search_books(SearchField::Genre, "novel") {
        println!("  - \"{}\"", book.title);
    }

    println!();
    println!("GENERAL STATISTICS");
    println!("{}", "-".repeat(60));
    println!("{}", report::statistics(&library));
    println!("{}", report::most_borrowed(&library, 3));
    println!("{}", report::most_active_users(&library, 3));
    println!("{}", report::genre_statistics(&library));
    println!("{}", report::genre_month_matrix(&library));
    println!("{}", report::available_books(&library));

    info!("library system demo finished");
}
