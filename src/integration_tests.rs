#[cfg(test)]
mod tests {
    use crate::domain::{Genre, Membership, NewBook, NewUser};
    use crate::library::{Library, LibraryError};

    fn library_with(books: &[(&str, &str, u32)], users: &[(&str, Membership)]) -> Library {
        let mut lib = Library::new();
        for &(key, title, copies) in books {
            lib.add_book(NewBook::new(key, title, "Author", Genre::Novel, 2000, copies))
                .unwrap();
        }
        for &(id, membership) in users {
            lib.register_user(NewUser::new(id, id, membership)).unwrap();
        }
        lib
    }

    #[test]
    fn duplicate_loan_beats_availability_when_copies_remain() {
        // B1 has two copies; the second identical loan must fail on the
        // duplicate check, not on availability.
        let mut lib = library_with(&[("B1", "First", 2)], &[("U1", Membership::Student)]);

        assert!(lib.loan_book("U1", "B1").is_ok());
        assert_eq!(
            lib.loan_book("U1", "B1"),
            Err(LibraryError::AlreadyBorrowed {
                user_id: "U1".into(),
                book_key: "B1".into(),
            })
        );
        assert_eq!(lib.find_book("B1").unwrap().available_copies, 1);
    }

    #[test]
    fn single_copy_circulates_between_users() {
        let mut lib = library_with(
            &[("B2", "Only Copy", 1)],
            &[("U1", Membership::Student), ("U2", Membership::Student)],
        );

        assert!(lib.loan_book("U1", "B2").is_ok());
        assert_eq!(lib.find_book("B2").unwrap().available_copies, 0);

        assert_eq!(
            lib.loan_book("U2", "B2"),
            Err(LibraryError::NoCopiesAvailable("B2".into()))
        );

        assert!(lib.return_book("U1", "B2").is_ok());
        assert_eq!(lib.find_book("B2").unwrap().available_copies, 1);
        assert!(lib.loan_book("U2", "B2").is_ok());
    }

    #[test]
    fn general_membership_stops_at_two_loans() {
        let mut lib = library_with(
            &[("B1", "First", 1), ("B2", "Second", 1), ("B3", "Third", 1)],
            &[("U1", Membership::General)],
        );

        assert!(lib.loan_book("U1", "B1").is_ok());
        assert!(lib.loan_book("U1", "B2").is_ok());
        assert_eq!(
            lib.loan_book("U1", "B3"),
            Err(LibraryError::LoanLimitExceeded { limit: 2 })
        );
        assert_eq!(lib.find_book("B3").unwrap().available_copies, 1);
        assert_eq!(lib.find_user("U1").unwrap().borrowed.len(), 2);
    }

    #[test]
    fn loan_return_round_trip_clears_the_borrower() {
        let mut lib = library_with(&[("B1", "First", 2)], &[("U1", Membership::Student)]);
        let before = lib.find_book("B1").unwrap().available_copies;

        lib.loan_book("U1", "B1").unwrap();
        assert!(lib.is_active_borrower("U1"));

        lib.return_book("U1", "B1").unwrap();
        assert_eq!(lib.find_book("B1").unwrap().available_copies, before);
        assert!(!lib.is_active_borrower("U1"));
    }

    #[test]
    fn a_full_session_keeps_the_availability_invariant() {
        let mut lib = library_with(
            &[("B1", "First", 3), ("B2", "Second", 1), ("B3", "Third", 2)],
            &[
                ("U1", Membership::Student),
                ("U2", Membership::Professor),
                ("U3", Membership::General),
            ],
        );

        // A scripted mix of successes and rejections.
        let script: &[(&str, &str, bool)] = &[
            ("U1", "B1", true),
            ("U2", "B1", true),
            ("U3", "B2", true),
            ("U3", "B3", true),
            ("U3", "B1", false), // limit reached
            ("U1", "B2", false), // no copies
        ];
        for &(user, book, expect_ok) in script {
            assert_eq!(lib.loan_book(user, book).is_ok(), expect_ok, "{user}/{book}");
            for b in lib.books() {
                assert!(b.available_copies <= b.total_copies);
            }
        }

        lib.return_book("U3", "B2").unwrap();
        assert!(lib.loan_book("U1", "B2").is_ok());

        let stats = lib.statistics();
        assert_eq!(stats.total_loans, 5);
        assert_eq!(stats.active_loans, 4);
        assert_eq!(stats.active_users, 3);
        assert_eq!(stats.loaned_copies, 4);
    }
}
