//! End-to-end session tests
//!
//! These tests drive a complete session against predefined fixtures. Each
//! test:
//! 1. Copies foods.dat and coins.dat from a fixture directory into a temp dir
//! 2. Loads the menu and the till from the copies
//! 3. Runs the session with input.txt as the operator's keystrokes
//! 4. Compares both data files with expected_foods.dat and expected_coins.dat
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Save round trips (sorting on load, ascending coin order on save)
//! - Purchases with change
//! - Adding and removing food items
//! - Malformed data lines
//! - Aborting and running out of input (nothing saved)

#[cfg(test)]
mod tests {
    use food_till::session::{Console, DataFiles, Session, SessionConfig, SessionOutcome};
    use food_till::{Menu, Till};
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Run a session over a fixture and compare the data files afterwards
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "add_item")
    /// * `expected_outcome` - How the session should end
    ///
    /// # Returns
    ///
    /// Everything the session printed, for further checks.
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or the files don't match.
    fn run_fixture(fixture_name: &str, expected_outcome: SessionOutcome) -> String {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let work_dir = TempDir::new().expect("Failed to create temp dir");

        let files = DataFiles {
            menu_file: work_dir.path().join("foods.dat"),
            coin_file: work_dir.path().join("coins.dat"),
        };
        fs::copy(fixture_dir.join("foods.dat"), &files.menu_file).expect("Failed to copy foods.dat");
        fs::copy(fixture_dir.join("coins.dat"), &files.coin_file).expect("Failed to copy coins.dat");

        let mut menu = Menu::new();
        menu.load_menu_from_file(&files.menu_file)
            .expect("Failed to load menu");
        let mut till = Till::new();
        till.load_denominations(&files.coin_file)
            .expect("Failed to load coins");

        let input = fs::read(fixture_dir.join("input.txt")).expect("Failed to read input.txt");
        let console = Console::new(input.as_slice(), Vec::new());
        let mut session = Session::new(
            console,
            &mut menu,
            &mut till,
            files.clone(),
            SessionConfig::default(),
        );
        let outcome = session.run().expect("Session failed");
        let output = String::from_utf8(session.into_output()).expect("Output is not UTF-8");

        assert_eq!(outcome, expected_outcome, "Outcome mismatch for fixture: {}", fixture_name);

        for (actual_path, expected_name) in [
            (&files.menu_file, "expected_foods.dat"),
            (&files.coin_file, "expected_coins.dat"),
        ] {
            let actual = fs::read_to_string(actual_path).expect("Failed to read saved file");
            let expected = fs::read_to_string(fixture_dir.join(expected_name))
                .expect("Failed to read expected file");
            assert_eq!(
                actual, expected,
                "\n\nFile mismatch for fixture: {} ({})\n\nActual:\n{}\n\nExpected:\n{}\n",
                fixture_name, expected_name, actual, expected
            );
        }

        output
    }

    #[rstest]
    #[case("save_round_trip", SessionOutcome::Saved)]
    #[case("purchase_with_change", SessionOutcome::Saved)]
    #[case("add_item", SessionOutcome::Saved)]
    #[case("remove_item", SessionOutcome::Saved)]
    #[case("malformed_lines", SessionOutcome::Saved)]
    #[case("abort_discards", SessionOutcome::Aborted)]
    #[case("end_of_input", SessionOutcome::EndOfInput)]
    fn test_fixtures(#[case] fixture: &str, #[case] outcome: SessionOutcome) {
        run_fixture(fixture, outcome);
    }

    #[test]
    fn test_purchase_receipts() {
        let output = run_fixture("purchase_with_change", SessionOutcome::Saved);

        assert!(output.contains("You have selected \"Soup - Pumpkin soup\". This will cost you $4.00"));
        assert!(output.contains("You still need to give us $2.00: "));
        assert_eq!(output.matches("Your change is 50c").count(), 2);
        assert!(output.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_remove_reports_unknown_then_removes() {
        let output = run_fixture("remove_item", SessionOutcome::Saved);

        assert!(output.contains("Failed to remove item with ID F0009. Item may not exist."));
        assert!(output.contains("\"F0002 - Soup - Pumpkin soup\" has been removed from the system."));
    }

    #[test]
    fn test_abort_message() {
        let output = run_fixture("abort_discards", SessionOutcome::Aborted);
        assert!(output.ends_with("Program is terminating. All program data will be lost.\n"));
    }

    #[test]
    fn test_end_of_input_refunds_partial_payment() {
        let output = run_fixture("end_of_input", SessionOutcome::EndOfInput);

        assert!(output.contains("Refunded: $2.00"));
        assert!(!output.contains("Good bye!"));
    }

    #[test]
    fn test_balance_report_after_sale() {
        let work_dir = TempDir::new().unwrap();
        let files = DataFiles {
            menu_file: work_dir.path().join("foods.dat"),
            coin_file: work_dir.path().join("coins.dat"),
        };

        let mut menu = Menu::new();
        menu.load_menu_from_file(Path::new("tests/fixtures/save_round_trip/foods.dat"))
            .unwrap();
        let mut till: Till = [(100, 0), (500, 0)].into_iter().collect();

        let input = b"2\nF0002\n500\n6\n7\n";
        let console = Console::new(&input[..], Vec::new());
        let mut session = Session::new(console, &mut menu, &mut till, files, SessionConfig::default());
        assert_eq!(session.run().unwrap(), SessionOutcome::Aborted);
        let output = String::from_utf8(session.into_output()).unwrap();

        // No $1 coin to give back, so the sale is refused and the till stays empty
        assert!(output.contains("Unable to provide correct change."));
        assert!(output.contains("                  $ 0.00\n"));
        assert_eq!(till.total_value(), 0);
    }
}
