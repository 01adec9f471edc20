//! Food Till CLI
//!
//! Interactive point-of-sale simulator over a menu file and a coin file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- foods.dat coins.dat
//! cargo run -- --name-width 20 --max-remove-attempts 3 foods.dat coins.dat
//! RUST_LOG=info cargo run -- foods.dat coins.dat
//! ```
//!
//! Both files are loaded at start-up; malformed lines are reported and
//! skipped. "Save and Exit" writes both files back; "Abort Program" or the
//! end of input leaves them untouched.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (saved, aborted or input ended)
//! - 1: Console I/O error
//! - 2: Invalid arguments (reported by clap)

use food_till::cli;
use food_till::session::{Console, Session};
use food_till::{Menu, Till};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let files = args.data_files();
    let config = args.to_session_config();

    println!("Food file: {}", files.menu_file.display());
    println!("Coins file: {}", files.coin_file.display());

    // A file that cannot be opened leaves an empty collection to work with
    let mut menu = Menu::new();
    if let Err(e) = menu.load_menu_from_file(&files.menu_file) {
        eprintln!("{}", e);
    }

    let mut till = Till::new();
    if let Err(e) = till.load_denominations(&files.coin_file) {
        eprintln!("{}", e);
    }

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    let mut session = Session::new(console, &mut menu, &mut till, files, config);

    if let Err(e) = session.run() {
        error!(error = %e, "Session ended with an I/O error");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
