//! `folc` - standalone binary entry point.
//!
//! A thin wrapper around [`fol_cli::run_cli`]: parse arguments, delegate,
//! print `Error: {e}` and exit 1 on failure. All command logic lives in
//! the library crate for testability.

fn main() {
    if let Err(e) = fol_cli::run_cli() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
