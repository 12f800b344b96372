//! # Pressline Counter Entry Point
//!
//! ## Usage
//! ```bash
//! # Built-in price list, documents in the current directory
//! cargo run -p pressline-counter
//!
//! # Explicit config file
//! cargo run -p pressline-counter -- --config ./counter.toml
//!
//! # Documents elsewhere
//! PRESSLINE_OUTPUT_DIR=/var/spool/pressline cargo run -p pressline-counter
//! ```

use std::process::ExitCode;

use pressline_counter::{CliArgs, USAGE};

fn main() -> ExitCode {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    // The actual setup is in lib.rs for testability
    match pressline_counter::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
