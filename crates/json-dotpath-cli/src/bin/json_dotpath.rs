//! `json-dotpath` — read or edit a JSON document by dot path.
//!
//! Usage:
//!   json-dotpath get '<path>'
//!   json-dotpath set '<path>' '<value>'
//!   json-dotpath remove '<path>'
//!   json-dotpath has '<path>'
//!
//! The document is read from stdin. Set `RUST_LOG=debug` to see which
//! objects and arrays a write creates.

use json_dotpath_cli::{run, Command};
use std::io::{self, Read, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&command, buf.trim()) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
