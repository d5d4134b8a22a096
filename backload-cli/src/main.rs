//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = backload_cli::run() {
        eprintln!("backload: {err}");
        std::process::exit(1);
    }
}
