use std::process;

fn main() {
    if let Err(e) = quotefile::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
