use std::process;

fn main() {
    if let Err(e) = tasklane::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
