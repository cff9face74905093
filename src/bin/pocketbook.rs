use std::process;

fn main() {
    pocketbook::init();
    if let Err(err) = pocketbook::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
