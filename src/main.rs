use fuzzling::outcome::EXIT_FAILURE;

fn main() {
    match fuzzling::run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("Error: {err:?}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
