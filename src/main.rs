mod cli;

fn main() {
    match cli::run() {
        Ok(true) => {}
        Ok(false) => {
            #[allow(clippy::exit)]
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            #[allow(clippy::exit)]
            std::process::exit(2);
        }
    }
}
