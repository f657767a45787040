use clap::Parser;
use marquee::cli::{self, output, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::configure(&cli);

    if let Err(e) = cli::run(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
