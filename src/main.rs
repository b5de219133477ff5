mod api;
mod cli;
mod config;
mod context;
mod report;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::resolve(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = report::run(&config) {
        eprintln!("❌ Error: {err}");
        std::process::exit(1);
    }
}
