//! Terminal portfolio with quadrant navigation.

mod app;
mod config;
mod effects;
mod error;
mod events;
mod logger;
mod page;
mod state;
mod ui;
mod utils;

use app::App;
use clap::{App as Cli, Arg};
use config::Config;

#[tokio::main]
async fn main() {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal portfolio with quadrant navigation")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    if let Err(error) = config.load(matches.value_of("config")) {
        eprintln!("Failed to load configuration: {}", error);
        std::process::exit(1);
    }

    if let Err(error) = App::start(config).await {
        eprintln!("Application error: {}", error);
        std::process::exit(1);
    }
}
