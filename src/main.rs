//! txpeek - inspect a transactions database from the terminal.

use std::io;

use tracing::{error, info};
use txpeek::app::App;
use txpeek::cli::Cli;
use txpeek::config::{Config, Settings};
use txpeek::error::Result;
use txpeek::input::{FixedQuery, PromptReader};
use txpeek::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: {}", e.category(), e.message());
            std::process::exit(1);
        }
    };

    logging::init_logging(&settings.logging);

    if let Err(e) = run(settings).await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn load_settings() -> Result<Settings> {
    let cli = Cli::parse_args();
    let config = Config::load_from_file(&cli.config_path())?;
    Settings::resolve(&cli, &config)
}

async fn run(settings: Settings) -> Result<()> {
    info!("Database: {}", settings.connection.display_string());

    let query = settings.query.clone();
    let app = App::new(settings);
    let mut out = io::stdout();

    match query {
        Some(query) => app.run(&mut FixedQuery::new(query), &mut out).await,
        None => app.run(&mut PromptReader::stdio(), &mut out).await,
    }
}
