use clap::Parser;

use opsdesk::adapter::inbound::cli::command::Cli;
use opsdesk::adapter::inbound::cli::output::{self, OutputConfig};
use opsdesk::adapter::inbound::cli::run::{resolve_color, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        resolve_color(cli.color),
    ));

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
