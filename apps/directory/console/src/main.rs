//! Directory Console
//!
//! Terminal client for the directory API: list, add, edit and delete users with the same
//! field rules the server enforces.

use clap::Parser;
use core_config::tracing::{init_cli_tracing, install_color_eyre};
use domain_users::UserClient;
use eyre::Result;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::debug;

mod app;
mod form;
mod notice;
mod terminal;
#[cfg(test)]
mod test_support;
mod view;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "directory-console")]
#[command(about = "Manage directory users from the terminal")]
struct Cli {
    /// Users collection URL of the directory API
    #[arg(
        long,
        env = "DIRECTORY_API_URL",
        default_value = "http://localhost:8080/api/users"
    )]
    api_url: String,

    /// Seconds a success or error notice stays visible
    #[arg(long, default_value_t = 3)]
    notice_secs: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_cli_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Starting directory console");

    let client = UserClient::with_timeout(&cli.api_url, Duration::from_secs(cli.timeout_secs))?;
    let mut app = App::new(client, Duration::from_secs(cli.notice_secs));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    terminal::run(&mut app, stdin, &mut stdout).await?;

    Ok(())
}
