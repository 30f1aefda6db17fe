use clap::Parser;
use tracker_mentions::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => cli::extract::run(args, cli.fixture).await,
        Command::Validate(args) => cli::validate::run(args, cli.fixture).await,
    }
}
