use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    scopestudio::logging::init().context("init logging")?;

    let cli = scopestudio::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        scopestudio::cli::Command::Export(args) => {
            scopestudio::export::run(args).await.context("export")?;
        }
        scopestudio::cli::Command::Preview(args) => {
            scopestudio::export::preview(args).context("preview")?;
        }
    }

    Ok(())
}
