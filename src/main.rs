use clap::Parser;
use colored::*;
use github_repository_charts::chart;
use github_repository_charts::cli::Cli;
use github_repository_charts::{GitHubClient, Result};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let params = cli.search_params();
    let client = GitHubClient::with_endpoint(cli.token.clone(), &cli.api_url)?;

    if !client.is_authenticated() {
        println!("{}", "No GITHUB_TOKEN set, using the unauthenticated rate limit".yellow());
    }

    let repositories = client.fetch_repositories(&params).await?;

    if repositories.is_empty() {
        println!(
            "{}",
            format!(
                "No {} repositories with at least {} stars found.",
                params.language, params.minimum_stars
            )
            .yellow()
        );
        return Ok(());
    }

    println!("✅ Fetched {} repositories.", repositories.len());

    chart::render(&repositories, &cli.chart_title(), &cli.output, !cli.no_open)?;

    println!("📊 Chart written to {}", cli.output.display().to_string().bold());

    Ok(())
}
