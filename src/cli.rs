use crate::chart::DEFAULT_OUTPUT_PATH;
use crate::github::SEARCH_API_URL;
use crate::models::{SearchParams, SortOrder};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-repository-charts")]
#[command(about = "Visualize the most-starred GitHub repositories for a language")]
#[command(version)]
pub struct Cli {
    /// Language to search for
    #[arg(long, default_value = "python")]
    pub language: String,

    /// Sort order by star count
    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,

    /// Only include repositories with at least this many stars
    #[arg(long, default_value_t = 10000)]
    pub minimum_stars: u64,

    /// Number of repositories to fetch
    #[arg(long, default_value_t = 10)]
    pub total_repos: u32,

    /// Results per API page
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Where to write the HTML chart
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Write the chart without opening it
    #[arg(long)]
    pub no_open: bool,

    /// GitHub token; raises the search rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository search endpoint
    #[arg(long, env = "GITHUB_API_URL", default_value = SEARCH_API_URL)]
    pub api_url: String,
}

impl Cli {
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            language: self.language.clone(),
            minimum_stars: self.minimum_stars,
            total: self.total_repos,
            order: self.order,
            page_size: self.page_size,
        }
    }

    /// Chart title, e.g. "Most-Starred Python Projects on GitHub"
    pub fn chart_title(&self) -> String {
        let mut chars = self.language.chars();
        let language = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(|c| c.to_lowercase()))
                .collect(),
            None => String::new(),
        };
        format!("Most-Starred {} Projects on GitHub", language)
    }
}
