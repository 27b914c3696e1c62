//! Fetch the most-starred GitHub repositories for a language and chart them.

pub mod chart;
pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod types;

pub use error::{RepoChartsError, Result};
pub use github::GitHubClient;
pub use models::{Repository, SearchParams, SortOrder};
