use crate::error::{RepoChartsError, Result};
use crate::models::{RateLimitState, Repository, SearchParams};
use crate::types::SearchResponse;
use chrono::DateTime;
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const SEARCH_API_URL: &str = "https://api.github.com/search/repositories";
const USER_AGENT: &str = concat!("github-repository-charts/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for GitHub's repository search endpoint.
///
/// One client holds one connection pool, so every page of a search run
/// reuses the same connections.
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_endpoint(token, SEARCH_API_URL)
    }

    /// Build a client against a non-default search endpoint (GitHub Enterprise, test servers)
    pub fn with_endpoint(token: Option<String>, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GitHubClient {
            client,
            token: token.filter(|t| !t.trim().is_empty()),
            endpoint,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch one page of search results, normalized into repository records
    pub async fn fetch_search_page(
        &self,
        params: &SearchParams,
        page: u32,
    ) -> Result<(Vec<Repository>, Option<RateLimitState>)> {
        let query = [
            ("q", params.query()),
            ("sort", "stars".to_string()),
            ("order", params.order.as_str().to_string()),
            ("per_page", params.effective_page_size().to_string()),
            ("page", page.to_string()),
        ];

        let mut request = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/vnd.github.v3+json")
            .query(&query);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let rate_limit = rate_limit_state(response.headers());
        let status = response.status();

        if let Some(state) = &rate_limit {
            debug!(page, remaining = state.remaining, limit = state.limit, "Search quota");
        }

        if status == StatusCode::FORBIDDEN && rate_limit.as_ref().is_some_and(|s| s.is_limited) {
            let reset = rate_limit
                .as_ref()
                .and_then(|s| s.reset_time)
                .map(|t| format!(" Quota resets at {}.", t.format("%Y-%m-%d %H:%M:%S UTC")))
                .unwrap_or_default();
            warn!(page, "GitHub rate limit reached");
            return Err(RepoChartsError::RateLimitExceeded(format!(
                "GitHub rate limit reached. Set GITHUB_TOKEN and try again.{}",
                reset
            )));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RepoChartsError::HttpStatus { status, message });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        if parsed.incomplete_results == Some(true) {
            warn!(page, "GitHub reported incomplete search results");
        }

        let items = parsed.items.unwrap_or_default();
        debug!(
            page,
            total_count = parsed.total_count,
            items = items.len(),
            "Search page received"
        );

        let repositories = items.into_iter().map(Repository::from).collect();

        Ok((repositories, rate_limit))
    }

    /// Fetch up to `params.total` repositories, one page at a time.
    ///
    /// Stops early once enough records are collected or a page comes back
    /// empty. Any failed page fails the whole run.
    pub async fn fetch_repositories(&self, params: &SearchParams) -> Result<Vec<Repository>> {
        if params.total == 0 {
            debug!("Nothing requested, skipping search");
            return Ok(Vec::new());
        }

        let total = params.total as usize;
        let pages = params.page_count();

        info!(
            language = %params.language,
            minimum_stars = params.minimum_stars,
            order = %params.order,
            total,
            per_page = params.effective_page_size(),
            pages,
            authenticated = self.is_authenticated(),
            "Searching repositories"
        );

        let mut collected: Vec<Repository> = Vec::with_capacity(total);
        let mut quota: Option<RateLimitState> = None;

        for page in 1..=pages {
            let (repositories, rate_limit) = self.fetch_search_page(params, page).await?;
            quota = rate_limit.or(quota);

            if repositories.is_empty() {
                info!(page, collected = collected.len(), "Search returned no more results");
                break;
            }

            collected.extend(repositories);
            debug!(page, collected = collected.len(), "Fetched search page");

            if collected.len() >= total {
                break;
            }
        }

        if let Some(state) = &quota {
            info!(remaining = state.remaining, limit = state.limit, "Search quota left");
        }

        collected.truncate(total);
        Ok(collected)
    }
}

/// Read the `X-RateLimit-*` headers, if GitHub sent them
pub fn rate_limit_state(headers: &HeaderMap) -> Option<RateLimitState> {
    let header = |name: &str| headers.get(name).and_then(|h| h.to_str().ok());

    let remaining = header("X-RateLimit-Remaining")?.trim().parse::<u32>().ok()?;

    let limit = header("X-RateLimit-Limit")
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(remaining);

    let reset_time = header("X-RateLimit-Reset")
        .and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0));

    Some(RateLimitState {
        remaining,
        limit,
        reset_time,
        is_limited: remaining == 0,
    })
}
