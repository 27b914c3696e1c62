#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// How the mock search endpoint answers every request
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Serve `available` repositories, paged by `per_page`/`page`
    Results { available: usize },
    /// 403 with an exhausted quota
    RateLimited,
    /// Bare status with a JSON error body and no rate limit headers
    Status(StatusCode),
    /// Same body for every page
    Raw(Value),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub query: HashMap<String, String>,
    pub accept: Option<String>,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockSearchServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSearchServer {
    pub async fn start(behavior: MockBehavior) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            behavior,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/search/repositories", get(search))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(MockSearchServer {
            url: format!("http://{}/search/repositories", addr),
            requests,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn pages_requested(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| r.query.get("page").cloned())
            .collect()
    }
}

/// A search item whose star count falls as `index` rises
pub fn repo_item(index: usize, available: usize) -> Value {
    json!({
        "name": format!("repo-{}", index),
        "html_url": format!("https://github.com/owner-{}/repo-{}", index, index),
        "stargazers_count": 100 + (available - index) * 10,
        "owner": { "login": format!("owner-{}", index) },
        "description": format!("Repository number {}", index),
    })
}

async fn search(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        query: query.clone(),
        accept: header("accept"),
        authorization: header("authorization"),
        user_agent: header("user-agent"),
    });

    match &state.behavior {
        MockBehavior::Results { available } => {
            let per_page: usize = query
                .get("per_page")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30);
            let page: usize = query
                .get("page")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1)
                .max(1);

            let start = (page - 1) * per_page;
            let end = (start + per_page).min(*available);
            let items: Vec<Value> = (start..end).map(|i| repo_item(i, *available)).collect();

            (
                [("X-RateLimit-Remaining", "9"), ("X-RateLimit-Limit", "10")],
                Json(json!({
                    "total_count": available,
                    "incomplete_results": false,
                    "items": items,
                })),
            )
                .into_response()
        }
        MockBehavior::RateLimited => (
            StatusCode::FORBIDDEN,
            [
                ("X-RateLimit-Remaining", "0"),
                ("X-RateLimit-Limit", "10"),
                ("X-RateLimit-Reset", "1700000000"),
            ],
            Json(json!({ "message": "API rate limit exceeded" })),
        )
            .into_response(),
        MockBehavior::Status(status) => {
            (*status, Json(json!({ "message": "Validation Failed" }))).into_response()
        }
        MockBehavior::Raw(body) => Json(body.clone()).into_response(),
    }
}
