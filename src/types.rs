use serde::{Deserialize, Deserializer};
use serde_json::Value;

// GitHub search API response structures. Every field is optional upstream.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: Option<bool>,
    /// `null` and a missing key both mean no more results
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub owner: Option<SearchOwner>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchOwner {
    #[serde(default)]
    pub login: Option<String>,
}

/// Accepts integers, floats and numeric strings; anything else becomes `None`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }))
}
