use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://reverse-whois.whoisxmlapi.com/api/v2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Current,
}

/// `Preview` only reports a count; `Purchase` returns (and bills) the domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Preview,
    Purchase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerms {
    pub include: Vec<String>,
}

/// One request body sent to the reverse whois endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub api_key: String,
    pub search_type: SearchType,
    pub mode: Mode,
    pub punycode: bool,
    pub basic_search_terms: SearchTerms,
    #[serde(default, skip_serializing_if = "is_empty_token")]
    pub search_after: Option<String>,
}

impl SearchRequest {
    pub fn new(api_key: impl Into<String>, keyword: impl Into<String>, mode: Mode) -> Self {
        Self {
            api_key: api_key.into(),
            search_type: SearchType::Current,
            mode,
            punycode: true,
            basic_search_terms: SearchTerms {
                include: vec![keyword.into()],
            },
            search_after: None,
        }
    }

    pub fn preview(api_key: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self::new(api_key, keyword, Mode::Preview)
    }

    pub fn purchase(api_key: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self::new(api_key, keyword, Mode::Purchase)
    }

    /// Same request, pointed at the page after `token`.
    pub fn with_search_after(&self, token: impl Into<String>) -> Self {
        Self {
            search_after: Some(token.into()),
            ..self.clone()
        }
    }
}

fn is_empty_token(token: &Option<String>) -> bool {
    token.as_deref().unwrap_or_default().is_empty()
}

/// Missing and `null` fields both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_search_after: Option<String>,
}

impl SearchResponse {
    /// The continuation token, if the server sent a non-empty one.
    pub fn continuation_token(&self) -> Option<&str> {
        self.next_page_search_after
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub endpoint: String,
    /// `None` waits on the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}
