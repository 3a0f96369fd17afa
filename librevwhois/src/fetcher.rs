use crate::{
    error::FetchError,
    http::{create_http_client, post_search},
    pagination::next_request,
    types::{FetchConfig, SearchRequest, SearchResponse},
};
use futures::stream::{self, Stream, TryStreamExt};
use reqwest::Client;
use std::{io, pin::pin};
use tracing::{debug, info};

#[derive(Clone)]
pub struct ReverseWhoisFetcher {
    client: Client,
    config: FetchConfig,
}

impl ReverseWhoisFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self, FetchError> {
        let client = create_http_client(config.timeout)?;
        Ok(Self { client, config })
    }

    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        debug!(
            endpoint = %self.config.endpoint,
            mode = ?request.mode,
            search_after = request.search_after.as_deref().unwrap_or(""),
            "Sending reverse whois request"
        );
        post_search(&self.client, &self.config.endpoint, request).await
    }

    /// Preview query for `keyword`. `Ok(false)` means the server reported
    /// zero matching domains.
    pub async fn check_availability(&self, keyword: &str, api_key: &str) -> Result<bool, FetchError> {
        info!("🔍 Checking if domains exist");

        let response = self.send(&SearchRequest::preview(api_key, keyword)).await?;
        if response.domains_count == 0 {
            return Ok(false);
        }

        info!(domains_count = response.domains_count, "✅ Domains exist");
        Ok(true)
    }

    /// Lazily walks the result set starting at `request`.
    ///
    /// Each poll issues at most one request, and only after the previous page
    /// has been handed out.
    pub fn pages(
        &self,
        request: SearchRequest,
    ) -> impl Stream<Item = Result<SearchResponse, FetchError>> + '_ {
        stream::try_unfold(Some(request), move |pending| self.next_page(pending))
    }

    async fn next_page(
        &self,
        pending: Option<SearchRequest>,
    ) -> Result<Option<(SearchResponse, Option<SearchRequest>)>, FetchError> {
        let Some(request) = pending else {
            return Ok(None);
        };

        let response = self.send(&request).await?;
        let next = next_request(&request, &response);
        Ok(Some((response, next)))
    }

    /// Fetches every page, passing each domain to `on_domain` as soon as its
    /// page arrives, and returns all of them in server order.
    pub async fn fetch_all<F>(
        &self,
        request: SearchRequest,
        mut on_domain: F,
    ) -> Result<Vec<String>, FetchError>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        let mut domains = Vec::new();
        let mut pages = pin!(self.pages(request));
        let mut page_count = 0usize;

        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            debug!(
                page = page_count,
                domains_count = page.domains_count,
                received = page.domains_list.len(),
                "Received page"
            );

            for domain in page.domains_list {
                on_domain(&domain)?;
                domains.push(domain);
            }
        }

        info!(domains = domains.len(), pages = page_count, "Fetch complete");
        Ok(domains)
    }

    /// Preview, then fetch everything. A preview reporting no domains ends
    /// the lookup with [`FetchError::NoDomains`].
    pub async fn lookup<F>(
        &self,
        keyword: &str,
        api_key: &str,
        on_domain: F,
    ) -> Result<Vec<String>, FetchError>
    where
        F: FnMut(&str) -> io::Result<()>,
    {
        if !self.check_availability(keyword, api_key).await? {
            return Err(FetchError::NoDomains {
                keyword: keyword.to_string(),
            });
        }

        info!("⛏️ Fetching domains");
        self.fetch_all(SearchRequest::purchase(api_key, keyword), on_domain)
            .await
    }
}
