use crate::types::{SearchRequest, SearchResponse};

/// Pages holding fewer domains than this are terminal.
pub const PAGE_SIZE: u64 = 10_000;

/// Decides whether `response` is followed by another page and, if so, builds
/// the request for it.
///
/// The count is checked before the token: a token that accompanies a
/// short page is ignored.
pub fn next_request(request: &SearchRequest, response: &SearchResponse) -> Option<SearchRequest> {
    if response.domains_count < PAGE_SIZE {
        return None;
    }

    response
        .continuation_token()
        .map(|token| request.with_search_after(token))
}
