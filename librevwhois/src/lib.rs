mod error;
mod fetcher;
mod http;
pub mod pagination;
mod types;

pub use error::FetchError;
pub use fetcher::ReverseWhoisFetcher;
pub use pagination::PAGE_SIZE;
pub use types::{
    FetchConfig, Mode, SearchRequest, SearchResponse, SearchTerms, SearchType, DEFAULT_ENDPOINT,
};
