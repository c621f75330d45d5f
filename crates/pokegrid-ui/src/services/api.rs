//! HTTP client for the upstream PokeAPI (REST).
//!
//! # Design
//! - One listing call, then every detail fetched in parallel; the join keeps
//!   listing order and fails wholesale on the first error, so the store sees
//!   either the complete catalog or nothing.
//! - Detail URLs from the listing are absolute and used as given.

use crate::core::logic::build_listing_path;
use crate::features::catalog::state::Pokemon;
use futures::future::try_join_all;
use gloo_net::http::Request;
use pokegrid_api_models::{PokemonDetail, PokemonPage};
use thiserror::Error;

/// Upstream PokeAPI base URL.
pub(crate) const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of records requested from the listing endpoint.
pub(crate) const CATALOG_FETCH_LIMIT: usize = 100;

/// Failure surfaced by a catalog fetch.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub(crate) enum ApiError {
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The upstream answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The payload did not match the expected shape.
    #[error("malformed payload: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(err) => Self::Decode(err.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Thin request helper bound to one base URL.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> Result<T, ApiError> {
        Self::fetch_json(&format!("{}{path}", self.base_url)).await
    }

    /// Fetch an absolute URL; detail links in the listing are already absolute.
    async fn fetch_json<T: for<'de> serde::Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
        let response = Request::get(url).send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json::<T>().await?)
    }

    /// Load the catalog: the listing window, then every detail in parallel.
    pub(crate) async fn fetch_catalog(&self, limit: usize) -> Result<Vec<Pokemon>, ApiError> {
        let page: PokemonPage = self.get_json(&build_listing_path(limit)).await?;
        let details = try_join_all(
            page.results
                .iter()
                .map(|entry| Self::fetch_json::<PokemonDetail>(&entry.url)),
        )
        .await?;
        Ok(details.into_iter().map(Pokemon::from).collect())
    }
}
