//! HTTP client for the public Cartola API.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    api::{
        normalize::{is_empty_payload, normalize_list, normalize_map_values},
        types::{MarketInfo, Outcome, Round},
    },
    error::{CartolaError, Result},
    table::Table,
};


/// Base URL of the public Cartola API.
pub const CARTOLA_BASE_URL: &str = "https://api.cartola.globo.com/";

/// Environment variable that overrides [`CARTOLA_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "CARTOLA_API_BASE_URL";

pub const SCORES_PATH: &str = "atletas/pontuados/";
pub const MARKET_PATH: &str = "atletas/mercado/";
pub const MATCHES_PATH: &str = "partidas/";

const USER_AGENT: &str = concat!("cartola/", env!("CARGO_PKG_VERSION"));

/// Client bound to one base URL.
///
/// Every operation performs exactly one GET and never returns an error:
/// failures are logged and come back as [`Outcome::NoData`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Client for [`CARTOLA_BASE_URL`].
    pub fn new() -> Result<Self> {
        Self::with_base_url(CARTOLA_BASE_URL)
    }

    /// Client for an arbitrary base URL. A trailing `/` is added if missing.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Client for `CARTOLA_API_BASE_URL` if set, otherwise the default base URL.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request target for a path suffix. No validation is done on `path`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `base_url + path` and parse the body as JSON.
    ///
    /// Connection failures, non-success statuses and undecodable bodies are
    /// logged once and returned as [`Outcome::NoData`].
    pub async fn fetch(&self, path: &str) -> Outcome<Value> {
        let url = self.url_for(path);
        match self.request(&url).await {
            Ok(value) => Outcome::Data(value),
            Err(e) => {
                warn!(%url, error = %e, "Cartola API request failed");
                Outcome::NoData(e)
            }
        }
    }

    async fn request(&self, url: &str) -> Result<Value> {
        debug!(%url, "GET");
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Athlete scores for a round, one row per athlete.
    ///
    /// The payload's `atletas` is an object keyed by athlete id; the ids are dropped.
    pub async fn get_scores(&self, round: &Round) -> Outcome<Table> {
        let path = format!("{SCORES_PATH}{round}");
        self.fetch_table(&path, "atletas", |payload| {
            normalize_map_values(payload, "atletas")
        })
        .await
    }

    /// One collection from the market payload.
    ///
    /// `atletas` is delivered as a list and flattened directly. Any other
    /// selector (`clubes`, `posicoes`, `status`, ...) must name an object keyed
    /// by internal id, whose values become the rows. Unknown selectors are not
    /// rejected up front; they fail the lookup like any missing key.
    pub async fn get_market(&self, info: impl AsRef<str>) -> Outcome<Table> {
        let info = info.as_ref();
        self.fetch_table(MARKET_PATH, info, |payload| {
            if info == MarketInfo::Atletas.as_str() {
                normalize_list(payload, info)
            } else {
                normalize_map_values(payload, info)
            }
        })
        .await
    }

    /// Matches of the current round, one row per match.
    pub async fn get_matches(&self) -> Outcome<Table> {
        self.fetch_table(MATCHES_PATH, "partidas", |payload| {
            normalize_list(payload, "partidas")
        })
        .await
    }

    async fn fetch_table<F>(&self, path: &str, key: &str, normalize: F) -> Outcome<Table>
    where
        F: FnOnce(&Value) -> Result<Table>,
    {
        let payload = match self.fetch(path).await {
            Outcome::Data(payload) => payload,
            // already reported by fetch
            Outcome::NoData(e) => return Outcome::NoData(e),
        };

        let normalized = if is_empty_payload(&payload) {
            Err(CartolaError::EmptyPayload)
        } else {
            normalize(&payload)
        };

        match normalized {
            Ok(table) => {
                debug!(key, rows = table.len(), "normalized payload");
                Outcome::Data(table)
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to normalize Cartola payload");
                Outcome::NoData(e)
            }
        }
    }
}
