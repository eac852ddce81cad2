//! Request identifiers and the fail-soft result type returned by the client.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CartolaError, Result};


/// Round identifier interpolated into `atletas/pontuados/{round}`.
///
/// Opaque on purpose: the remote service accepts round numbers, but nothing
/// here checks that.
///
/// # Examples
///
/// ```rust
/// use cartola::Round;
///
/// assert_eq!(Round::from(5u16).to_string(), "5");
/// assert_eq!(Round::new("38").as_str(), "38");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round(String);

impl Round {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Round {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Round {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u16> for Round {
    fn from(n: u16) -> Self {
        Self(n.to_string())
    }
}

impl FromStr for Round {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Known collections in the market payload.
///
/// [`crate::ApiClient::get_market`] takes any string; this enum names the
/// selectors the service is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketInfo {
    /// Clubs, keyed by club id.
    Clubes,
    /// Positions, keyed by position id.
    Posicoes,
    /// Athlete status codes, keyed by status id.
    Status,
    /// Athletes, delivered as a list.
    Atletas,
}

impl MarketInfo {
    pub const ALL: [MarketInfo; 4] = [
        MarketInfo::Clubes,
        MarketInfo::Posicoes,
        MarketInfo::Status,
        MarketInfo::Atletas,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketInfo::Clubes => "clubes",
            MarketInfo::Posicoes => "posicoes",
            MarketInfo::Status => "status",
            MarketInfo::Atletas => "atletas",
        }
    }
}

impl AsRef<str> for MarketInfo {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MarketInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketInfo {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MarketInfo::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown market selector: {s}"))
    }
}

/// Result of a client call: either data, or "nothing to process".
///
/// Client operations never return `Err`. A failure is logged once where it
/// happens and handed back as [`Outcome::NoData`] carrying the cause.
#[must_use = "a NoData outcome means there is nothing to process"]
#[derive(Debug)]
pub enum Outcome<T> {
    Data(T),
    NoData(CartolaError),
}

impl<T> Outcome<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, Outcome::Data(_))
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Outcome::NoData(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Data(t) => Some(t),
            Outcome::NoData(_) => None,
        }
    }

    /// The failure cause, if there is no data.
    pub fn reason(&self) -> Option<&CartolaError> {
        match self {
            Outcome::Data(_) => None,
            Outcome::NoData(e) => Some(e),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Data(t) => Some(t),
            Outcome::NoData(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Outcome::Data(t) => Ok(t),
            Outcome::NoData(e) => Err(e),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Data(t) => Outcome::Data(f(t)),
            Outcome::NoData(e) => Outcome::NoData(e),
        }
    }
}
