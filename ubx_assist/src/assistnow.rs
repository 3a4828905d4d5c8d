//! AssistNow Online request parameters and server fallback

use crate::{
    constants::{ASSISTNOW_PRIMARY_URL, ASSISTNOW_SECONDARY_URL, DEFAULT_INTER_MESSAGE_DELAY},
    error::{AssistNowError, FetchError},
};
use core::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Primary server first, its mirror second; each is tried once
pub const DEFAULT_ENDPOINTS: [&str; 2] = [ASSISTNOW_PRIMARY_URL, ASSISTNOW_SECONDARY_URL];

/// The `[AssistNowOnline]` section of the loader configuration.
///
/// Every field maps to the query parameter of the same name, except `delay`
/// which is the pause in milliseconds between two messages sent to the receiver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct AssistNowConfig {
    pub token: Option<String>,
    /// e.g. `eph,alm,aux,pos`
    pub datatype: Option<String>,
    pub format: Option<String>,
    /// e.g. `gps,glo`
    pub gnss: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub alt: Option<f64>,
    pub pacc: Option<u32>,
    pub tacc: Option<f64>,
    pub latency: Option<f64>,
    pub filteronpos: bool,
    pub delay: u64,
}

impl Default for AssistNowConfig {
    fn default() -> Self {
        Self {
            token: None,
            datatype: None,
            format: Some("mga".to_string()),
            gnss: None,
            lat: None,
            lon: None,
            alt: None,
            pacc: None,
            tacc: None,
            latency: None,
            filteronpos: false,
            delay: DEFAULT_INTER_MESSAGE_DELAY.as_millis() as u64,
        }
    }
}

/// Suspicious but usable configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigWarning {
    /// Earlier loaders sent `lon` in place of `alt`, configurations tuned
    /// against that tend to carry the longitude twice
    AltitudeMatchesLongitude { value: f64 },
    /// The server ignores an altitude without a horizontal position
    AltitudeWithoutPosition,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::AltitudeMatchesLongitude { value } => write!(
                f,
                "alt equals lon ({}), check that alt holds the altitude in meters",
                value
            ),
            ConfigWarning::AltitudeWithoutPosition => {
                f.write_str("alt is set without both lat and lon, the server will ignore it")
            },
        }
    }
}

impl AssistNowConfig {
    /// The API token, an empty one counts as missing
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn inter_message_delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = vec![];
        if let Some(alt) = self.alt {
            if self.lon == Some(alt) {
                warnings.push(ConfigWarning::AltitudeMatchesLongitude { value: alt });
            }
            if self.lat.is_none() || self.lon.is_none() {
                warnings.push(ConfigWarning::AltitudeWithoutPosition);
            }
        }
        warnings
    }

    /// Request parameters in the order the service documents them.
    /// Unset and empty values are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        fn text(v: &Option<String>) -> Option<String> {
            v.as_ref().filter(|s| !s.is_empty()).cloned()
        }
        fn number<T: ToString>(v: Option<T>) -> Option<String> {
            v.map(|n| n.to_string())
        }

        let pairs = [
            ("token", text(&self.token)),
            ("datatype", text(&self.datatype)),
            ("format", text(&self.format)),
            ("gnss", text(&self.gnss)),
            ("lat", number(self.lat)),
            ("lon", number(self.lon)),
            ("alt", number(self.alt)),
            ("pacc", number(self.pacc)),
            ("tacc", number(self.tacc)),
            ("latency", number(self.latency)),
            ("filteronpos", self.filteronpos.then(|| "True".to_string())),
        ];
        pairs
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect()
    }

    /// `application/x-www-form-urlencoded` query, commas kept literal as the
    /// service expects its lists unescaped
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_query_value(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char)
            },
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Transport used to download AssistNow data, a plain HTTP GET
pub trait AssistNowClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fn(&str) -> Result<Vec<u8>, FetchError>> AssistNowClient for F {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self(url)
    }
}

/// Tries `endpoints` in order, once each, and returns the first body received
pub fn fetch_with_fallback<C: AssistNowClient + ?Sized>(
    client: &C,
    endpoints: &[&str],
    query: &str,
) -> Result<Vec<u8>, AssistNowError> {
    let mut attempts = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let url = format!("{}?{}", endpoint, query);
        match client.get(&url) {
            Ok(body) => {
                debug!("Got {} bytes of AssistNow data from {}", body.len(), endpoint);
                return Ok(body);
            },
            Err(e) => {
                warn!("Got an error getting AssistNow data from {}: {}", endpoint, e);
                attempts.push((endpoint.to_string(), e));
            },
        }
    }
    Err(AssistNowError::UpstreamUnavailable { attempts })
}
