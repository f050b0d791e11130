use std::time::Duration;

use super::{ErrorKind, Result, ResultExt, Settings};

/// A resolved point on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl GeocodeResponse {
    fn best_match(&self) -> Option<Coordinates> {
        if self.status != "OK" {
            return None;
        }
        self.results.first().map(|r| Coordinates {
            latitude: r.geometry.location.lat,
            longitude: r.geometry.location.lng,
        })
    }
}

/// Address lookup against a Google-style geocoding endpoint.
pub struct Geocoder {
    client: reqwest::Client,
    url: String,
    key: Option<String>,
    timeout: Duration,
}

impl ::std::fmt::Debug for Geocoder {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        f.debug_struct("Geocoder")
            .field("url", &self.url)
            .field("enabled", &self.key.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Geocoder {
    pub fn new(client: reqwest::Client, settings: &Settings) -> Geocoder {
        Geocoder {
            client,
            url: settings.geocode_url.clone(),
            key: settings.geocoding_key().map(str::to_owned),
            timeout: settings.geocode_timeout(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.key.is_some()
    }

    /// Best-effort lookup. Every failure is logged and becomes `None`.
    pub async fn locate(&self, address: &str) -> Option<Coordinates> {
        match self.try_locate(address).await {
            Ok(coordinates) => Some(coordinates),
            Err(e) => {
                match e.kind() {
                    ErrorKind::GeocodingUnavailable => {
                        tracing::debug!("geocoding disabled, sending {:?} as text", address)
                    }
                    _ => tracing::warn!("{}", display_chain(&e)),
                }
                None
            }
        }
    }

    pub async fn try_locate(&self, address: &str) -> Result<Coordinates> {
        let key = match self.key {
            Some(ref key) => key,
            None => bail!(ErrorKind::GeocodingUnavailable),
        };
        let failed = || ErrorKind::GeocodingFailed(address.to_owned());

        let response: GeocodeResponse = self
            .client
            .get(&self.url)
            .query(&[("address", address), ("key", key.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .chain_err(failed)?
            .json()
            .await
            .chain_err(failed)?;

        match response.best_match() {
            Some(coordinates) => Ok(coordinates),
            None => {
                tracing::debug!("geocoder answered {} for {:?}", response.status, address);
                Err(failed().into())
            }
        }
    }
}

fn display_chain(e: &super::Error) -> String {
    e.iter()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
