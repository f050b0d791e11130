use super::reply::{self, Fare};
use super::slack::Response;
use super::{Coordinates, DeepLinks, Geocoder, Result, RideRequest, Settings};

/// Process-wide state, built once from `Settings` and shared by every
/// request.
#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    client: reqwest::Client,
    geocoder: Geocoder,
}

impl App {
    pub fn new(settings: Settings) -> Result<App> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let geocoder = Geocoder::new(client.clone(), &settings);
        if !geocoder.is_enabled() {
            tracing::info!("no geocoding key, links will carry addresses only");
        }
        Ok(App {
            settings,
            client,
            geocoder,
        })
    }

    /// Checks the legacy verification token, if one is configured.
    pub fn verify(&self, token: &str) -> bool {
        match self.settings.verification_token.as_deref() {
            Some(expected) if !expected.is_empty() => token == expected,
            _ => true,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Looks up both ends at once. Either side may come back empty.
    pub async fn locate(&self, ride: &RideRequest) -> (Option<Coordinates>, Option<Coordinates>) {
        tokio::join!(
            self.geocoder.locate(&ride.pickup),
            self.geocoder.locate(&ride.dropoff)
        )
    }

    pub async fn fare(&self, ride: &RideRequest) -> Result<Response> {
        let (pickup, dropoff) = self.locate(ride).await;
        let links = DeepLinks::from_request(self.settings.client_id(), ride, pickup, dropoff)?;
        let fare = Fare {
            ride,
            links: &links,
            pickup_located: pickup.is_some(),
            dropoff_located: dropoff.is_some(),
        };
        Ok(reply::fare_message(&fare, &self.settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::Response;
    use crate::test_server::{self, Reply, TestServer};

    #[test]
    fn verification_token_is_optional() {
        let mut settings = Settings::with_tokens("xoxb", "secret");
        let app = App::new(settings.clone()).unwrap();
        assert!(app.verify("anything"));

        settings.verification_token = Some("tok".to_owned());
        let app = App::new(settings).unwrap();
        assert!(app.verify("tok"));
        assert!(!app.verify("nope"));
        assert!(!app.verify(""));
    }

    fn query_value(url: &str, key: &str) -> Option<String> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[rocket::async_test]
    async fn pickup_located_dropoff_by_address() {
        let server = TestServer::start("/geocode", |request: &str| {
            let body = if request.contains("address=45+2nd+St") {
                test_server::geocode_hit(37.7866, -122.3966)
            } else {
                test_server::GEOCODE_MISS.to_owned()
            };
            Reply::Answer("200 OK", body)
        });
        let mut settings = Settings::with_tokens("xoxb", "secret");
        settings.google_maps_api_key = Some("key".to_owned());
        settings.geocode_url = server.url.clone();
        settings.geocode_timeout_secs = 2;
        let app = App::new(settings).unwrap();

        let ride = RideRequest::parse("45 2nd St San Francisco to SFO").unwrap();
        let response = crate::fare_reply(&app, &ride).await;
        let attachment = match response {
            Response::AttachedMessage(ref m) => &m.attachments[0],
            _ => panic!("expected ride links"),
        };

        let uber = &attachment.actions[0].url;
        assert_eq!(query_value(uber, "pickup[latitude]").as_deref(), Some("37.7866"));
        assert_eq!(query_value(uber, "pickup[longitude]").as_deref(), Some("-122.3966"));
        assert_eq!(query_value(uber, "dropoff[latitude]"), None);
        assert_eq!(query_value(uber, "dropoff[formatted_address]").as_deref(), Some("SFO"));

        let lyft = &attachment.actions[1].url;
        assert_eq!(query_value(lyft, "pickup[latitude]").as_deref(), Some("37.7866"));
        assert_eq!(query_value(lyft, "destination[longitude]"), None);
        assert_eq!(query_value(lyft, "destination[address]").as_deref(), Some("SFO"));

        let footer = attachment.footer.as_ref().unwrap();
        assert!(footer.contains("dropoff"));
        assert!(!footer.contains("pickup"));
    }
}
