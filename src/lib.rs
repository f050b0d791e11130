#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate rocket;
#[macro_use]
extern crate serde_derive;

pub mod error;
pub use error::{Error, ErrorKind, Result, ResultExt};

pub mod settings;
pub use settings::Settings;

pub mod command;
pub use command::RideRequest;

pub mod geocode;
pub use geocode::{Coordinates, Geocoder};

pub mod links;
pub use links::{DeepLinks, Endpoint};

pub mod slack;
pub mod reply;

pub mod app;
pub use app::App;

pub mod routes;
pub use routes::rocket;

#[cfg(test)]
mod test_server;

use slack::slash_command::{self, Request};
use slack::Response;

/// What to send back to Slack right away.
#[derive(Debug, PartialEq)]
pub enum Ack {
    /// Answer in the acknowledgment body; nothing follows.
    Reply(Response),
    /// Acknowledge with an empty body and send the links later.
    Deferred(RideRequest),
}

pub fn handle_command(app: &App, data: &Request) -> Result<Ack> {
    if !app.verify(&data.token) {
        bail!(ErrorKind::InvalidToken);
    }
    tracing::info!("{} {:?} from {}", data.command, data.text, data.user_name);

    match RideRequest::parse(&data.text) {
        Ok(ride) => Ok(Ack::Deferred(ride)),
        Err(ref e) if e.is_user_error() => {
            tracing::info!("rejected {:?}: {}", data.text, e);
            Ok(Ack::Reply(reply::error_message(e)))
        }
        Err(e) => Err(e),
    }
}

/// The deferred reply. Never fails: anything unexpected turns into an
/// apology.
pub async fn fare_reply(app: &App, ride: &RideRequest) -> Response {
    match app.fare(ride).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("building links for {:?} failed: {}", ride, e);
            reply::error_message(&e)
        }
    }
}

/// Builds the reply and posts it to `response_url`.
pub async fn deliver(app: &App, response_url: &str, ride: &RideRequest) {
    let response = fare_reply(app, ride).await;
    if let Err(e) = slash_command::respond(app.client(), response_url, &response).await {
        tracing::error!("could not deliver reply to {}: {}", response_url, e);
    }
}
