use super::slack::*;
use super::{DeepLinks, Error, RideRequest, Settings};

pub const USAGE_TEXT: &str = "Format: `/fare pickup address to dropoff address`";
pub const MISSING_ENDPOINT_TEXT: &str = "I need both a pickup and a dropoff address.";
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong while building your ride links.";

/// Everything a successful reply shows.
#[derive(Debug)]
pub struct Fare<'a> {
    pub ride: &'a RideRequest,
    pub links: &'a DeepLinks,
    pub pickup_located: bool,
    pub dropoff_located: bool,
}

fn ephemeral(text: &str, mrkdwn: bool) -> Response {
    Response::Message(Message {
        response_type: ResponseType::Ephemeral,
        text: text.to_owned(),
        mrkdwn,
    })
}

pub fn usage_message() -> Response {
    ephemeral(USAGE_TEXT, true)
}

pub fn missing_endpoint_message() -> Response {
    ephemeral(MISSING_ENDPOINT_TEXT, false)
}

pub fn apology_message() -> Response {
    ephemeral(APOLOGY_TEXT, false)
}

/// Guidance for mistakes in the command, an apology for everything else.
pub fn error_message(e: &Error) -> Response {
    use super::ErrorKind::*;
    match *e.kind() {
        MalformedCommand => usage_message(),
        MissingEndpoint => missing_endpoint_message(),
        _ => apology_message(),
    }
}

pub fn fare_message(fare: &Fare, settings: &Settings) -> Response {
    let pickup = escape(&fare.ride.pickup);
    let dropoff = escape(&fare.ride.dropoff);
    let uber = fare.links.uber.as_str();
    let lyft = fare.links.lyft.as_str();

    let mut a = Attachment {
        fallback: format!("Uber: {}\nLyft: {}", uber, lyft),
        title: format!("{} → {}", pickup, dropoff),
        pretext: "Ride links".to_owned(),
        text: String::new(),
        fields: vec![
            AttachmentFields {
                title: "From".to_owned(),
                value: pickup,
                short: true,
            },
            AttachmentFields {
                title: "To".to_owned(),
                value: dropoff,
                short: true,
            },
        ],
        actions: vec![],
        footer: None,
        mrkdwn_in: vec!["text".to_owned(), "fields".to_owned()],
    };

    if settings.interactive_buttons {
        a.actions.push(Action::link_button("Open in Uber", uber));
        a.actions.push(Action::link_button("Open in Lyft", lyft));
    } else {
        a.text = format!("{}    {}", link(uber, "Open in Uber"), link(lyft, "Open in Lyft"));
    }

    if settings.geocoding_key().is_some() {
        let unlocated: Vec<&str> = [
            ("pickup", fare.pickup_located),
            ("dropoff", fare.dropoff_located),
        ]
        .iter()
        .filter(|&&(_, located)| !located)
        .map(|&(name, _)| name)
        .collect();
        if !unlocated.is_empty() {
            a.footer = Some(format!(
                "Couldn't find the {} on the map, the app will look it up by address.",
                unlocated.join(" or ")
            ));
        }
    }

    Response::AttachedMessage(AttachedMessage {
        response_type: if settings.broadcast_results {
            ResponseType::InChannel
        } else {
            ResponseType::Ephemeral
        },
        attachments: vec![a],
    })
}
