error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Config(::config::ConfigError);
        Json(::serde_json::error::Error);
        Request(::reqwest::Error);
        Url(::url::ParseError);
    }
    errors {
        MalformedCommand {
            description("malformed command")
            display("Command has no \" to \" between pickup and dropoff")
        }
        MissingEndpoint {
            description("missing endpoint")
            display("Pickup or dropoff address is empty")
        }
        GeocodingUnavailable {
            description("geocoding unavailable")
            display("No geocoding key configured")
        }
        GeocodingFailed(address: String) {
            description("geocoding failed")
            display("Could not geocode {:?}", address)
        }
        InvalidToken {
            description("invalid token")
            display("Invalid token")
        }
    }
}

impl Error {
    /// Whether this error should be answered with usage guidance rather than
    /// an apology.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MalformedCommand | ErrorKind::MissingEndpoint
        )
    }
}
