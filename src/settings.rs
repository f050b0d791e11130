use std::time::Duration;

pub const DEFAULT_CLIENT_ID: &str = "fare-slack-bot";
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub slack_bot_token: String,
    pub slack_signing_secret: String,
    #[serde(default)]
    pub verification_token: Option<String>,
    #[serde(default)]
    pub google_maps_api_key: Option<String>,
    #[serde(default)]
    pub uber_client_id: Option<String>,
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,
    #[serde(default = "default_geocode_timeout_secs")]
    pub geocode_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub broadcast_results: bool,
    #[serde(default = "default_true")]
    pub interactive_buttons: bool,
}

fn default_geocode_url() -> String {
    DEFAULT_GEOCODE_URL.to_owned()
}

fn default_geocode_timeout_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Reads the settings file named by the first argument (or `settings.*`
    /// in the working directory, if any), then lets environment variables
    /// override it.
    pub fn try_new() -> Result<Settings, ::config::ConfigError> {
        use config::{Environment, File};
        use std::env::args;
        use std::path::Path;

        let file = match args().nth(1) {
            Some(path) => File::from(Path::new(&path)),
            None => File::with_name("settings").required(false),
        };
        Settings::from_sources(file, Environment::default())
    }

    /// Environment values stay strings until serde asks for a bool or a
    /// number, so ids like `0042` keep their leading zeros.
    fn from_sources<S>(file: S, env: ::config::Environment) -> Result<Settings, ::config::ConfigError>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        ::config::Config::builder()
            .add_source(file)
            .add_source(env.try_parsing(false))
            .build()?
            .try_deserialize::<Settings>()
    }

    /// Minimal settings with geocoding disabled.
    pub fn with_tokens(bot_token: &str, signing_secret: &str) -> Settings {
        Settings {
            slack_bot_token: bot_token.to_owned(),
            slack_signing_secret: signing_secret.to_owned(),
            verification_token: None,
            google_maps_api_key: None,
            uber_client_id: None,
            geocode_url: default_geocode_url(),
            geocode_timeout_secs: default_geocode_timeout_secs(),
            broadcast_results: true,
            interactive_buttons: true,
        }
    }

    pub fn client_id(&self) -> &str {
        non_blank(&self.uber_client_id).unwrap_or(DEFAULT_CLIENT_ID)
    }

    pub fn geocoding_key(&self) -> Option<&str> {
        non_blank(&self.google_maps_api_key)
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.geocode_timeout_secs)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
