use std::process::exit;

use fare::{App, Settings};
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match Settings::try_new() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Settings parse error!, {}", e);
            exit(1);
        }
    };
    let app = match App::new(settings) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Could not start, {}", e);
            exit(1);
        }
    };

    if let Err(e) = fare::rocket(app).launch().await {
        tracing::error!("Server stopped, {}", e);
        exit(1);
    }
}
