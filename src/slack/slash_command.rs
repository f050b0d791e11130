use rocket::FromForm;

use super::Response;
use crate::Result;

/// The form Slack posts for a slash command. Fields this bot does not read
/// are accepted and ignored when parsed leniently.
#[derive(FromForm, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    #[field(default = String::new())]
    pub token: String,
    #[field(default = String::new())]
    pub command: String,
    #[field(default = String::new())]
    pub text: String,
    #[field(default = String::new())]
    pub user_name: String,
    #[field(default = String::new())]
    pub response_url: String,
}

/// Delivers a delayed response through the command's `response_url`.
pub async fn respond(client: &reqwest::Client, response_url: &str, response: &Response) -> Result<()> {
    client
        .post(response_url)
        .json(response)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
