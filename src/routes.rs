use std::sync::Arc;

use rocket::form::{Form, Lenient};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};

use super::slack::slash_command::Request;
use super::slack::Response;
use super::{deliver, handle_command, reply, Ack, App, ErrorKind};

#[derive(Responder)]
pub enum AckResponse {
    Reply(Json<Response>),
    Accepted(()),
}

pub fn rocket(app: App) -> Rocket<Build> {
    rocket::build()
        .manage(Arc::new(app))
        .mount("/slack", routes![fare_command])
        .mount("/", routes![health])
}

#[post("/fare", data = "<form>")]
async fn fare_command(
    app: &State<Arc<App>>,
    form: Form<Lenient<Request>>,
) -> Result<AckResponse, Status> {
    let data = form.into_inner().into_inner();

    match handle_command(app.inner(), &data) {
        Ok(Ack::Reply(response)) => Ok(AckResponse::Reply(Json(response))),
        Ok(Ack::Deferred(ride)) => {
            let app = Arc::clone(app.inner());
            tokio::spawn(async move {
                deliver(&app, &data.response_url, &ride).await;
            });
            Ok(AckResponse::Accepted(()))
        }
        Err(ref e) if matches!(e.kind(), ErrorKind::InvalidToken) => {
            tracing::warn!("rejected command with a bad token from {}", data.user_name);
            Err(Status::Unauthorized)
        }
        Err(e) => {
            tracing::error!("handling {:?} failed: {}", data.text, e);
            Ok(AckResponse::Reply(Json(reply::apology_message())))
        }
    }
}

#[get("/health")]
fn health() -> &'static str {
    "OK"
}
