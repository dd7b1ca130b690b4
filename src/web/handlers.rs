use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use log::{debug, error, info};
use serde_json::json;
use tera::Context;
use uuid::Uuid;
use validator::Validate;

use crate::chat::{AnswerResolver, ResolvedReply};
use crate::web::models::{ChatReply, ChatRequest};
use crate::web::validate::{ValidationError, MAX_BODY_BYTES};
use crate::AppState;

// localStorage key the widget uses to remember that its hint was dismissed
pub const HINT_DISMISSED_KEY: &str = "ayursutra_chat_hint_dismissed";

fn render(data: &AppState, template: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("hint_dismissed_key", HINT_DISMISSED_KEY);
    match data.tera.render(template, &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Landing page carrying the floating chat widget
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    render(&data, "index.html")
}

// Full-page chat
pub async fn chatbot(data: web::Data<AppState>) -> impl Responder {
    render(&data, "chatbot.html")
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

fn reply(resolved: ResolvedReply) -> HttpResponse {
    HttpResponse::Ok().json(ChatReply {
        reply: resolved.text,
    })
}

// JSON extraction settings for the chat endpoint
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(json_error)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = match ValidationError::from_json_error(&err) {
        Some(invalid) => {
            info!("Chat request to {} rejected: {}", req.path(), err);
            invalid.error_response()
        }
        None => {
            // The body never arrived intact, so there is no message to classify.
            error!("Chat request to {} could not be read: {}", req.path(), err);
            reply(AnswerResolver::offline_reply(""))
        }
    };
    InternalError::from_response(err, response).into()
}

// Chat API endpoint
pub async fn chat(
    resolver: web::Data<AnswerResolver>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let request = req.into_inner();

    if let Err(errors) = request.validate() {
        let invalid = ValidationError::from(errors);
        info!("Chat request {} rejected: {}", request_id, invalid);
        return invalid.error_response();
    }

    info!(
        "Chat request {} ({} history entries, provider configured: {})",
        request_id,
        request.history.len(),
        resolver.has_provider()
    );
    debug!("Chat request {} message: {}", request_id, request.message);

    let resolved = resolver.resolve(&request.message, &request.history).await;
    info!(
        "Chat request {} answered from {:?} ({} characters)",
        request_id,
        resolved.source,
        resolved.text.len()
    );
    reply(resolved)
}
