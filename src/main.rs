mod chat;
mod config;
mod model;
mod web;

use std::sync::Arc;

use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};
use tera::Tera;

use chat::AnswerResolver;
use config::Config;
use model::{ChatProvider, GeminiClient};
use web::routes;

// App state structure
pub struct AppState {
    tera: Tera,
}

fn build_resolver(config: &Config) -> AnswerResolver {
    let provider = match &config.google_api_key {
        Some(key) => {
            let client = GeminiClient::new(config.gemini_base_url.clone(), key.clone());
            Some(Arc::new(client) as Arc<dyn ChatProvider>)
        }
        None => {
            warn!("GOOGLE_API_KEY is not set; every reply will come from the offline answers");
            None
        }
    };
    AnswerResolver::new(provider, config.provider_timeout)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AyurSutra support chat");

    let config = Config::from_env();
    let resolver = Data::new(build_resolver(&config));

    // Initialize template engine
    let mut tera = Tera::new(&config.template_glob)
        .with_context(|| format!("failed to parse templates at {}", config.template_glob))?;
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState { tera });
    let static_dir = config.static_dir.clone();

    info!("Listening on {}:{}", config.bind_host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(resolver.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", static_dir.clone()))
    })
    .bind((config.bind_host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.bind_host, config.port))?
    .run()
    .await
    .context("server terminated with an error")
}
