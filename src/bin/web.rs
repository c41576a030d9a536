//! Single binary web server: standings API over the Challonge tournament service.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set CHALLONGE_API_KEY (or pass ?api_key= per request). A `.env` file is read if present.

use actix_web::{
    middleware::{from_fn, DefaultHeaders, Logger},
    web::Data,
    App, HttpServer,
};
use bracket_standings::{
    api::{self, AppState},
    AppConfig, ChallongeClient,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    if config.challonge.api_key.is_none() {
        log::warn!("CHALLONGE_API_KEY not set; requests must pass ?api_key=");
    }

    let client = ChallongeClient::new(config.challonge.base_url.clone(), config.challonge.timeout);
    let state = Data::new(AppState::new(client, config.challonge.api_key.clone()));
    let allowed_origin = config.allowed_origin.clone();

    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", allowed_origin.clone())))
            .wrap(from_fn(api::request_id))
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
