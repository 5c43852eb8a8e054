use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizgen_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::error!("{}", err);
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            err.to_string(),
        ));
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let cors_origin = config.cors_allowed_origin.clone();

    log::info!(
        "Using model {} with temperature {} and a {}s generation timeout",
        config.openai_model,
        config.generation_temperature,
        config.generation_timeout_seconds
    );
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
