use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lsquiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("Failed to initialise application state: {}", err);
            return Err(std::io::Error::other(err.to_string()));
        }
    };

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            // "popular" must be registered before the {quiz_id} routes
            .service(handlers::popular_quizzes)
            .service(handlers::get_quiz)
            .service(handlers::list_questions)
            .service(handlers::start_attempt)
            .service(handlers::submit_attempt)
            .service(handlers::host_test)
            .service(handlers::attempt_result)
            .service(handlers::user_attempts)
            .service(handlers::quiz_statistics)
            .service(handlers::question_statistics)
            .service(handlers::rate_quiz)
            .service(handlers::rating_summary)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
