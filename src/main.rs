use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use taskline::config::Config;
use taskline::routes::{self, guard::AuthGuard, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let state = web::Data::new(AppState::postgres(pool, &config));
    let bind = (config.server_host.clone(), config.server_port);

    log::info!("Starting taskline server at {}", config.server_url());

    HttpServer::new(move || {
        let gate = Arc::clone(&state.gate);
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/auth")
                            .service(routes::auth::register)
                            .service(routes::auth::login),
                    )
                    .service(
                        web::scope("/tasks")
                            .wrap(AuthGuard::new(gate))
                            .service(routes::tasks::list_tasks)
                            .service(routes::tasks::create_task)
                            .service(routes::tasks::get_task)
                            .service(routes::tasks::update_task)
                            .service(routes::tasks::delete_task),
                    ),
            )
    })
    .bind(bind)?
    .run()
    .await
}
