// taskboard-service/src/main.rs
use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use log::info;
use taskboard_service::routes::{
    auth_routes, permission_routes, project_routes, task_routes, team_routes,
};
use taskboard_service::utils::auth_middleware::Authentication;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:9090".to_string());

    std::fs::create_dir_all("./storage")?;

    info!("🚀 Server starting at {}", address);

    HttpServer::new(|| {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_headers(["Authorization"]);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(Authentication)
            .configure(auth_routes::init_routes)
            .configure(team_routes::init_routes)
            .configure(project_routes::init_routes)
            .configure(task_routes::init_routes)
            .configure(permission_routes::init_routes)
    })
        .bind(address)?
        .run()
        .await
}
