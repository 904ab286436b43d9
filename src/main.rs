use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use scribehub_backend::auth::middleware::JwtSecret;
use scribehub_backend::create_pool;
use scribehub_backend::handlers;
use scribehub_backend::payments::PaymentClient;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db_data = web::Data::new(db);

    let jwt_secret = std::env::var("JWT_KEY").expect("JWT_KEY must be set");
    let secret_data = web::Data::new(JwtSecret(jwt_secret));

    // Payment path is optional: without a key the order endpoints answer 503.
    let stripe_key = std::env::var("STRIPE_SECRET_KEY").ok();
    if stripe_key.is_none() {
        tracing::warn!("STRIPE_SECRET_KEY not set; payment endpoints disabled");
    }
    let payments_data = web::Data::new(PaymentClient::new(stripe_key));

    let client_url = std::env::var("CLIENT_URL").ok();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = match client_url.as_deref() {
            Some(origin) => Cors::default().allowed_origin(origin),
            None => Cors::default().allowed_origin("http://localhost:3000"),
        }
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::AUTHORIZATION,
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .supports_credentials()
        .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(secret_data.clone())
            .app_data(payments_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
