use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;

use club_be::database::{
    init_database,
    repositories::{MappingRepository, MatchRepository, TeamRepository},
};
use club_be::handlers::{imports, mappings, matches, teams};
use club_be::{Config, ScheduleImporter};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Club API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    // Load configuration
    let config = Config::from_env()?;
    log::info!("Configuration loaded (environment: {})", config.environment);

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    log::info!("Database initialized");

    // Initialize repositories and services
    let team_repository = TeamRepository::new(pool.clone());
    let mapping_repository = MappingRepository::new(pool.clone());
    let match_repository = MatchRepository::new(pool.clone());
    let schedule_importer = ScheduleImporter::new(pool.clone());

    let team_repo_data = web::Data::new(team_repository);
    let mapping_repo_data = web::Data::new(mapping_repository);
    let match_repo_data = web::Data::new(match_repository);
    let importer_data = web::Data::new(schedule_importer);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(team_repo_data.clone())
            .app_data(mapping_repo_data.clone())
            .app_data(match_repo_data.clone())
            .app_data(importer_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&config.cors_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["Authorization", "Content-Type", "Accept"])
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(hello)
            .service(health)
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/teams")
                            .route("", web::post().to(teams::create_team))
                            .route("", web::get().to(teams::get_teams))
                            .route("/{id}", web::get().to(teams::get_team))
                            .route("/{id}", web::put().to(teams::update_team))
                            .route("/{id}", web::delete().to(teams::delete_team)),
                    )
                    .service(
                        web::scope("/mappings")
                            .route("", web::post().to(mappings::create_mapping))
                            .route("", web::get().to(mappings::get_mappings))
                            .route("/{id}", web::put().to(mappings::update_mapping))
                            .route("/{id}", web::delete().to(mappings::delete_mapping)),
                    )
                    .service(
                        web::scope("/matches")
                            .route("/home", web::get().to(matches::get_home_matches))
                            .route("/home/{id}", web::delete().to(matches::delete_home_match))
                            .route("/away", web::get().to(matches::get_away_matches))
                            .route("/away/{id}", web::delete().to(matches::delete_away_match)),
                    )
                    .service(
                        web::scope("/imports")
                            .route("/schedule", web::post().to(imports::import_schedule)),
                    ),
            )
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
