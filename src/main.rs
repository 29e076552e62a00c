//! Course Registry API - Main Entry Point

use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_registry::application::use_cases::courses::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseByIdUseCase, ListCoursesUseCase,
    PartialUpdateCourseUseCase, UpdateCourseUseCase,
};
use course_registry::infrastructure::driven_adapters::config::AppConfig;
use course_registry::infrastructure::driven_adapters::course_repository::PostgresCourseRepository;
use course_registry::infrastructure::driven_adapters::student_repository::PostgresStudentRepository;
use course_registry::infrastructure::driving_adapters::api_rest::handlers::courses;
use course_registry::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let course_repository = Arc::new(PostgresCourseRepository::new(pool.clone()));
    let student_repository = Arc::new(PostgresStudentRepository::new(pool));

    // Create use cases
    let create_course_use_case = Arc::new(CreateCourseUseCase::new(
        course_repository.clone(),
        student_repository.clone(),
    ));
    let get_course_by_id_use_case = Arc::new(GetCourseByIdUseCase::new(course_repository.clone()));
    let list_courses_use_case = Arc::new(ListCoursesUseCase::new(course_repository.clone()));
    let update_course_use_case = Arc::new(UpdateCourseUseCase::new(
        course_repository.clone(),
        student_repository.clone(),
    ));
    let partial_update_course_use_case = Arc::new(PartialUpdateCourseUseCase::new(
        course_repository.clone(),
        student_repository,
    ));
    let delete_course_use_case = Arc::new(DeleteCourseUseCase::new(course_repository));

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        create_course_use_case,
        get_course_by_id_use_case,
        list_courses_use_case,
        update_course_use_case,
        partial_update_course_use_case,
        delete_course_use_case,
    };

    // Build router
    let app = Router::new()
        .nest("/api/courses", courses::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
