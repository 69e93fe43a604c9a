pub mod cli;
pub mod config;
pub mod language;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "en");

/// Create app router for testing
///
/// Builds the Axum router with all routes configured and a fresh planner
/// session, useful for integration testing without starting the full server.
pub fn create_app() -> axum::Router {
    use std::sync::Arc;

    use mealboard_plan::PlannerSession;

    let config = config::Config {
        server: config::ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        observability: config::ObservabilityConfig::default(),
    };

    routes::router(AppState {
        config,
        session: Arc::new(tokio::sync::RwLock::new(PlannerSession::new())),
    })
}
