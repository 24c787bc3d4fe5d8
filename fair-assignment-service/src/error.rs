use fair_assignment_config::ConfigError;
use fair_assignment_database::error::DatabaseError;
use fair_assignment_engine::OrchestrationError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("{0}")]
    Orchestration(#[from] OrchestrationError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    File(#[from] std::io::Error),
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialized: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
