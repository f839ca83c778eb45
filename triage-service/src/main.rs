use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_service::{
    AppState, ServiceConfig, create_app,
    llm::{GeminiLlm, LlmClient},
    mailer::{Mailer, SmtpMailer},
};

/// Initialize structured tracing based on environment variables
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "triage_service=debug,triage_flow=debug,tower_http=debug".into());

    match log_format.as_str() {
        "pretty" => {
            // Human-readable logging for development
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            // Structured JSON logging for production
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    // Missing LLM or mail credentials are fatal; the service never starts
    // half-configured.
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let llm: Arc<dyn LlmClient> = Arc::new(GeminiLlm::new(config.gemini_api_key.clone()));
    let mailer: Arc<dyn Mailer> = match SmtpMailer::new(&config.mail) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            error!("failed to initialize SMTP transport: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(&config, llm, mailer);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.unwrap();
}
