use diagnost_api::config::ApiConfig;
use diagnost_api::state::AppState;
use diagnost_inference::client::InferenceClient;
use diagnost_inference::service::HuggingFaceService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    if config.api_key.is_none() {
        tracing::warn!("HUGGINGFACE_API_KEY not set, summarization requests will be unauthenticated");
    }

    let service = HuggingFaceService::new(
        config.model_url.clone(),
        config.api_key.clone(),
        config.request_timeout,
    )?;
    tracing::info!(model_url = %service.endpoint(), "summarization service configured");

    let client = InferenceClient::new(service, config.retry);
    tracing::info!(
        max_attempts = client.policy().max_attempts,
        delay_secs = client.policy().delay.as_secs(),
        "retry policy"
    );
    let app = diagnost_api::router(AppState::new(client));

    if config.lambda_runtime {
        tracing::info!("starting under the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
