use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &assistant_backend::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        gemini = cfg.gemini_api_key().is_some(),
        "starting assistant backend"
    );

    let storage = assistant_backend::db::UserStorage::connect(&cfg.database_url).await?;
    let client = assistant_backend::api::gemini::build_http_client();

    let state = assistant_backend::router::AppState::new(
        storage,
        client,
        cfg.backend_api_key.as_str().into(),
        cfg.gemini_api_key().map(str::to_owned),
    );
    let app = assistant_backend::router::app_router(state);

    let listener = TcpListener::bind(cfg.bind_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
