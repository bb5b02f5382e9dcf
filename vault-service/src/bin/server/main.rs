use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vault_service::config::Config;
use vault_service::domain::document::DocumentService;
use vault_service::domain::encryption::EncryptionKey;
use vault_service::domain::encryption::EncryptionService;
use vault_service::domain::user::service::AuthService;
use vault_service::inbound::http::router::create_router;
use vault_service::outbound::repositories::InMemoryCredentialStore;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vault_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "vault-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        algorithm = %config.auth.algorithm,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        "Configuration loaded"
    );

    // Key and algorithm misconfiguration is fatal here, never lazily on
    // first use.
    let algorithm = config
        .auth
        .algorithm
        .parse::<Algorithm>()
        .map_err(|_| anyhow::anyhow!("Unknown signing algorithm: {}", config.auth.algorithm))?;
    anyhow::ensure!(
        matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ),
        "Signing algorithm must be an HMAC variant (HS256/HS384/HS512), got {}",
        config.auth.algorithm
    );

    let encryption_key = EncryptionKey::parse(&config.encryption.key)?;
    let encryption_service = Arc::new(EncryptionService::new(&encryption_key));

    let token_service = Arc::new(TokenService::new(
        config.auth.secret.as_bytes(),
        algorithm,
        Duration::minutes(config.auth.token_ttl_minutes),
    ));

    let credential_store = Arc::new(InMemoryCredentialStore::new());
    let auth_service = Arc::new(AuthService::new(credential_store, token_service));
    let document_service = Arc::new(DocumentService::with_sample_documents(encryption_service)?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, document_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
