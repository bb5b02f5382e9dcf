use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use vault_service::domain::document::DocumentService;
use vault_service::domain::encryption::EncryptionKey;
use vault_service::domain::encryption::EncryptionService;
use vault_service::domain::user::service::AuthService;
use vault_service::inbound::http::router::create_router;
use vault_service::outbound::repositories::InMemoryCredentialStore;

const TEST_SIGNING_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
const TEST_ENCRYPTION_KEY: &str = "5mStCPJ_O8Ze0k-PgnCdg0zAn-u0nKClNHsdN6lki2U=";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_service: Arc<TokenService>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::new(
            TEST_SIGNING_SECRET,
            Algorithm::HS256,
            Duration::minutes(30),
        ));

        let encryption_key =
            EncryptionKey::parse(TEST_ENCRYPTION_KEY).expect("Invalid test encryption key");
        let encryption_service = Arc::new(EncryptionService::new(&encryption_key));

        let credential_store = Arc::new(InMemoryCredentialStore::new());
        let auth_service = Arc::new(AuthService::new(
            credential_store,
            Arc::clone(&token_service),
        ));
        let document_service = Arc::new(
            DocumentService::with_sample_documents(encryption_service)
                .expect("Failed to seed document vault"),
        );

        let router = create_router(auth_service, document_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_service,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a user and return the raw response
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request")
    }

    /// Log a user in and return the raw response
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute login request")
    }

    /// Register and log in a user, returning a valid access token
    pub async fn access_token_for(&self, username: &str, password: &str) -> String {
        let email = format!("{}@example.com", username);
        let response = self.register(username, &email, password).await;
        assert!(
            response.status().is_success(),
            "Test user registration failed"
        );

        let response = self.login(username, password).await;
        assert!(response.status().is_success(), "Test user login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["access_token"]
            .as_str()
            .expect("Login body missing access_token")
            .to_string()
    }
}
