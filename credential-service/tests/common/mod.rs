use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use credential_service::domain::account::service::AccountService;
use credential_service::inbound::http::router::create_router;
use credential_service::outbound::repositories::MemoryAccountRepository;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Low cost keeps the suite fast; the clamp itself is covered by unit tests.
pub const TEST_HASHING_COST: u32 = 4;

/// Test application that spawns a real server on a random port, backed by
/// the in-memory account store.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
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

        let repository = Arc::new(MemoryAccountRepository::new());
        let account_service = Arc::new(AccountService::new(repository, TEST_HASHING_COST));
        let authenticator = Arc::new(Authenticator::new(
            TEST_JWT_SECRET.as_bytes(),
            TEST_HASHING_COST,
        ));

        let application = create_router(account_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server crashed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET.as_bytes()),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}
