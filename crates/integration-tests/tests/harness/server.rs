//! Test server wrapper that starts QuizCraft on a random port

use std::net::SocketAddr;

use quizcraft_config::Config;
use quizcraft_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(config)?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: Self::new_client()?,
        })
    }

    /// A browser-like client: keeps cookies, does not follow redirects
    pub fn new_client() -> anyhow::Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?)
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Server address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Submit the signup form
    pub async fn signup(&self, username: &str, email: &str, password: &str, confirm: &str) -> reqwest::Response {
        self.client
            .post(self.url("/signup"))
            .form(&[
                ("username", username),
                ("email", email),
                ("password", password),
                ("confirm_password", confirm),
            ])
            .send()
            .await
            .expect("signup request")
    }

    /// Submit the login form; on success the client holds the session cookie
    pub async fn login(&self, identifier: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/login"))
            .form(&[("identifier", identifier), ("password", password)])
            .send()
            .await
            .expect("login request")
    }

    /// Sign up and log in a fresh user
    pub async fn sign_in_as(&self, username: &str) {
        let email = format!("{username}@example.com");
        let signup = self.signup(username, &email, "correct horse", "correct horse").await;
        assert_eq!(signup.status(), 303, "signup failed");

        let login = self.login(username, "correct horse").await;
        assert_eq!(login.status(), 303, "login failed");
    }

    /// POST JSON to `path`
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("json request")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
