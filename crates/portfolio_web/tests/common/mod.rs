use portfolio_core::ProjectStore;
use portfolio_web::{build_router, prepare_store, AppState, WebConfig};
use reqwest::{redirect::Policy, Client};
use std::path::Path;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    pub store: ProjectStore,
    pub config: WebConfig,
    _dir: TempDir,
}

impl TestServer {
    pub async fn seeded() -> Self {
        Self::start(true).await
    }

    pub async fn empty() -> Self {
        Self::start(false).await
    }

    /// Starts without seeding after `setup` has written the database file.
    pub async fn with_existing_db(setup: impl FnOnce(&Path)) -> Self {
        Self::start_with(false, setup).await
    }

    async fn start(seed_demo_projects: bool) -> Self {
        Self::start_with(seed_demo_projects, |_| {}).await
    }

    async fn start_with(seed_demo_projects: bool, setup: impl FnOnce(&Path)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = WebConfig::rooted_at(dir.path());
        config.seed_demo_projects = seed_demo_projects;
        setup(&config.db_path);

        let store = prepare_store(&config).unwrap();
        let app = build_router(AppState::new(store.clone()), &config);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder().redirect(Policy::none()).build().unwrap();

        Self {
            base_url: format!("http://{address}"),
            client,
            store,
            config,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn get_text(&self, path: &str) -> (u16, String) {
        let response = self.get(path).await;
        let status = response.status().as_u16();
        (status, response.text().await.unwrap())
    }
}

pub fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
