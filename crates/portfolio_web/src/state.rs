use crate::error::AppError;
use portfolio_core::{ProjectStore, RepoResult};
use std::sync::Arc;

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub store: ProjectStore,
}

impl AppState {
    pub fn new(store: ProjectStore) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Runs a store operation on the blocking pool.
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&ProjectStore) -> RepoResult<T> + Send + 'static,
    {
        let store = self.store.clone();
        let result = tokio::task::spawn_blocking(move || f(&store)).await?;
        Ok(result?)
    }
}
