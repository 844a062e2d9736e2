//! Builder for creating and configuring Wizard instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    store::{Database, SqliteStore, TaskStore},
};

/// Builder for creating and configuring Wizard instances.
///
/// The backing store is configured once here and injected into the wizard;
/// nothing else in the crate reaches for ambient storage state.
#[derive(Default)]
pub struct WizardBuilder {
    store: Option<Arc<dyn TaskStore>>,
    database_path: Option<PathBuf>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects an explicit task store, bypassing the SQLite default.
    pub fn with_store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets a custom database file path for the default SQLite store.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/outline/outline.db` or
    /// `~/.local/share/outline/outline.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured wizard and loads the task collection from the
    /// store. An unreachable store degrades to an empty collection with a
    /// logged warning rather than failing the build.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the database path is invalid
    /// Returns `WizardError::StoreUnavailable` if database initialization fails
    pub async fn build(self) -> Result<Wizard> {
        let store = if let Some(store) = self.store {
            store
        } else {
            let db_path = if let Some(path) = self.database_path {
                path
            } else {
                Self::default_database_path()?
            };

            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            let db_path_clone = db_path.clone();
            task::spawn_blocking(move || {
                let _db = Database::new(&db_path_clone)?;
                Ok::<(), WizardError>(())
            })
            .await
            .map_err(|e| WizardError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

            Arc::new(SqliteStore::new(db_path)) as Arc<dyn TaskStore>
        };

        let mut wizard = Wizard::new(store);
        wizard.refresh().await?;
        Ok(wizard)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("outline")
            .place_data_file("outline.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}
