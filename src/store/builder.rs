//! Store assembly.

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

use super::subscription::Subscribers;
use super::Store;
use crate::config::{BuildMode, Config};
use crate::middleware::{DefaultMiddleware, Middleware};
use crate::persist::{FileStorage, Persistor, RehydrateOutcome, Storage};
use crate::root::combine;
use crate::slices::error::{report_error, ErrorKind};

/// Assembles a [`Store`]: default middleware (plus any custom middleware,
/// appended after them), persistence over the chosen storage, and the
/// rehydrated starting snapshot.
pub struct StoreBuilder {
    config: Config,
    storage: Option<Arc<dyn Storage>>,
    mode: Option<BuildMode>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl StoreBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: None,
            mode: None,
            middleware: Vec::new(),
        }
    }

    /// Storage backend. Defaults to [`FileStorage`] in `persist.dir` or the
    /// platform data directory.
    pub fn storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Override the mode from config and build profile.
    pub fn mode(mut self, mode: BuildMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Append a middleware after the built-in ones.
    pub fn middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Build the store. Rehydration happens here, exactly once, before the
    /// store can accept any action.
    pub fn build(self) -> Store {
        let mode = self.mode.unwrap_or_else(|| self.config.mode());
        let defaults = DefaultMiddleware::new(mode, &self.config.diagnostics);
        let mut chain = defaults.chain();
        chain.extend(self.middleware);

        let storage: Arc<dyn Storage> = match self.storage {
            Some(storage) => storage,
            None => {
                let dir = self
                    .config
                    .persist
                    .dir
                    .clone()
                    .unwrap_or_else(FileStorage::default_dir);
                Arc::new(FileStorage::new(dir))
            }
        };
        let persistor = Persistor::new(self.config.persist.clone(), storage);

        let rehydrated = persistor.rehydrate();
        let mut initial = Arc::new(rehydrated.state);
        match &rehydrated.outcome {
            RehydrateOutcome::Restored => persistor.mark_written(&initial),
            RehydrateOutcome::Unreadable { reason } => {
                let report = report_error(
                    ErrorKind::Persistence,
                    persistor.config().key.as_str(),
                    reason.as_str(),
                );
                if let Ok(state) = combine(&initial, &report) {
                    initial = state;
                }
            }
            RehydrateOutcome::Missing
            | RehydrateOutcome::VersionMismatch { .. }
            | RehydrateOutcome::Corrupt { .. } => {}
        }

        tracing::info!(
            mode = ?mode,
            middleware = ?chain.iter().map(|m| m.name()).collect::<Vec<_>>(),
            outcome = ?rehydrated.outcome,
            "Store ready"
        );

        Store {
            state: RwLock::new(initial),
            chain,
            defaults,
            persistor,
            subscribers: Arc::new(Subscribers::default()),
            dispatching: ReentrantMutex::new(Cell::new(false)),
            mode,
            rehydrate_outcome: rehydrated.outcome,
        }
    }
}
