//! Middleware pipeline around the combinator.
//!
//! ```text
//! dispatch ─→ error ─→ logger ─→ performance ─→ custom… ─→ combinator
//!                ←──────── after-logic unwinds back to front ←──┘
//! ```
//!
//! Each middleware decides whether and when to call the next one, and with
//! which action. Not calling `next` short-circuits the rest of the chain.

mod error;
mod logger;
mod performance;

use std::sync::Arc;

use parking_lot::RwLock;

pub use error::ErrorMiddleware;
pub use logger::{LogEntry, LoggerMiddleware};
pub use performance::{ActionTiming, PerformanceMiddleware};

use crate::config::{BuildMode, DiagnosticsConfig};
use crate::error::StoreError;
use crate::root::{RootAction, RootState};

/// Interceptor in the dispatch pipeline.
pub trait Middleware: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Handle `action`, usually by calling `next.run(..)` and returning what
    /// it returns.
    fn handle(
        &self,
        api: &MiddlewareApi<'_>,
        action: RootAction,
        next: Next<'_>,
    ) -> Result<Arc<RootState>, StoreError>;
}

/// Read access to the store handed to every middleware.
pub struct MiddlewareApi<'a> {
    state: &'a RwLock<Arc<RootState>>,
    mode: BuildMode,
}

impl<'a> MiddlewareApi<'a> {
    pub fn new(state: &'a RwLock<Arc<RootState>>, mode: BuildMode) -> Self {
        Self { state, mode }
    }

    /// Current snapshot; reflects transitions already committed by the
    /// combinator during this dispatch.
    pub fn get_state(&self) -> Arc<RootState> {
        Arc::clone(&self.state.read())
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }
}

/// The final step: run the combinator and commit its result.
pub type Terminal<'a> = &'a dyn Fn(RootAction) -> Result<Arc<RootState>, StoreError>;

/// Cursor into the rest of the chain.
///
/// `Copy`, so a middleware may run the remainder more than once (the error
/// middleware does, to route its report).
#[derive(Clone, Copy)]
pub struct Next<'a> {
    api: &'a MiddlewareApi<'a>,
    chain: &'a [Arc<dyn Middleware>],
    terminal: Terminal<'a>,
}

impl<'a> Next<'a> {
    pub fn new(
        api: &'a MiddlewareApi<'a>,
        chain: &'a [Arc<dyn Middleware>],
        terminal: Terminal<'a>,
    ) -> Self {
        Self {
            api,
            chain,
            terminal,
        }
    }

    pub fn run(self, action: RootAction) -> Result<Arc<RootState>, StoreError> {
        match self.chain.split_first() {
            Some((head, rest)) => head.handle(
                self.api,
                action,
                Next {
                    chain: rest,
                    ..self
                },
            ),
            None => (self.terminal)(action),
        }
    }
}

/// The built-in middleware for a build mode.
///
/// The error middleware is always present and always first. Logger and
/// performance middleware exist only in development.
pub struct DefaultMiddleware {
    pub error: Arc<ErrorMiddleware>,
    pub logger: Option<Arc<LoggerMiddleware>>,
    pub performance: Option<Arc<PerformanceMiddleware>>,
}

impl DefaultMiddleware {
    pub fn new(mode: BuildMode, diagnostics: &DiagnosticsConfig) -> Self {
        let (logger, performance) = if mode.is_production() {
            (None, None)
        } else {
            (
                Some(Arc::new(LoggerMiddleware::new(diagnostics.log_capacity))),
                Some(Arc::new(PerformanceMiddleware::new(
                    std::time::Duration::from_millis(diagnostics.slow_action_ms),
                ))),
            )
        };
        Self {
            error: Arc::new(ErrorMiddleware),
            logger,
            performance,
        }
    }

    /// Chain in declared order.
    pub fn chain(&self) -> Vec<Arc<dyn Middleware>> {
        let mut chain: Vec<Arc<dyn Middleware>> = vec![self.error.clone()];
        if let Some(logger) = &self.logger {
            chain.push(logger.clone());
        }
        if let Some(performance) = &self.performance {
            chain.push(performance.clone());
        }
        chain
    }
}
