use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,

    /// Specifies whether independent evaluations can be run in parallel.
    pub is_parallel: bool,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, is_parallel: bool) -> Self {
        Self { logger, is_parallel }
    }

    /// Creates a new instance of `Environment` which swallows all log messages.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| {}), is_parallel: false }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg| println!("{msg}")), is_parallel: false }
    }
}
