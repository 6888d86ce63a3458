//! Configuration for rewrite walks.

use crate::trace::TracerConfig;

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Clone, Debug)]
pub struct RewriteConfig {
    /// After a `File` is walked, drop emptied groups from `File::comments`.
    pub tidy_file_comments: bool,

    /// Tracer settings.
    pub trace: TracerConfig,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            tidy_file_comments: true,
            trace: TracerConfig::default(),
        }
    }
}

impl RewriteConfig {
    /// Creates a configuration that traces every event to `tracing`.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            tidy_file_comments: true,
            trace: TracerConfig::new().enabled().to_log(),
        }
    }

    /// Builder method to enable/disable file comment tidying.
    #[must_use]
    pub fn with_tidy_file_comments(mut self, tidy: bool) -> Self {
        self.tidy_file_comments = tidy;
        self
    }

    /// Builder method to set tracer settings.
    #[must_use]
    pub fn with_trace(mut self, trace: TracerConfig) -> Self {
        self.trace = trace;
        self
    }
}
