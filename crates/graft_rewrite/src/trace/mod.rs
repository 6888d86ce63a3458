//! Tracing of rewrite walks.
//!
//! Records what the walker did at each node with zero overhead when
//! disabled. Records go to a bounded [`TraceBuffer`] and, with
//! [`TraceOutput::Log`], to the `tracing` subscriber as well.
//!
//! # Example
//!
//! ```
//! use graft_ast::{Expr, Node};
//! use graft_rewrite::{Engine, RewriteConfig, TracerConfig, Visit, rewriter::FnRewriter};
//!
//! let config = RewriteConfig::default().with_trace(TracerConfig::new().enabled());
//! let mut engine = Engine::new(config);
//! let mut rewriter = FnRewriter(|_: &mut Node| Visit::Descend);
//! let _ = engine.walk(Some(Node::from(Expr::ident("x"))), &mut rewriter);
//!
//! let kinds: Vec<_> = engine.tracer().buffer().iter().map(|r| r.event_type()).collect();
//! assert_eq!(kinds, vec!["enter", "leave"]);
//! ```

pub mod buffer;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use record::{RemoveCause, TraceRecord, WalkEvent};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Forward each record to the `tracing` subscriber.
    Log,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to forward records to `tracing`.
    #[must_use]
    pub fn to_log(mut self) -> Self {
        self.output = TraceOutput::Log;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records walk events.
///
/// The `record` method returns immediately if tracing is off.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_walk: u64,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_walk: 0,
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that forwards to `tracing`.
    #[must_use]
    pub fn to_log() -> Self {
        Self::new(TracerConfig::new().enabled().to_log())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Starts numbering records for a new walk.
    pub fn begin_walk(&mut self) {
        self.current_walk += 1;
    }

    /// Returns the number of the current walk; 0 before the first walk.
    #[must_use]
    pub fn current_walk(&self) -> u64 {
        self.current_walk
    }

    /// Records a walk event at the given depth.
    #[inline]
    pub fn record(&mut self, depth: usize, event: WalkEvent) {
        // Fast path - if disabled, return immediately
        if !self.config.enabled {
            return;
        }

        self.record_internal(depth, event);
    }

    fn record_internal(&mut self, depth: usize, event: WalkEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        let output = self.config.output;
        let record = self.buffer.push(self.current_walk, depth, event);

        if output == TraceOutput::Log {
            if record.event.is_mutation() {
                tracing::debug!(walk = record.walk, id = record.id, depth, "{}", record.event);
            } else {
                tracing::trace!(walk = record.walk, id = record.id, depth, "{}", record.event);
            }
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
