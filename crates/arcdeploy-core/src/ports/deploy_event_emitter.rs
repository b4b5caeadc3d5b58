//! Deploy event emitter port.
//!
//! This port abstracts deploy progress emission, allowing the driver to
//! report progress without coupling to presentation details (console,
//! structured logs).

use crate::deploy::DeployEvent;

/// Port for emitting deploy events.
///
/// This trait abstracts away the presentation mechanism for deploy progress.
/// Implementations handle the actual delivery (console output, log records).
pub trait DeployEventEmitterPort: Send + Sync {
    /// Emit a deploy event.
    ///
    /// This method should not block; the driver calls it inline between
    /// network operations.
    fn emit(&self, event: DeployEvent);

    /// Clone this emitter into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn DeployEventEmitterPort>` without
    /// requiring the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn DeployEventEmitterPort>;
}

/// A no-op deploy event emitter for tests and quiet contexts.
///
/// This implementation discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopDeployEmitter;

impl NoopDeployEmitter {
    /// Create a new no-op deploy emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DeployEventEmitterPort for NoopDeployEmitter {
    fn emit(&self, _event: DeployEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn DeployEventEmitterPort> {
        Box::new(self.clone())
    }
}
