//! Instrumentation seam for external fuzzing harnesses.
//!
//! Every decision point and terminal reports a stable numeric identifier to
//! a [`Tracer`] before acting. The hook is a pure observability side
//! channel: it must never block, never fail the caller, and never influence
//! which branch is taken.

use std::sync::Mutex;

/// Observer for node visits during a tree walk.
///
/// Implementations are injected into the dispatcher; the binary defaults to
/// [`NoopTracer`] unless instrumentation was requested on the command line.
pub trait Tracer {
    /// Report a visit to the node tagged `id`.
    fn trace(&self, id: u32);

    /// Called once when the trace session closes.
    fn finish(&self) {}
}

/// Disabled instrumentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn trace(&self, _id: u32) {}
}

/// Forwards node visits to the logging layer at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, id: u32) {
        tracing::debug!(target: "fuzzling::trace", id, "node visited");
    }

    fn finish(&self) {
        tracing::debug!(target: "fuzzling::trace", "trace session closed");
    }
}

/// Collects visited identifiers in memory, in visit order.
///
/// Intended for harnesses that embed the dispatcher in-process and want the
/// covered path back without parsing logs; the crate's own tests use it the
/// same way.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    visited: Mutex<Vec<u32>>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers recorded so far, in visit order.
    pub fn visited(&self) -> Vec<u32> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Tracer for RecordingTracer {
    // Poisoning is swallowed: a tracer must never fail the caller.
    fn trace(&self, id: u32) {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(id);
    }
}

/// Scope guard for one instrumentation session.
///
/// Borrowed at the entry point so the session wraps the entire tree walk;
/// `finish` runs on drop, which happens on every exit path because process
/// termination is confined to `main` and the fatal path unwinds as an
/// ordinary `Err`.
pub struct Session<'a> {
    tracer: &'a dyn Tracer,
}

impl<'a> Session<'a> {
    pub fn begin(tracer: &'a dyn Tracer) -> Self {
        Self { tracer }
    }

    pub fn tracer(&self) -> &'a dyn Tracer {
        self.tracer
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.tracer.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn recording_tracer_keeps_visit_order() {
        let tracer = RecordingTracer::new();
        tracer.trace(3);
        tracer.trace(1);
        tracer.trace(2);
        assert_eq!(tracer.visited(), vec![3, 1, 2]);
    }

    #[test]
    fn session_finishes_on_drop() {
        #[derive(Default)]
        struct CountingTracer {
            finished: AtomicUsize,
        }

        impl Tracer for CountingTracer {
            fn trace(&self, _id: u32) {}

            fn finish(&self) {
                self.finished.fetch_add(1, Ordering::SeqCst);
            }
        }

        let tracer = CountingTracer::default();
        {
            let session = Session::begin(&tracer);
            session.tracer().trace(42);
        }
        assert_eq!(tracer.finished.load(Ordering::SeqCst), 1);
    }
}
