//! Progress reporting and cooperative cancellation.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Phase names the core reports to a [`ProgressSink`], in the order they
/// occur during [`crate::encode`].
///
/// [`crate::decode`] does not report progress: a chain walk is O(L) with no
/// long scanning phase, so there is nothing worth a progress bar for.
pub mod phase {
    pub const ENCRYPT: &str = "encrypt";
    pub const SELECT_PIXELS: &str = "select-pixels";
    pub const PREPARE_POINTERS: &str = "prepare-pointers";
    pub const ENCODE_BYTES: &str = "encode-bytes";
    pub const WRITE_PIXELS: &str = "write-pixels";
    pub const PACKAGE_KEY: &str = "package-key";
    pub const DONE: &str = "done";
}

/// A caller-supplied sink for progress updates.
///
/// `fraction` is in `[0, 1]`; `phase` is one of the [`phase`] constants.
/// The engine performs no direct I/O of its own; this callback is the only
/// channel it has for reporting what it's doing.
pub trait ProgressSink {
    fn report(&mut self, fraction: f64, phase: &str);
}

impl<F: FnMut(f64, &str)> ProgressSink for F {
    fn report(&mut self, fraction: f64, phase: &str) {
        self(fraction, phase)
    }
}

/// A [`ProgressSink`] that discards every update, for callers with no UI
/// to drive.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&mut self, _fraction: f64, _phase: &str) {}
}

/// A cooperative cancellation flag, checked at yield points during
/// [`crate::chain_builder::build`].
///
/// Cloning shares the underlying flag, so a caller can hold one clone on a
/// UI thread and pass another into [`crate::encode`] running elsewhere;
/// there is no internal locking beyond the atomic itself.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
