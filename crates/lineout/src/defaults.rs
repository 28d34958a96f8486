//! Process-wide defaults read by [`LineBuffer`](crate::LineBuffer)
//! constructors.
//!
//! Both values are consulted once, when a buffer is created. Changing them
//! later does not affect buffers that already exist. Changing them while
//! another thread is constructing buffers is allowed but the buffer may see
//! either the old or the new value.
use core::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::Sink;

/// Minimum capacity of a buffered [`LineBuffer`](crate::LineBuffer) unless
/// changed with [`set_min_size`].
pub const DEFAULT_MIN_SIZE: usize = 1 << 8;

static MIN_SIZE: AtomicUsize = AtomicUsize::new(DEFAULT_MIN_SIZE);
static DESTINATION: RwLock<Option<Sink>> = parking_lot::const_rwlock(None);

/// Current minimum capacity for buffered instances.
#[must_use]
pub fn min_size() -> usize {
    MIN_SIZE.load(Ordering::Relaxed)
}

/// Change the minimum capacity for buffers created from now on.
///
/// A value of `0` is raised to `1` so that `LineBuffer::new(1)` still yields
/// a buffered instance.
pub fn set_min_size(size: usize) {
    let size = size.max(1);
    tracing::trace!(size, "default minimum buffer size changed");
    MIN_SIZE.store(size, Ordering::Relaxed);
}

/// Override the destination used by buffers created from now on.
///
/// `None` restores the standard output.
pub fn set_default_destination(sink: Option<Sink>) {
    tracing::trace!(
        destination = sink.as_ref().map_or("stdout", Sink::label),
        "default destination changed"
    );
    *DESTINATION.write() = sink;
}

/// Destination a newly created buffer will flush into.
#[must_use]
pub fn default_destination() -> Sink {
    DESTINATION.read().clone().unwrap_or_else(Sink::stdout)
}
