//! Publication channel: the write-only path from derived parameters to the
//! rendering surface.
//!
//! Parameters change every frame while the card moves. Routing them through a
//! host's full render/reconcile pipeline would cost a re-render per tick, so
//! they are written straight onto the surface's style-variable namespace
//! instead. This is the only place the engine touches the surface.

use crate::mapper::DerivedParameters;

pub trait Publisher {
    /// Set one named style variable. Writes are fire-and-forget; an absent
    /// surface must be skipped silently.
    fn write_var(&mut self, name: &str, value: &str);
}

/// Write all derived parameters.
pub fn publish<P: Publisher + ?Sized>(publisher: &mut P, params: &DerivedParameters) {
    for (name, value) in params.entries() {
        publisher.write_var(name.css_var(), &value.to_string());
    }
}

/// Publisher that keeps every write, newest last. For tests of code that
/// publishes.
#[derive(Clone, Debug, Default)]
pub struct RecordingPublisher {
    pub writes: Vec<(String, String)>,
}

impl RecordingPublisher {
    /// Most recent value written for `name`.
    pub fn latest(&self, name: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Publisher for RecordingPublisher {
    fn write_var(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
    }
}
