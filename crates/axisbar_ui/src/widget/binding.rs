//! Shared value cell that stands in for a two-way binding.

use std::sync::Arc;

use parking_lot::RwLock;

/// Caller-owned slot holding the bar's external value.
///
/// Clones share the same slot. The widget writes mapped drag values into it
/// and reads it every frame to pick up assignments made elsewhere. Last
/// write wins.
#[derive(Debug, Clone, Default)]
pub struct ValueCell {
    inner: Arc<RwLock<f32>>,
}

impl ValueCell {
    /// Creates a cell holding `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Reads the current value.
    #[must_use]
    pub fn get(&self) -> f32 {
        *self.inner.read()
    }

    /// Overwrites the value.
    pub fn set(&self, value: f32) {
        *self.inner.write() = value;
    }

    /// Overwrites the value and returns the previous one.
    pub fn replace(&self, value: f32) -> f32 {
        std::mem::replace(&mut *self.inner.write(), value)
    }
}
