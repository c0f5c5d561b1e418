//! Heap payloads owned by non-trivial values.

use std::any::Any;
use std::fmt;

/// A heap-allocated payload.
///
/// A `Layout` is owned by exactly one [`Value`](crate::Value) at a time.
/// Copying a value duplicates its payload through [`clone_layout`](Self::clone_layout);
/// payloads are never shared.
///
/// Values tell payloads apart by address, so implementors must not be
/// zero-sized: a `Value` panics when handed one.
///
/// Typed wrappers recover the concrete payload with
/// [`downcast_ref`](trait.Layout.html#method.downcast_ref).
pub trait Layout: Any + fmt::Debug {
    /// An independent deep copy of this payload.
    fn clone_layout(&self) -> Box<dyn Layout>;

    /// Short payload name for diagnostics (e.g. `"string"`).
    fn kind(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Layout {
    /// The payload as a concrete type, if it is one.
    #[inline]
    pub fn downcast_ref<T: Layout>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<T: Layout>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    #[inline]
    pub fn is<T: Layout>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl Clone for Box<dyn Layout> {
    fn clone(&self) -> Self {
        self.clone_layout()
    }
}
