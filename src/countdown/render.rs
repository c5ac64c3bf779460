//! Destination of the rendered countdown

use super::Unit;

/// Where a countdown writes its output.
///
/// A target exposes four slots (one per [`Unit`]) inside a single timer
/// container that can be replaced wholesale once the event has started.
pub trait RenderTarget: Send {
    /// Whether the timer container currently exists
    fn is_mounted(&self) -> bool {
        true
    }

    /// Write the text of one slot
    fn set_unit(&mut self, unit: Unit, value: &str);

    /// Replace the whole timer container with the "event has started" message
    fn replace_with_ended_message(&mut self);
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }

    fn set_unit(&mut self, unit: Unit, value: &str) {
        (**self).set_unit(unit, value)
    }

    fn replace_with_ended_message(&mut self) {
        (**self).replace_with_ended_message()
    }
}
