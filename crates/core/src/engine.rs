//! The simulation engine seam.

/// A simulation that produces encoded snapshots.
///
/// The viewer only ever steps the engine and reads its latest snapshot; how the
/// engine computes a step is its own business.
pub trait Engine {
    /// World width in cells. Fixed for the engine's lifetime.
    fn size_x(&self) -> u16;

    /// World height in cells. Fixed for the engine's lifetime.
    fn size_y(&self) -> u16;

    /// Run one simulation step.
    fn advance(&mut self);

    /// Latest encoded snapshot, or `None` before the engine has produced one.
    fn current_state(&self) -> Option<&str>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn size_x(&self) -> u16 {
        (**self).size_x()
    }

    fn size_y(&self) -> u16 {
        (**self).size_y()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn current_state(&self) -> Option<&str> {
        (**self).current_state()
    }
}
