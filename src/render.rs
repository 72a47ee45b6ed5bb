use crate::cell::Cell;
use std::thread;
use std::time::Duration;

/// Front end that plays back a [Timeline](crate::animation::Timeline). It owns all waiting;
/// the traversal itself never blocks.
pub trait Renderer {
    /// Waits out the delay preceding the next frame.
    fn pause(&mut self, delay: Duration);
    /// Shows the new display state of `cell`.
    fn paint(&mut self, cell: &Cell);
}

/// Ignores delays and draws nothing. The grid still receives every state change.
#[derive(Clone, Copy, Debug, Default)]
pub struct Instant;

impl Renderer for Instant {
    fn pause(&mut self, _: Duration) {}
    fn paint(&mut self, _: &Cell) {}
}

/// Blocks the current thread for every delay before handing the frame to `inner`.
#[derive(Clone, Debug, Default)]
pub struct Sleeping<R> {
    pub inner: R,
}

impl<R: Renderer> Sleeping<R> {
    pub fn new(inner: R) -> Sleeping<R> {
        Sleeping { inner }
    }
}

impl<R: Renderer> Renderer for Sleeping<R> {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.inner.pause(delay);
    }
    fn paint(&mut self, cell: &Cell) {
        self.inner.paint(cell);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay);
    }
    fn paint(&mut self, cell: &Cell) {
        (**self).paint(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellId;

    #[derive(Default)]
    struct Counter {
        waited: Duration,
        painted: usize,
    }

    impl Renderer for Counter {
        fn pause(&mut self, delay: Duration) {
            self.waited += delay;
        }
        fn paint(&mut self, _: &Cell) {
            self.painted += 1;
        }
    }

    #[test]
    fn sleeping_forwards_to_inner() {
        let mut renderer = Sleeping::new(Counter::default());
        renderer.pause(Duration::from_millis(1));
        renderer.pause(Duration::ZERO);
        renderer.paint(&Cell::new(CellId(1), 0, 0));
        assert_eq!(renderer.inner.waited, Duration::from_millis(1));
        assert_eq!(renderer.inner.painted, 1);
    }
}
