//! Reset Signal
//!
//! One-shot notification from a dependent screen back to the login screen.

use std::fmt;
use std::rc::{Rc, Weak};

/// Capability to wipe the login inputs
pub trait ResetSignal {
    fn signal_reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Delivered,
    /// No target attached, or the target is gone
    Skipped,
}

/// Non-owning handle to a reset target.
///
/// Holding a link never keeps the target alive.
#[derive(Clone, Default)]
pub struct ResetLink {
    target: Option<Weak<dyn ResetSignal>>,
}

impl ResetLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to<T: ResetSignal + 'static>(target: &Rc<T>) -> Self {
        let mut link = Self::new();
        link.attach(target);
        link
    }

    pub fn attach<T: ResetSignal + 'static>(&mut self, target: &Rc<T>) {
        let weak: Weak<T> = Rc::downgrade(target);
        self.target = Some(weak);
    }

    pub fn detach(&mut self) {
        self.target = None;
    }

    pub fn is_attached(&self) -> bool {
        self.target.as_ref().is_some_and(|t| t.strong_count() > 0)
    }

    pub fn signal(&self) -> ResetOutcome {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(target) => {
                target.signal_reset();
                ResetOutcome::Delivered
            }
            None => ResetOutcome::Skipped,
        }
    }
}

impl fmt::Debug for ResetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetLink")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter {
        resets: Cell<usize>,
    }

    impl ResetSignal for Counter {
        fn signal_reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn test_signal_without_target_is_skipped() {
        let link = ResetLink::new();
        assert!(!link.is_attached());
        assert_eq!(link.signal(), ResetOutcome::Skipped);
    }

    #[test]
    fn test_signal_delivers_once() {
        let target = Rc::new(Counter::default());
        let link = ResetLink::to(&target);

        assert_eq!(link.signal(), ResetOutcome::Delivered);
        assert_eq!(target.resets.get(), 1);
    }

    #[test]
    fn test_link_does_not_own_target() {
        let target = Rc::new(Counter::default());
        let link = ResetLink::to(&target);
        assert_eq!(Rc::strong_count(&target), 1);

        drop(target);

        assert!(!link.is_attached());
        assert_eq!(link.signal(), ResetOutcome::Skipped);
    }

    #[test]
    fn test_attach_replaces_target() {
        let first = Rc::new(Counter::default());
        let second = Rc::new(Counter::default());
        let mut link = ResetLink::to(&first);
        link.attach(&second);

        assert_eq!(link.signal(), ResetOutcome::Delivered);
        assert_eq!(first.resets.get(), 0);
        assert_eq!(second.resets.get(), 1);
    }

    #[test]
    fn test_detach() {
        let target = Rc::new(Counter::default());
        let mut link = ResetLink::to(&target);
        link.detach();

        assert_eq!(link.signal(), ResetOutcome::Skipped);
        assert_eq!(target.resets.get(), 0);
    }
}
