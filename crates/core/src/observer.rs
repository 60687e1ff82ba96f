/// Receives solver events and optionally steers the solver.
///
/// Each solver defines its own event type `E` and action type `A`. Returning
/// `None` lets the solver continue unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the no-op observer used by the `*_unobserved` solver entry points.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<u32, Action>>(mut observer: O, events: &[u32]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &u32| (*event >= 2).then_some(Action::Stop);
        assert_eq!(drive(observer, &[0, 1, 2, 3]), Some(2));
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        let observer = |event: &u32| {
            seen.push(*event);
            None
        };
        assert_eq!(drive(observer, &[4, 5]), None);
        assert_eq!(seen, vec![4, 5]);
    }
}
