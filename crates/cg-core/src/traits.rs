use std::time::Duration;

/// Attend entre deux frames pendant la lecture.
///
/// Implémenté par `ThreadClock` (cg-render) ; les tests injectent une
/// horloge qui enregistre les attentes au lieu de dormir.
///
/// # Example
/// ```
/// use cg_core::traits::FrameClock;
/// use std::time::Duration;
///
/// struct Recording(Vec<Duration>);
/// impl FrameClock for Recording {
///     fn wait(&mut self, d: Duration) { self.0.push(d); }
/// }
/// let mut clock = Recording(Vec::new());
/// clock.wait(Duration::from_millis(33));
/// assert_eq!(clock.0.len(), 1);
/// ```
pub trait FrameClock {
    /// Suspend the caller for `duration`. Not cancellable.
    fn wait(&mut self, duration: Duration);
}

impl<C: FrameClock + ?Sized> FrameClock for &mut C {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration);
    }
}
