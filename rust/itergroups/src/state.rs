/// Lifecycle of a [`Chunks`](crate::Chunks) or [`Slices`](crate::Slices) adaptor.
///
/// ```text
/// Fresh --group--> Active --group--> Active
///   |                |
///   +--end of source-+--> Exhausted
///   +--source error--+--> Faulted
/// ```
///
/// `Exhausted` and `Faulted` are terminal: an adaptor in either state yields
/// no further groups and does not pull from its source again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdaptorState {
    /// No group has been requested yet.
    #[default]
    Fresh,
    /// At least one group has been produced.
    Active,
    /// The source reported clean end-of-sequence.
    Exhausted,
    /// The source failed while being pulled.
    Faulted,
}

impl AdaptorState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, AdaptorState::Exhausted | AdaptorState::Faulted)
    }

    /// Moves to the state implied by the outcome of a group request.
    pub(crate) fn record<T, E>(&mut self, outcome: &Result<Option<T>, E>, adaptor: &str) {
        let next = match outcome {
            Ok(Some(_)) => AdaptorState::Active,
            Ok(None) => AdaptorState::Exhausted,
            Err(_) => AdaptorState::Faulted,
        };
        if next.is_terminal() {
            log::trace!("{adaptor}: {:?} -> {:?}", *self, next);
        }
        *self = next;
    }
}
