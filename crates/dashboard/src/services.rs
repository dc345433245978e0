//! Collaborators shared by every controller of a dashboard session.

use crate::api::Transport;
use crate::navigation::Navigator;
use crate::notify::Notifier;

/// Transport, router and toast sink handed to controller operations.
///
/// Controllers borrow this per call instead of owning it, so one set of
/// collaborators serves every form on a page.
#[derive(Debug, Clone)]
pub struct Services<T, N, S> {
    pub transport: T,
    pub navigator: N,
    pub notifier: S,
}

impl<T, N, S> Services<T, N, S>
where
    T: Transport,
    N: Navigator,
    S: Notifier,
{
    #[must_use]
    pub const fn new(transport: T, navigator: N, notifier: S) -> Self {
        Self {
            transport,
            navigator,
            notifier,
        }
    }
}
