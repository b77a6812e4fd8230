//! crates/logging/src/guard.rs
//! Scoped mute with automatic restoration.

use crate::service::LoggingService;

/// RAII guard that keeps a [`LoggingService`] muted for a scope.
///
/// Instances are created by [`LoggingService::mute_guard`]. Muting happens on
/// construction; dropping the guard unmutes on every exit path, including
/// panics. [`persist`](Self::persist) defuses the guard so the mute outlives
/// the scope.
#[must_use = "dropping the guard immediately unmutes the service"]
pub struct MuteGuard<'a> {
    service: Option<&'a LoggingService>,
}

impl<'a> MuteGuard<'a> {
    pub(crate) fn new(service: &'a LoggingService) -> Self {
        service.mute();
        Self {
            service: Some(service),
        }
    }

    /// Consumes the guard without unmuting.
    ///
    /// The service stays muted until [`LoggingService::unmute`] is called
    /// explicitly. Returns the service so callers can keep operating on it.
    pub fn persist(mut self) -> &'a LoggingService {
        self.service
            .take()
            .expect("mute guard must hold a service while active")
    }
}

impl Drop for MuteGuard<'_> {
    fn drop(&mut self) {
        if let Some(service) = self.service.take() {
            service.unmute();
        }
    }
}
