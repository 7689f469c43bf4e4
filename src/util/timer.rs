//! Cancellable timeout handles.
//!
//! The redirect-after-register and success-banner timers are owned by the
//! page that scheduled them and cancelled on cleanup, so a timer can never
//! mutate state after its page is torn down. Off the browser the handle is
//! inert.

/// Handle to a scheduled one-shot timeout. Dropping or cancelling the
/// handle stops the callback from firing.
#[derive(Default)]
pub struct TimeoutHandle {
    #[cfg(feature = "csr")]
    inner: Option<gloo_timers::callback::Timeout>,
}

impl TimeoutHandle {
    /// Stop the timeout without running its callback. No-op if it already
    /// fired or was never scheduled.
    pub fn cancel(&mut self) {
        #[cfg(feature = "csr")]
        {
            self.inner = None;
        }
    }
}

/// Schedule `callback` to run once after `millis`.
pub fn schedule(millis: u32, callback: impl FnOnce() + 'static) -> TimeoutHandle {
    #[cfg(feature = "csr")]
    {
        TimeoutHandle {
            inner: Some(gloo_timers::callback::Timeout::new(millis, callback)),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (millis, callback);
        TimeoutHandle::default()
    }
}
