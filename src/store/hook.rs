// SPDX-License-Identifier: MPL-2.0
//! Pre-dismiss hook.
//!
//! The hook runs before a toast leaves the store, giving a renderer time to
//! play an exit transition. It either finishes on the spot or hands back a
//! future; in the latter case the toast stays in the snapshot, marked
//! leaving, until the future settles.

use super::timers::deadline_after;
use crate::domain::toast::{DismissReason, ToastId};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// A pre-dismiss hook reported failure.
///
/// The store logs it and removes the toast anyway.
#[derive(Debug, Clone, Error)]
#[error("before-dismiss hook failed: {0}")]
pub struct HookError(String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }

    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        Self(format!("hook panicked: {detail}"))
    }
}

/// What a hook invocation produced.
pub enum HookOutcome {
    /// The hook is finished; remove the toast now.
    Done,
    /// Remove the toast once this future settles.
    Pending(BoxFuture<'static, Result<(), HookError>>),
}

impl HookOutcome {
    /// Wraps a future as a pending outcome.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<(), HookError>> + Send + 'static,
    {
        HookOutcome::Pending(future.boxed())
    }
}

impl fmt::Debug for HookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookOutcome::Done => f.write_str("Done"),
            HookOutcome::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

type HookFn = dyn Fn(&ToastId, DismissReason) -> HookOutcome + Send + Sync;

/// Hook invoked with `(id, reason)` before a single toast is removed.
///
/// Bulk clears and capacity evictions never call it.
#[derive(Clone)]
pub struct BeforeDismiss(Arc<HookFn>);

impl BeforeDismiss {
    /// Builds a hook from a closure returning a [`HookOutcome`].
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&ToastId, DismissReason) -> HookOutcome + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    /// Builds a hook from an async closure. The toast is removed when the
    /// returned future completes, whether it succeeds or not.
    pub fn from_async<F, Fut>(hook: F) -> Self
    where
        F: Fn(&ToastId, DismissReason) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookError>> + Send + 'static,
    {
        Self::new(move |id, reason| HookOutcome::pending(hook(id, reason)))
    }

    /// Keeps every dismissed toast on screen for `delay` so its exit
    /// transition can play. A zero delay (reduced motion) removes at once.
    #[must_use]
    pub fn exit_delay(delay: Duration) -> Self {
        Self::new(move |_, _| {
            if delay.is_zero() {
                HookOutcome::Done
            } else {
                // Counted from the dismissal, not from the first poll.
                let deadline = deadline_after(delay);
                HookOutcome::pending(async move {
                    tokio::time::sleep_until(deadline).await;
                    Ok(())
                })
            }
        })
    }

    /// Runs the hook. A panic, whether in the call itself or in the
    /// returned future, is turned into a [`HookError`].
    pub(crate) fn invoke(
        &self,
        id: &ToastId,
        reason: DismissReason,
    ) -> Result<HookOutcome, HookError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (self.0)(id, reason)))
            .map_err(|payload| HookError::from_panic(payload.as_ref()))?;
        Ok(match outcome {
            HookOutcome::Done => HookOutcome::Done,
            HookOutcome::Pending(future) => HookOutcome::pending(async move {
                AssertUnwindSafe(future)
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|payload| Err(HookError::from_panic(payload.as_ref())))
            }),
        })
    }
}

impl fmt::Debug for BeforeDismiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BeforeDismiss(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn sync_hook_receives_id_and_reason() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hook = BeforeDismiss::new(move |id, reason| {
            sink.lock().unwrap().push((id.clone(), reason));
            HookOutcome::Done
        });

        let outcome = hook.invoke(&ToastId::new("a"), DismissReason::Auto);

        assert!(matches!(outcome, Ok(HookOutcome::Done)));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(ToastId::new("a"), DismissReason::Auto)]
        );
    }

    #[test]
    fn async_hook_yields_pending() {
        let hook = BeforeDismiss::from_async(|_, _| async { Ok(()) });
        let outcome = hook.invoke(&ToastId::new("a"), DismissReason::Manual);
        assert!(matches!(outcome, Ok(HookOutcome::Pending(_))));
    }

    #[test]
    fn zero_exit_delay_completes_immediately() {
        let hook = BeforeDismiss::exit_delay(Duration::ZERO);
        let outcome = hook.invoke(&ToastId::new("a"), DismissReason::Manual);
        assert!(matches!(outcome, Ok(HookOutcome::Done)));
    }

    #[tokio::test(start_paused = true)]
    async fn exit_delay_waits_for_the_transition() {
        let hook = BeforeDismiss::exit_delay(Duration::from_millis(180));
        let Ok(HookOutcome::Pending(future)) = hook.invoke(&ToastId::new("a"), DismissReason::Manual)
        else {
            panic!("expected a pending outcome");
        };

        let started = tokio::time::Instant::now();
        future.await.expect("exit delay never fails");
        assert!(started.elapsed() >= Duration::from_millis(180));
    }

    #[test]
    fn exit_delay_accepts_unbounded_duration() {
        let hook = BeforeDismiss::exit_delay(Duration::MAX);
        let outcome = hook.invoke(&ToastId::new("a"), DismissReason::Manual);
        assert!(matches!(outcome, Ok(HookOutcome::Pending(_))));
    }

    #[test]
    fn panicking_sync_hook_becomes_an_error() {
        let hook = BeforeDismiss::new(|_, _| panic!("renderer gone"));
        let err = hook
            .invoke(&ToastId::new("a"), DismissReason::Manual)
            .expect_err("panic is caught");
        assert!(err.message().contains("renderer gone"));
    }

    async fn exploding_transition() -> Result<(), HookError> {
        panic!("animation blew up")
    }

    #[tokio::test]
    async fn panicking_async_hook_resolves_to_an_error() {
        let hook = BeforeDismiss::from_async(|_, _| exploding_transition());
        let Ok(HookOutcome::Pending(future)) = hook.invoke(&ToastId::new("a"), DismissReason::Auto)
        else {
            panic!("expected a pending outcome");
        };

        let err = future.await.expect_err("panic is caught");
        assert!(err.message().contains("animation blew up"));
    }

    #[test]
    fn hook_error_keeps_message() {
        let err = HookError::new("animation aborted");
        assert_eq!(err.message(), "animation aborted");
        assert!(err.to_string().contains("animation aborted"));
    }
}
