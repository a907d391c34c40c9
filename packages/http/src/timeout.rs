//! Race a future against a timer.
//!
//! Whichever side loses is dropped. For a transport future that means the
//! in-flight request is abandoned and its connection released.

use std::future::Future;
use std::time::Duration;

/// Resolve to `Some(output)` if `future` completes within `limit`, or `None`
/// once the timer fires first.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn within<F: Future>(limit: Duration, future: F) -> Option<F::Output> {
    tokio::time::timeout(limit, future).await.ok()
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn within<F: Future>(limit: Duration, future: F) -> Option<F::Output> {
    use futures_util::future::{select, Either};

    let future = std::pin::pin!(future);
    let timer = std::pin::pin!(futures_timer::Delay::new(limit));
    match select(future, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
