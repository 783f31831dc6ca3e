use crate::driver::Driver;
use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Delay between two probes of a condition
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Poll `condition` until it yields a value or `timeout` elapses.
///
/// A probe that errors counts as "not yet". Each probe is bounded by the time
/// left, so a hung probe cannot stretch the wait past the deadline. The
/// condition is always probed at least once.
pub async fn await_condition<T, F, Fut>(waited_for: &str, timeout: Duration, mut condition: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let deadline = Instant::now() + timeout;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match tokio::time::timeout(remaining, condition()).await {
            Ok(Ok(Some(value))) => return Ok(value),
            Ok(Ok(None)) => {}
            Ok(Err(e)) => tracing::debug!("Probe for {} failed (retrying): {}", waited_for, e),
            Err(_) => tracing::debug!("Probe for {} hit the deadline", waited_for),
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(Error::Timeout {
                waited_for: waited_for.to_string(),
                timeout,
            });
        }
        tokio::time::sleep(POLL_INTERVAL.min(deadline - now)).await;
    }
}

/// Wait until an element matching `selector` is present
pub async fn wait_for_element(driver: &dyn Driver, selector: &str, timeout: Duration) -> Result<()> {
    await_condition(selector, timeout, move || async move {
        Ok::<_, Error>(driver.is_present(selector).await?.then_some(()))
    })
    .await
}

/// Wait until any of `selectors` is present; returns the first one found,
/// checking in the given order
pub async fn wait_for_any<'s>(
    driver: &dyn Driver,
    selectors: &[&'s str],
    timeout: Duration,
) -> Result<&'s str> {
    let waited_for = selectors.join(" or ");

    await_condition(&waited_for, timeout, move || async move {
        for selector in selectors {
            if driver.is_present(selector).await? {
                return Ok(Some(*selector));
            }
        }
        Ok::<_, Error>(None)
    })
    .await
}
