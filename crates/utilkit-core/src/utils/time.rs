use std::time::Duration;

/// Wait at least `ms` milliseconds before resuming the caller.
///
/// # Examples
/// ```
/// # #[tokio::main]
/// # async fn main() {
/// use utilkit_core::utils::time::sleep;
/// sleep(10).await;
/// # }
/// ```
pub async fn sleep(ms: u64) {
    log::debug!("sleeping for {}ms", ms);
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_sleep_waits_at_least_duration() {
        let started = Instant::now();
        sleep(50).await;
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_sleep_zero_returns() {
        sleep(0).await;
    }
}
