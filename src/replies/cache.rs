use std::future::Future;

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};
use tracing::info;

/// Memoizes the result of a remote fetch until a time-to-live runs out.
///
/// The bot keeps two of these: one over the spreadsheet column and one
/// over the sticker collection, with different TTLs. The state sits
/// behind a mutex held across the refresh, so concurrent messages
/// can't race two fetches for the same data.
#[derive(Debug)]
pub struct TtlCache<T> {
    label: &'static str,
    ttl: Duration,
    state: Mutex<State<T>>,
}

#[derive(Debug)]
struct State<T> {
    last_refreshed: Option<Instant>,
    value: Option<T>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(label: &'static str, ttl: Duration) -> Self {
        Self {
            label,
            ttl,
            state: Mutex::new(State {
                last_refreshed: None,
                value: None,
            }),
        }
    }

    /// Returns the cached value, refreshing it first if the TTL has
    /// elapsed or nothing has been fetched yet.
    ///
    /// A failed refresh propagates the fetch error and leaves both the
    /// value and the timestamp untouched, so the next call tries the
    /// fetch again rather than serving the stale value for another TTL.
    pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut state = self.state.lock().await;

        if let (Some(at), Some(value)) = (state.last_refreshed, &state.value) {
            if at.elapsed() < self.ttl {
                return Ok(value.clone());
            }
        }

        info!(cache = self.label, "refreshing cached value");

        let value = refresh().await?;
        state.value = Some(value.clone());
        state.last_refreshed = Some(Instant::now());

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_always_fetches() {
        let cache = TtlCache::new("rows", Duration::from_secs(3600));
        let fetches = AtomicUsize::new(0);

        let value = cache
            .get_or_refresh(|| async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>(vec!["row1".to_owned()])
            })
            .await
            .unwrap();

        assert_eq!(value, vec!["row1"]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn refreshes_only_after_ttl_elapses() {
        let cache = TtlCache::new("rows", Duration::from_secs(5));
        let fetches = AtomicUsize::new(0);

        let fetch = || {
            let n = fetches.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok::<_, Infallible>(if n == 0 {
                    vec!["row1".to_owned(), "row2".to_owned(), "row3".to_owned()]
                } else {
                    vec!["rowA".to_owned()]
                })
            }
        };

        let first = cache.get_or_refresh(fetch).await.unwrap();
        assert_eq!(first, vec!["row1", "row2", "row3"]);

        tokio::time::advance(Duration::from_secs(4)).await;
        let cached = cache.get_or_refresh(fetch).await.unwrap();
        assert_eq!(cached, first);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(6)).await;
        let refreshed = cache.get_or_refresh(fetch).await.unwrap();
        assert_eq!(refreshed, vec!["rowA"]);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refresh_keeps_stale_value_and_retries() {
        let cache = TtlCache::new("rows", Duration::from_secs(5));

        cache
            .get_or_refresh(|| async { Ok::<_, &str>(vec!["row1".to_owned()]) })
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(10)).await;

        let err = cache
            .get_or_refresh(|| async { Err::<Vec<String>, _>("fetch failed") })
            .await
            .unwrap_err();
        assert_eq!(err, "fetch failed");

        // the failure did not advance the refresh timestamp, so the
        // very next call fetches again instead of waiting out a TTL
        let fetched = cache
            .get_or_refresh(|| async { Ok::<_, &str>(vec!["rowA".to_owned()]) })
            .await
            .unwrap();
        assert_eq!(fetched, vec!["rowA"]);
    }

    #[tokio::test(start_paused = true)]
    #[tracing_test::traced_test]
    async fn logs_when_refreshing() {
        let cache = TtlCache::new("rows", Duration::from_secs(5));

        cache
            .get_or_refresh(|| async { Ok::<_, Infallible>(vec!["row1".to_owned()]) })
            .await
            .unwrap();

        assert!(logs_contain("refreshing cached value"));
    }
}
