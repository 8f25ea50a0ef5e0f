//! Single-flight async cache.
//!
//! Concurrent callers asking for the same key share one in-flight computation.
//! Successful results are kept (optionally for a bounded time); failures are
//! dropped so the next caller retries. With a TTL, expired entries are swept
//! out at most once per TTL period, on the next call to [`ChokePoint::get`].

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub struct ChokePoint<K, V, E> {
    cache: Arc<DashMap<K, CacheEntry<V, E>>>,
    ttl: Option<Duration>,
    last_sweep: Mutex<Instant>,
}

enum CacheEntry<V, E> {
    // Shared future for a request that is still running
    Computing(Shared<BoxFuture<'static, Result<V, E>>>),
    Completed { value: V, stored_at: Instant },
}

impl<K, V, E> ChokePoint<K, V, E>
where
    K: Clone + Eq + Send + Sync + Hash + 'static,
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Completed values never expire.
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            ttl: None,
            last_sweep: Mutex::new(Instant::now()),
        }
    }

    /// Completed values are recomputed once older than `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::new()
        }
    }

    fn is_expired(&self, stored_at: Instant) -> bool {
        self.ttl.is_some_and(|ttl| stored_at.elapsed() >= ttl)
    }

    /// Returns the cached value for `key`, joining an in-flight computation
    /// if there is one, or drives `compute` otherwise.
    ///
    /// `compute` is dropped unpolled when another caller already owns the key.
    pub async fn get<Fut>(&self, key: K, compute: Fut) -> Result<V, E>
    where
        Fut: Future<Output = Result<V, E>> + Send + 'static,
    {
        self.sweep_if_due();

        let future = match self.cache.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                let running = match occupied.get() {
                    CacheEntry::Completed { value, stored_at } if !self.is_expired(*stored_at) => {
                        return Ok(value.clone());
                    }
                    CacheEntry::Computing(future) => Some(future.clone()),
                    CacheEntry::Completed { .. } => None,
                };
                match running {
                    Some(future) => future,
                    None => {
                        let future = self.wrap(key, compute);
                        occupied.insert(CacheEntry::Computing(future.clone()));
                        future
                    }
                }
            }
            Entry::Vacant(vacant) => {
                let future = self.wrap(key, compute);
                vacant.insert(CacheEntry::Computing(future.clone()));
                future
            }
        };

        future.await
    }

    fn wrap<Fut>(&self, key: K, compute: Fut) -> Shared<BoxFuture<'static, Result<V, E>>>
    where
        Fut: Future<Output = Result<V, E>> + Send + 'static,
    {
        let cache = Arc::clone(&self.cache);
        async move {
            let result = compute.await;
            match &result {
                Ok(value) => {
                    cache.insert(
                        key,
                        CacheEntry::Completed {
                            value: value.clone(),
                            stored_at: Instant::now(),
                        },
                    );
                }
                Err(_) => {
                    cache.remove(&key);
                }
            }
            result
        }
        .boxed()
        .shared()
    }

    /// Purges expired entries when a full TTL has passed since the last
    /// sweep. Callers that find another sweep in progress skip it.
    fn sweep_if_due(&self) {
        let Some(ttl) = self.ttl else {
            return;
        };
        let Ok(mut last_sweep) = self.last_sweep.try_lock() else {
            return;
        };
        if last_sweep.elapsed() < ttl {
            return;
        }
        *last_sweep = Instant::now();
        drop(last_sweep);
        self.purge_expired();
    }

    /// Drops completed entries older than the TTL. In-flight entries stay.
    pub fn purge_expired(&self) {
        self.cache.retain(|_, entry| match entry {
            CacheEntry::Completed { stored_at, .. } => !self.is_expired(*stored_at),
            CacheEntry::Computing(_) => true,
        });
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<K, V, E> Default for ChokePoint<K, V, E>
where
    K: Clone + Eq + Send + Sync + Hash + 'static,
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(
        calls: &Arc<AtomicUsize>,
        result: Result<String, String>,
    ) -> impl Future<Output = Result<String, String>> + Send + 'static {
        let calls = Arc::clone(calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            result
        }
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_computation() {
        let choke: ChokePoint<&str, String, String> = ChokePoint::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            choke.get("luz", counted(&calls, Ok("light".into()))),
            choke.get("luz", counted(&calls, Ok("other".into()))),
        );

        assert_eq!(a.unwrap(), "light");
        assert_eq!(b.unwrap(), "light");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(choke.len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let choke: ChokePoint<&str, String, String> = ChokePoint::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = choke.get("mar", counted(&calls, Err("offline".into()))).await;
        assert_eq!(first, Err("offline".to_string()));
        assert!(choke.is_empty());

        let second = choke.get("mar", counted(&calls, Ok("sea".into()))).await;
        assert_eq!(second.unwrap(), "sea");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_values_are_recomputed() {
        let choke: ChokePoint<&str, String, String> =
            ChokePoint::with_ttl(Duration::from_millis(20));
        let calls = Arc::new(AtomicUsize::new(0));

        choke.get("sol", counted(&calls, Ok("sun".into()))).await.unwrap();
        choke.get("sol", counted(&calls, Ok("sun".into()))).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(40)).await;

        choke.get("sol", counted(&calls, Ok("sun".into()))).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let choke: ChokePoint<&str, String, String> =
            ChokePoint::with_ttl(Duration::from_millis(5));
        choke.get("pan", async { Ok("bread".to_string()) }).await.unwrap();
        assert_eq!(choke.len(), 1);
        tokio::time::sleep(Duration::from_millis(20)).await;
        choke.purge_expired();
        assert!(choke.is_empty());
    }

    #[tokio::test]
    async fn test_expired_entries_are_swept_by_later_gets() {
        let choke: ChokePoint<String, String, String> =
            ChokePoint::with_ttl(Duration::from_millis(50));
        for n in 0..500 {
            choke
                .get(format!("palabra{n}"), async move { Ok(format!("word{n}")) })
                .await
                .unwrap();
        }
        assert!(choke.len() > 1);

        tokio::time::sleep(Duration::from_millis(80)).await;
        let fresh = choke
            .get("nueva".to_string(), async { Ok("new".to_string()) })
            .await;
        assert_eq!(fresh.unwrap(), "new");
        assert_eq!(choke.len(), 1);
    }

    #[tokio::test]
    async fn test_without_ttl_nothing_is_swept() {
        let choke: ChokePoint<&str, String, String> = ChokePoint::new();
        choke.get("pan", async { Ok("bread".to_string()) }).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        choke.get("vino", async { Ok("wine".to_string()) }).await.unwrap();
        assert_eq!(choke.len(), 2);
    }
}
