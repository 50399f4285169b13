use std::collections::HashMap;
use std::fmt::Debug;
use std::future::poll_fn;
use std::hash::Hash;
use std::pin::{Pin, pin};
use std::sync::{Arc, Mutex};
use std::task::{Poll, Waker};

use tracing::trace;

/// Resolves many keys at once.
///
/// The returned future must not borrow the loader, so it can be driven by
/// [`DataLoader::wrap`] after the loader's lock is released.
pub trait BatchLoader: Send + 'static {
    type K: Hash + Eq + Clone + Send + 'static;
    type V: Clone + Send + 'static;

    /// Must return a value for every key in `keys`, otherwise the `load` calls
    /// waiting on the missing keys never complete.
    fn load_batch(
        &mut self,
        keys: Vec<Self::K>,
    ) -> impl Future<Output = HashMap<Self::K, Self::V>> + Send + 'static;
}

enum Entry<V> {
    Requested(Vec<Waker>),
    Ready(V),
}

struct LoaderInner<B: BatchLoader> {
    values: HashMap<B::K, Entry<B::V>>,
    pending_keys: HashMap<B::K, Vec<Waker>>,
    load_batch: B,
}

/// Per-request cache that collects `load` calls and resolves them in batches.
pub struct DataLoader<B: BatchLoader> {
    inner: Arc<Mutex<LoaderInner<B>>>,
}
impl<B: BatchLoader> Clone for DataLoader<B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

type BatchFuture<B> =
    Pin<Box<dyn Future<Output = HashMap<<B as BatchLoader>::K, <B as BatchLoader>::V>> + Send>>;

impl<B: BatchLoader> DataLoader<B>
where
    B::K: Debug,
{
    pub fn new(load_batch: B) -> Self {
        let inner = LoaderInner {
            load_batch,
            values: Default::default(),
            pending_keys: Default::default(),
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Resolves `key`. Only makes progress while polled inside [`DataLoader::wrap`].
    pub fn load(&self, key: B::K) -> impl Future<Output = B::V> {
        poll_fn(move |cx| {
            let mut inner = self.inner.lock().unwrap();

            let wakers = match inner.values.get_mut(&key) {
                Some(Entry::Ready(v)) => {
                    return Poll::Ready(v.clone());
                }
                Some(Entry::Requested(wakers)) => wakers,
                None => inner.pending_keys.entry(key.clone()).or_insert_with(|| {
                    trace!("queueing `{key:?}` for the next batch");
                    vec![]
                }),
            };

            wakers.push(cx.waker().clone());
            Poll::Pending
        })
    }

    /// Drops every resolved value, so later `load` calls fetch fresh data.
    ///
    /// Keys whose batch is still in flight are kept.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .values
            .retain(|_, entry| matches!(entry, Entry::Requested(_)));
    }

    pub async fn wrap<O>(&self, fut: impl Future<Output = O>) -> O {
        let mut currently_loading: Option<BatchFuture<B>> = None;

        let mut fut = pin!(fut);
        poll_fn(move |cx| {
            if let Some(currently_loading_fut) = &mut currently_loading {
                match currently_loading_fut.as_mut().poll(cx) {
                    Poll::Ready(v) => {
                        let mut inner = self.inner.lock().unwrap();

                        // Wake all the `load` calls waiting on this batch
                        for (k, v) in v {
                            if let Some(Entry::Requested(wakers)) =
                                inner.values.insert(k, Entry::Ready(v))
                            {
                                for w in wakers {
                                    w.wake();
                                }
                            }
                        }

                        currently_loading = None;
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            let res = fut.as_mut().poll(cx);
            if res.is_pending() {
                // We have polled the inner future once, during which it may have registered more
                // keys to load.
                let mut inner = self.inner.lock().unwrap();

                if !inner.pending_keys.is_empty() {
                    let mut keys = Vec::with_capacity(inner.pending_keys.len());
                    for (k, v) in std::mem::take(&mut inner.pending_keys) {
                        keys.push(k.clone());
                        inner.values.insert(k, Entry::Requested(v));
                    }

                    trace!(keys = keys.len(), "starting batch");
                    let load_future: BatchFuture<B> =
                        Box::pin(inner.load_batch.load_batch(keys));
                    currently_loading = Some(load_future);

                    // Wake immediately, to instruct the runtime to call `poll` again.
                    cx.waker().wake_by_ref();
                }
            }
            res
        })
        .await
    }
}
