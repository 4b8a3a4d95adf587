//! Keyed query cache with explicit scope invalidation.
//!
//! DESIGN
//! ======
//! Results are cached under a `QueryKey` whose first segment is its scope.
//! Mutations do not bump a counter inside the key; they call
//! [`Invalidate::invalidate`] for the scopes they affect, which drops those
//! entries and notifies every live query so it re-resolves (cache hit or
//! refetch).
//!
//! A fetch that started before an invalidation must not repopulate the
//! cache with pre-mutation data, so inserts are checked against the scope
//! generation captured when the fetch began.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Ordered key segments; the first is the invalidation scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(scope: impl Into<String>) -> Self {
        Self(vec![scope.into()])
    }

    #[must_use]
    pub fn with(mut self, segment: impl fmt::Display) -> Self {
        self.0.push(segment.to_string());
        self
    }

    pub fn scope(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Serialized query results keyed by [`QueryKey`].
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, serde_json::Value>,
    generations: HashMap<String, u64>,
}

impl QueryCache {
    pub fn get(&self, key: &QueryKey) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Typed lookup. An entry that no longer decodes as `T` counts as a miss.
    pub fn get_as<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.entries.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn insert(&mut self, key: QueryKey, value: serde_json::Value) {
        self.entries.insert(key, value);
    }

    /// Store only if the key's scope has not been invalidated since `generation`.
    /// Returns whether the value was stored.
    pub fn insert_if_current(&mut self, key: QueryKey, generation: u64, value: serde_json::Value) -> bool {
        if self.generation(key.scope()) != generation {
            return false;
        }
        self.insert(key, value);
        true
    }

    /// Drop every entry in `scope` and advance its generation.
    /// Returns the number of entries removed.
    pub fn invalidate(&mut self, scope: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.scope() != scope);
        *self.generations.entry(scope.to_owned()).or_default() += 1;
        before - self.entries.len()
    }

    /// Drop everything. Generations advance so in-flight fetches are discarded.
    pub fn clear(&mut self) {
        for key in self.entries.keys() {
            self.generations.entry(key.scope().to_owned()).or_default();
        }
        self.entries.clear();
        for generation in self.generations.values_mut() {
            *generation += 1;
        }
    }

    pub fn generation(&self, scope: &str) -> u64 {
        self.generations.get(scope).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Explicit cache-invalidation signal raised after a successful mutation.
pub trait Invalidate {
    fn invalidate(&self, scope: &str);

    fn invalidate_all(&self, scopes: &[&str]) {
        for scope in scopes {
            self.invalidate(scope);
        }
    }
}

impl Invalidate for RefCell<QueryCache> {
    fn invalidate(&self, scope: &str) {
        self.borrow_mut().invalidate(scope);
    }
}

/// Reactive handle over the shared [`QueryCache`], provided via context.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    invalidated: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self { cache: StoredValue::new(QueryCache::default()), invalidated: RwSignal::new(0) }
    }

    /// Drop all cached results, e.g. when the session ends.
    pub fn clear(&self) {
        self.cache.update_value(QueryCache::clear);
        self.invalidated.update(|n| *n += 1);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Invalidate for QueryClient {
    fn invalidate(&self, scope: &str) {
        let removed = self.cache.try_update_value(|c| c.invalidate(scope)).unwrap_or(0);
        log::debug!("query scope invalidated: scope={scope} removed={removed}");
        self.invalidated.update(|n| *n += 1);
    }
}

/// Cache access needed to resolve one query. Borrows are never held across
/// the fetch, so an invalidation can land while it is in flight.
pub trait QueryStore {
    /// Cached value for `key` (if it decodes as `T`) and the current
    /// generation of its scope.
    fn lookup<T: DeserializeOwned>(&self, key: &QueryKey) -> (Option<T>, u64);

    /// See [`QueryCache::insert_if_current`].
    fn store_if_current(&self, key: QueryKey, generation: u64, value: serde_json::Value) -> bool;
}

impl QueryStore for RefCell<QueryCache> {
    fn lookup<T: DeserializeOwned>(&self, key: &QueryKey) -> (Option<T>, u64) {
        let cache = self.borrow();
        (cache.get_as(key), cache.generation(key.scope()))
    }

    fn store_if_current(&self, key: QueryKey, generation: u64, value: serde_json::Value) -> bool {
        self.borrow_mut().insert_if_current(key, generation, value)
    }
}

impl QueryStore for QueryClient {
    fn lookup<T: DeserializeOwned>(&self, key: &QueryKey) -> (Option<T>, u64) {
        self.cache
            .try_with_value(|c| (c.get_as(key), c.generation(key.scope())))
            .unwrap_or((None, 0))
    }

    fn store_if_current(&self, key: QueryKey, generation: u64, value: serde_json::Value) -> bool {
        self.cache
            .try_update_value(|c| c.insert_if_current(key, generation, value))
            .unwrap_or(false)
    }
}

/// Serve `key` from `store`, or run `fetch` and cache its result.
///
/// The scope generation is captured before fetching; if the scope is
/// invalidated meanwhile the result is still returned but not cached.
/// `on_fetching` is told when a real fetch (not a cache hit) starts and ends.
pub async fn resolve_query<T, S, F, Fut>(
    store: &S,
    key: QueryKey,
    fetch: F,
    on_fetching: impl Fn(bool),
) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
    S: QueryStore,
    F: FnOnce(QueryKey) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let (cached, generation) = store.lookup::<T>(&key);
    if let Some(value) = cached {
        return Ok(value);
    }
    on_fetching(true);
    let result = fetch(key.clone()).await;
    on_fetching(false);
    match &result {
        Ok(value) => match serde_json::to_value(value) {
            Ok(json) => {
                if !store.store_if_current(key.clone(), generation, json) {
                    log::debug!("discarding superseded result for {key}");
                }
            }
            Err(err) => log::warn!("query result for {key} not cacheable: {err}"),
        },
        Err(err) => log::warn!("query {key} failed: {err}"),
    }
    result
}

/// Reactive query result plus an in-flight flag.
pub struct Query<T: 'static> {
    /// `None` until the first resolution.
    pub data: LocalResource<Result<T, ApiError>>,
    /// True while a network fetch (not a cache hit) is running.
    pub fetching: RwSignal<bool>,
}

/// Resolve `key` from the cache or by calling `fetch`.
///
/// Re-runs whenever a signal read inside `key` changes or any scope is
/// invalidated through the same [`QueryClient`].
pub fn use_query<T, K, F, Fut>(client: QueryClient, key_fn: K, fetch: F) -> Query<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(QueryKey) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetching = RwSignal::new(false);
    let fetch = Rc::new(fetch);
    let data = LocalResource::new(move || {
        let key = key_fn();
        client.invalidated.track();
        let fetch = Rc::clone(&fetch);
        async move { resolve_query(&client, key, |k| (*fetch)(k), |busy| fetching.set(busy)).await }
    });
    Query { data, fetching }
}
