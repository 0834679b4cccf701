//! Memoization of analysis results.
//!
//! `AnalysisCache` is a thread-safe store of finished [`AnalysisResult`]s
//! shared via `Arc`. It is purely an optimisation: every result can be
//! recomputed from its inputs.
//!
//! # Keying
//!
//! Entries are keyed by [`AnalysisKey`], which captures every input the
//! analysis reads: the product's id, name, numeric fields and features, the
//! competitor's exact price, weight, dimensions and features, and the role
//! view. Two requests share an entry only when their analyses are identical.
//!
//! # Eviction
//!
//! - Entries unused for longer than the max age are dropped
//! - Above capacity, the least frequently used entries go first, oldest
//!   access breaking ties
//!
//! # Example
//!
//! ```rust
//! use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
//! use compete_engine::cache::AnalysisCache;
//!
//! let cache = AnalysisCache::new();
//! let product = ProductSpec::new(
//!     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0, vec!["a".into()],
//! )
//! .with_id("p-1");
//! let competitor = CompetitorSpec::new(100.0, vec![]);
//!
//! let first = cache.get_or_analyze(&product, &competitor, None)?;
//! let second = cache.get_or_analyze(&product, &competitor, None)?;
//!
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(cache.stats().hits, 1);
//! # Ok::<(), compete_core::types::AnalysisError>(())
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use compete_core::types::{AnalysisError, CompetitorSpec, Dimensions, ProductSpec, RoleView};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::pipeline::{analyze, AnalysisResult};

/// Default number of cached results.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Default time an unused entry stays valid.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Fingerprint of an analysis request.
///
/// Floats are compared by bit pattern, so prices that differ by less than
/// a cent still get separate entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnalysisKey {
    product_id: String,
    product_name: String,
    product_bits: [u64; 7],
    product_features: Vec<String>,
    competitor_price_bits: u64,
    competitor_weight_bits: Option<u64>,
    competitor_dimension_bits: Option<[u64; 3]>,
    competitor_features: Vec<String>,
    role: Option<RoleView>,
}

fn dimension_bits(dimensions: &Dimensions) -> [u64; 3] {
    [
        dimensions.length.to_bits(),
        dimensions.width.to_bits(),
        dimensions.height.to_bits(),
    ]
}

impl AnalysisKey {
    /// Build the key for a request.
    pub fn new(product: &ProductSpec, competitor: &CompetitorSpec, role: Option<RoleView>) -> Self {
        let [length, width, height] = dimension_bits(&product.dimensions);
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            product_bits: [
                product.cost.to_bits(),
                product.weight.to_bits(),
                length,
                width,
                height,
                product.fixed_investment.to_bits(),
                product.estimated_monthly_sales.to_bits(),
            ],
            product_features: product.features.clone(),
            competitor_price_bits: competitor.price.to_bits(),
            competitor_weight_bits: competitor.weight.map(f64::to_bits),
            competitor_dimension_bits: competitor.dimensions.as_ref().map(dimension_bits),
            competitor_features: competitor.features.clone(),
            role,
        }
    }
}

struct CacheEntry {
    value: Arc<AnalysisResult>,
    last_access: Instant,
    last_tick: u64,
    access_count: u64,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<AnalysisKey, CacheEntry>,
    tick: u64,
}

impl CacheState {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

/// Hit/miss counters and occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that had to compute
    pub misses: u64,
    /// Live entries
    pub entries: usize,
    /// Maximum entries
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, 0 when there were none.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Thread-safe LFU cache of analysis results.
pub struct AnalysisCache {
    state: RwLock<CacheState>,
    capacity: usize,
    max_age: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AnalysisCache {
    /// Cache with [`DEFAULT_CACHE_CAPACITY`] and [`DEFAULT_MAX_AGE`].
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_AGE)
    }

    /// Cache with explicit limits. A capacity of 0 is treated as 1.
    pub fn with_limits(capacity: usize, max_age: Duration) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            capacity: capacity.max(1),
            max_age,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached result for `key`, if present and fresh.
    pub fn get(&self, key: &AnalysisKey) -> Option<Arc<AnalysisResult>> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let tick = state.next_tick();
        let max_age = self.max_age;

        let expired = state
            .entries
            .get(key)
            .is_some_and(|entry| entry.last_access.elapsed() >= max_age);
        if expired {
            state.entries.remove(key);
        }

        let fresh = state.entries.get_mut(key).map(|entry| {
            entry.access_count += 1;
            entry.last_access = Instant::now();
            entry.last_tick = tick;
            Arc::clone(&entry.value)
        });

        match fresh {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(product_id = %key.product_id, "analysis cache hit");
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(product_id = %key.product_id, "analysis cache miss");
                None
            }
        }
    }

    /// Store `value` under `key`, evicting as needed.
    ///
    /// If another thread stored the same key first, its value is kept and
    /// returned.
    pub fn insert(&self, key: AnalysisKey, value: AnalysisResult) -> Arc<AnalysisResult> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let tick = state.next_tick();

        if let Some(existing) = state.entries.get(&key) {
            if existing.last_access.elapsed() < self.max_age {
                return Arc::clone(&existing.value);
            }
        }

        let value = Arc::new(value);
        state.entries.insert(
            key,
            CacheEntry {
                value: Arc::clone(&value),
                last_access: Instant::now(),
                last_tick: tick,
                access_count: 1,
            },
        );
        self.evict(&mut state);
        value
    }

    /// Cached analysis, or run [`analyze`] and cache the result.
    ///
    /// Errors are returned as-is and never cached.
    pub fn get_or_analyze(
        &self,
        product: &ProductSpec,
        competitor: &CompetitorSpec,
        role: Option<RoleView>,
    ) -> Result<Arc<AnalysisResult>, AnalysisError> {
        let key = AnalysisKey::new(product, competitor, role);
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let result = analyze(product, competitor, role)?;
        Ok(self.insert(key, result))
    }

    /// Parallel [`get_or_analyze`](Self::get_or_analyze) over several competitors.
    ///
    /// Results come back in input order. Duplicate competitors in one call
    /// may both miss if they race; later calls hit.
    pub fn get_or_analyze_many(
        &self,
        product: &ProductSpec,
        competitors: &[CompetitorSpec],
        role: Option<RoleView>,
    ) -> Vec<Result<Arc<AnalysisResult>, AnalysisError>> {
        competitors
            .par_iter()
            .map(|competitor| self.get_or_analyze(product, competitor, role))
            .collect()
    }

    fn evict(&self, state: &mut CacheState) {
        let max_age = self.max_age;
        state
            .entries
            .retain(|_, entry| entry.last_access.elapsed() < max_age);

        let excess = state.entries.len().saturating_sub(self.capacity);
        if excess == 0 {
            return;
        }

        let mut ranked: Vec<(u64, u64, AnalysisKey)> = state
            .entries
            .iter()
            .map(|(key, entry)| (entry.access_count, entry.last_tick, key.clone()))
            .collect();
        ranked.sort_unstable_by_key(|&(count, tick, _)| (count, tick));

        for (_, _, key) in ranked.into_iter().take(excess) {
            state.entries.remove(&key);
        }
        debug!(evicted = excess, "analysis cache evicted entries");
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }

    /// Number of stored entries, including any not yet expired by a lookup.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.capacity,
        }
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new()
    }
}
