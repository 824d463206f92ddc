//! Short-lived reuse of the last good grid across detection dropouts.
//!
//! Policy per processed frame:
//! - detection succeeded: store it, reset the age, use it;
//! - detection failed, cache present: bump the age and reuse the cached grid
//!   while `age < max_age`, otherwise drop the cache and report a miss.
//!
//! With the default `max_age = 5`, four consecutive misses are bridged and the
//! fifth clears the cache.
use crate::types::Grid;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheOptions {
    pub max_age: u32,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { max_age: 5 }
    }
}

/// Where the grid used for a frame came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum GridSource {
    Detected,
    /// Reused after `age` consecutive misses.
    Cached { age: u32 },
    Missing,
}

/// Owned cache state; one instance per camera stream.
#[derive(Clone, Debug, Default)]
pub struct GridCache {
    opts: CacheOptions,
    grid: Option<Grid>,
    age: u32,
}

impl GridCache {
    pub fn new(opts: CacheOptions) -> Self {
        Self {
            opts,
            grid: None,
            age: 0,
        }
    }

    /// Apply this frame's detection outcome and return the grid to use.
    pub fn update(&mut self, detected: Option<Grid>) -> (Option<Grid>, GridSource) {
        if let Some(grid) = detected {
            self.grid = Some(grid.clone());
            self.age = 0;
            return (Some(grid), GridSource::Detected);
        }
        let Some(cached) = &self.grid else {
            return (None, GridSource::Missing);
        };
        self.age += 1;
        if self.age < self.opts.max_age {
            return (Some(cached.clone()), GridSource::Cached { age: self.age });
        }
        debug!("GridCache expired after {} misses", self.age);
        self.clear();
        (None, GridSource::Missing)
    }

    pub fn clear(&mut self) {
        self.grid = None;
        self.age = 0;
    }

    pub fn cached(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}
