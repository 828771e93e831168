//! Short-Hash Allocation
//!
//! Every generated definition needs a 16-bit short hash that no other
//! definition of the same category uses: neither one already loaded by the
//! host, nor one generated earlier in the same pass.
//!
//! # Determinism
//!
//! The probe starts from the host's stable hash of the definition name and
//! walks upwards one value at a time (wrapping at `u16::MAX`), skipping
//! zero. Given the same names in the same order and the same pre-existing
//! host hashes, two passes hand out identical values. Saved games refer to
//! definitions by these values, so the seed function, probe direction and
//! wraparound must not change.
//!
//! # Example
//!
//! ```
//! use faux_floors_core::{DefCategory, DefId, MemoryDatabase};
//! use faux_floors_gen::hash::ShortHashAllocator;
//!
//! let db = MemoryDatabase::new();
//! let mut allocator = ShortHashAllocator::new();
//!
//! let a = allocator.allocate(&db, DefCategory::Terrain, &DefId::new("Granite_RoughFaux")).unwrap();
//! let b = allocator.allocate(&db, DefCategory::Terrain, &DefId::new("Granite_RoughFaux")).unwrap();
//! assert_ne!(a, 0);
//! assert_ne!(a, b); // the second request probes past the first
//! ```

use crate::config::DEFAULT_SATURATION_WARNING;
use faux_floors_core::hash::short_hash_seed;
use faux_floors_core::{DefCategory, DefDatabase, DefId, Error, ShortHash};
use std::collections::{HashMap, HashSet};

/// Allocates collision-free short hashes for one generation pass
///
/// Holds the per-category set of hashes handed out so far. Create one per
/// pass; state is never shared between passes.
#[derive(Debug)]
pub struct ShortHashAllocator {
    given: HashMap<DefCategory, HashSet<ShortHash>>,
    warn_after: u32,
}

impl ShortHashAllocator {
    pub fn new() -> Self {
        Self::with_warning_after(DEFAULT_SATURATION_WARNING)
    }

    /// Allocator that warns once a single allocation needs more than
    /// `probes` steps
    pub fn with_warning_after(probes: u32) -> Self {
        Self {
            given: HashMap::new(),
            warn_after: probes,
        }
    }

    /// Pick a short hash for `name` and record it as taken
    ///
    /// Fails only when every non-zero value in `category` is taken.
    pub fn allocate<D: DefDatabase + ?Sized>(
        &mut self,
        db: &D,
        category: DefCategory,
        name: &DefId,
    ) -> Result<ShortHash, Error> {
        log::debug!("[FauxStoneFloors] Generating hash for {}", name);

        let given = self.given.entry(category).or_default();
        let mut candidate = short_hash_seed(db.stable_string_hash(name.as_str()));
        let mut probes: u32 = 0;

        while candidate == 0 || db.short_hash_taken(category, candidate) || given.contains(&candidate)
        {
            candidate = candidate.wrapping_add(1);
            probes += 1;
            if probes == self.warn_after.saturating_add(1) {
                log::warn!(
                    "[FauxStoneFloors] Short hashes are saturated: {} probes for {} {}. There are probably too many defs.",
                    probes,
                    category,
                    name
                );
            }
            // Back at the seed: every value has been tried
            if probes > u16::MAX as u32 {
                return Err(Error::ShortHashesExhausted(category));
            }
        }

        if cfg!(debug_assertions) {
            if let Some(existing) = db.def_by_short_hash(category, candidate) {
                log::error!(
                    "[FauxStoneFloors] Hash {} already exists on {} but was also generated for {}",
                    candidate,
                    existing,
                    name
                );
            }
        }

        given.insert(candidate);
        Ok(candidate)
    }

    /// Whether `hash` was handed out by this allocator
    pub fn is_given(&self, category: DefCategory, hash: ShortHash) -> bool {
        self.given
            .get(&category)
            .is_some_and(|set| set.contains(&hash))
    }

    /// Number of hashes handed out in `category`
    pub fn given_count(&self, category: DefCategory) -> usize {
        self.given.get(&category).map_or(0, HashSet::len)
    }
}

impl Default for ShortHashAllocator {
    fn default() -> Self {
        Self::new()
    }
}
