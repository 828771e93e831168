//! Rock-to-material resolution
//!
//! Finds the stone blocks a rock's faux floors cost. First match wins:
//!
//! 1. a butcher product of the rock that is in the `StoneBlocks` category
//! 2. the exact-name override table (which may say "no blocks")
//! 3. for known third-party prefixes, `<prefix>Blocks<rest>`
//! 4. `Blocks<name>`
//!
//! Not finding blocks is a normal outcome; the caller decides what to do.

use crate::config::FauxFloorsConfig;
use crate::error::{Error, Result};
use faux_floors_core::{DefDatabase, DefId, ThingDef, STONE_BLOCKS};

/// Which resolution step produced the blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedVia {
    Byproduct,
    Override,
    Prefixed,
    Convention,
}

/// Stone blocks resolved for a rock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRef {
    pub blocks: DefId,
    pub via: ResolvedVia,
}

/// Resolves the stone blocks for a rock against the host database
#[derive(Debug, Clone, Copy)]
pub struct BlocksResolver<'a> {
    config: &'a FauxFloorsConfig,
}

impl<'a> BlocksResolver<'a> {
    pub fn new(config: &'a FauxFloorsConfig) -> Self {
        Self { config }
    }

    /// Resolve the blocks for `rock`
    ///
    /// `Ok(None)` means there are no blocks, so no floors for this rock.
    /// A rock without a name is a precondition violation.
    pub fn resolve<D: DefDatabase + ?Sized>(
        &self,
        db: &D,
        rock: &ThingDef,
    ) -> Result<Option<MaterialRef>> {
        let name = &rock.def_name;
        if name.is_empty() {
            return Err(Error::MissingRockName);
        }

        if let Some(blocks) = rock
            .butcher_products
            .iter()
            .map(|product| &product.thing_def)
            .find(|product| {
                db.thing_named(product.as_str())
                    .is_some_and(|thing| thing.in_category(STONE_BLOCKS))
            })
        {
            return Ok(Some(MaterialRef {
                blocks: blocks.clone(),
                via: ResolvedVia::Byproduct,
            }));
        }

        if let Some(entry) = self.config.blocks_override(name.as_str()) {
            return Ok(match entry {
                Some(blocks) => lookup(db, blocks.clone(), ResolvedVia::Override),
                None => {
                    log::debug!("[FauxStoneFloors] {} is mapped to no blocks", name);
                    None
                }
            });
        }

        if let Some((prefix, rest)) = self
            .config
            .known_prefixes()
            .iter()
            .find_map(|prefix| Some((prefix, name.as_str().strip_prefix(prefix.as_str())?)))
        {
            let blocks = DefId::new(format!("{}Blocks{}", prefix, rest));
            return Ok(lookup(db, blocks, ResolvedVia::Prefixed));
        }

        Ok(lookup(db, name.with_prefix("Blocks"), ResolvedVia::Convention))
    }
}

fn lookup<D: DefDatabase + ?Sized>(db: &D, blocks: DefId, via: ResolvedVia) -> Option<MaterialRef> {
    if db.thing_named(blocks.as_str()).is_some() {
        Some(MaterialRef { blocks, via })
    } else {
        log::debug!("[FauxStoneFloors] No thing named {}", blocks);
        None
    }
}
