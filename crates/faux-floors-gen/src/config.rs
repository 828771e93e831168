//! Generation configuration
//!
//! Controls which rocks are considered, how their stone blocks are looked
//! up, and who assigns short hashes. The floor attribute table itself is
//! fixed and not part of the configuration.

use crate::error::Result;
use faux_floors_core::DefId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Probe count after which the allocator warns about a saturated hash space
pub const DEFAULT_SATURATION_WARNING: u32 = 5000;

/// Who assigns short hashes to generated definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShortHashMode {
    /// Allocate during synthesis, before registration
    #[default]
    Inline,
    /// Register with hash 0 and let the host assign one
    Host,
}

/// Configuration for faux floor generation
///
/// # Example
///
/// ```
/// use faux_floors_gen::{FauxFloorsConfig, ShortHashMode};
///
/// let config = FauxFloorsConfig::default();
/// assert!(config.is_ignored("GU_AncientMetals"));
/// assert_eq!(config.short_hashes(), ShortHashMode::Inline);
///
/// let config = FauxFloorsConfig::from_ron_str(r#"(
///     ignored_rocks: ["Marble"],
///     short_hashes: Host,
/// )"#).unwrap();
/// assert!(config.is_ignored("Marble"));
/// assert!(!config.is_ignored("GU_AncientMetals"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FauxFloorsConfig {
    /// Rocks that never get floors
    ignored_rocks: Vec<DefId>,
    /// Exact-name block overrides; `None` means "no floor for this rock"
    blocks_overrides: IndexMap<DefId, Option<DefId>>,
    /// Third-party content prefixes that wrap the `Blocks` token
    known_prefixes: Vec<String>,
    /// Owning content pack for generated defs, instead of the rock's own
    content_pack: Option<String>,
    short_hashes: ShortHashMode,
    saturation_warning_after: u32,
}

impl FauxFloorsConfig {
    /// Parse a configuration from RON; omitted fields keep their defaults
    pub fn from_ron_str(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn is_ignored(&self, rock: &str) -> bool {
        self.ignored_rocks.iter().any(|r| r == rock)
    }

    /// Override entry for `rock`: `None` when there is no entry,
    /// `Some(None)` when the rock is mapped to "no blocks"
    pub fn blocks_override(&self, rock: &str) -> Option<Option<&DefId>> {
        self.blocks_overrides.get(rock).map(Option::as_ref)
    }

    pub fn known_prefixes(&self) -> &[String] {
        &self.known_prefixes
    }

    pub fn content_pack(&self) -> Option<&str> {
        self.content_pack.as_deref()
    }

    pub fn short_hashes(&self) -> ShortHashMode {
        self.short_hashes
    }

    pub fn saturation_warning_after(&self) -> u32 {
        self.saturation_warning_after
    }

    pub fn ignore_rock(mut self, rock: impl Into<DefId>) -> Self {
        self.ignored_rocks.push(rock.into());
        self
    }

    /// Map `rock` to `blocks`, or to no blocks at all with `None`
    pub fn override_blocks(mut self, rock: impl Into<DefId>, blocks: Option<DefId>) -> Self {
        self.blocks_overrides.insert(rock.into(), blocks);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.known_prefixes.push(prefix.into());
        self
    }

    pub fn with_content_pack(mut self, pack: impl Into<String>) -> Self {
        self.content_pack = Some(pack.into());
        self
    }

    pub fn with_short_hashes(mut self, mode: ShortHashMode) -> Self {
        self.short_hashes = mode;
        self
    }

    pub fn with_saturation_warning_after(mut self, probes: u32) -> Self {
        self.saturation_warning_after = probes;
        self
    }
}

impl Default for FauxFloorsConfig {
    fn default() -> Self {
        let mut blocks_overrides = IndexMap::new();
        // Ancient metal walls have no stone blocks of their own
        blocks_overrides.insert(DefId::new("GU_AncientMetals"), None);

        Self {
            ignored_rocks: vec![DefId::new("GU_AncientMetals")],
            blocks_overrides,
            known_prefixes: vec!["GU_".to_string()],
            content_pack: None,
            short_hashes: ShortHashMode::Inline,
            saturation_warning_after: DEFAULT_SATURATION_WARNING,
        }
    }
}
