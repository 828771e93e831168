//! Top-level generation pass
//!
//! Runs synthesis against the host, registers every generated definition
//! as an implied def, then asks the host to resolve name references under
//! the `Floors` designation category and to drop its cached wealth data.

use crate::config::FauxFloorsConfig;
use crate::floor::FLOORS_CATEGORY;
use crate::synth::{SkippedRock, Synthesizer};
use faux_floors_core::{DefId, Host};

/// What a generation pass did
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Natural rocks seen, ignored ones included
    pub rocks_considered: usize,
    pub rocks_ignored: usize,
    /// Rocks that got a full floor set
    pub floor_sets: usize,
    pub skipped: Vec<SkippedRock>,
    /// Definitions the host accepted
    pub registered: usize,
    /// Definitions the host refused
    pub rejected: usize,
}

/// Generate faux stone floors for every eligible rock in `host`
///
/// Never fails: rocks that cannot get floors are logged and listed in the
/// report, and the rest of the pass carries on.
pub fn add_implied_faux_floors<H: Host + ?Sized>(
    host: &mut H,
    config: &FauxFloorsConfig,
) -> GenerationReport {
    let synthesis = Synthesizer::new(config).synthesize(&*host);

    let mut report = GenerationReport {
        rocks_considered: synthesis.considered,
        rocks_ignored: synthesis.ignored,
        floor_sets: synthesis.sets.len(),
        skipped: synthesis.skipped,
        ..GenerationReport::default()
    };

    for def in synthesis.sets.into_iter().flat_map(|set| set.into_implied_defs()) {
        let name = def.def_name().clone();
        match host.add_implied_def(def) {
            Ok(()) => report.registered += 1,
            Err(e) => {
                log::error!("[FauxStoneFloors] Couldn't register {}: {}", name, e);
                report.rejected += 1;
            }
        }
    }

    host.resolve_references(&DefId::new(FLOORS_CATEGORY));
    host.reset_wealth_static_data();

    log::info!(
        "[FauxStoneFloors] Generated {} floor sets ({} defs) from {} rocks; {} ignored, {} skipped",
        report.floor_sets,
        report.registered,
        report.rocks_considered,
        report.rocks_ignored,
        report.skipped.len()
    );

    report
}
