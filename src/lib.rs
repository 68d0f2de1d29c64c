/*!
`buff_rotation` — exhaustive search for the best two-buff rotation.

What it does
- Models two interchangeable buffs (Wrath of God, Heavenly Blessings), each
  lasting 7 time units with its own cooldown.
- Enumerates every legal activation order from time 0 to a horizon `T`:
  cast whichever buff is ready (both orders when both are), otherwise wait
  for the next one to come off cooldown.
- Ranks the resulting timelines by uptime (total covered time), best first.

How to use (call surface only)
- `search(wog_cd, hb_cd, T) -> Result<Vec<BuffTimeline>, ConfigError>` for
  the raw, unranked collection.
- `plan(&RotationConfig, SearchLimits, ReportOptions) -> Result<RotationReport, ConfigError>`
  for a ranked, printable report.
- `systems::rotation::explore(&cfg, sink)` to stream leaves into your own
  `FnMut(BuffTimeline) -> ControlFlow<()>`.

What it does NOT do
- No pruning or memoization: cost grows quickly with `T / min(cooldown)`.
- No more than two buffs, no fractional time.
*/

pub mod config;
pub mod error;
pub mod mechanics;
pub mod systems;

pub use config::{RotationConfig, SearchLimits};
pub use error::ConfigError;
pub use mechanics::{BUFF_DURATION, BuffInterval, BuffTimeline, Effect};
pub use systems::ranking::{ReportEntry, ReportOptions, RotationReport, best_uptime, rank};
pub use systems::rotation::{SearchOutcome, SearchState, SearchStats, Step, explore};

use tracing::{info, warn};

/// Every rotation for the given cooldowns and horizon, in discovery order.
pub fn search(wog_cooldown: i64, hb_cooldown: i64, running_time: i64) -> Result<Vec<BuffTimeline>, ConfigError> {
    let cfg = RotationConfig::new(wog_cooldown, hb_cooldown, running_time);
    Ok(search_with(&cfg, SearchLimits::unlimited())?.rotations)
}

/// Validated search with an optional cap on collected rotations.
pub fn search_with(cfg: &RotationConfig, limits: SearchLimits) -> Result<SearchOutcome, ConfigError> {
    cfg.validate()?;
    limits.validate()?;

    let outcome = systems::rotation::collect(cfg, limits.max_paths);
    if outcome.stats.truncated {
        warn!(
            max_paths = limits.max_paths,
            "path cap reached; remaining rotations were not explored"
        );
    }
    Ok(outcome)
}

/// Search, rank, and trim to a report.
pub fn plan(cfg: &RotationConfig, limits: SearchLimits, opts: ReportOptions) -> Result<RotationReport, ConfigError> {
    let outcome = search_with(cfg, limits)?;
    let report = RotationReport::from_outcome(outcome, cfg.running_time, opts);
    info!(
        explored = report.explored,
        best_uptime = report.best().map(|e| e.uptime),
        running_time = cfg.running_time,
        "rotation report ready"
    );
    Ok(report)
}
