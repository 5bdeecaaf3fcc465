//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// The engine reports events through this trait so callers choose whether
/// (and how) to count them.
pub trait SimStats {
    /// Record that a cell moved (one swap)
    fn record_cell_moved(&mut self);

    /// Record a material conversion (freezing, expiry, ignition, ...)
    fn record_state_change(&mut self);

    /// Record that a chemical reaction occurred
    fn record_reaction(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_moved(&mut self) {}
    fn record_state_change(&mut self) {}
    fn record_reaction(&mut self) {}
}

/// Counters for a single tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub cells_moved: u32,
    pub state_changes: u32,
    pub reactions: u32,
}

impl SimStats for TickStats {
    fn record_cell_moved(&mut self) {
        self.cells_moved += 1;
    }

    fn record_state_change(&mut self) {
        self.state_changes += 1;
    }

    fn record_reaction(&mut self) {
        self.reactions += 1;
    }
}

impl TickStats {
    /// True if nothing moved or changed
    pub fn is_quiet(&self) -> bool {
        self.cells_moved == 0 && self.state_changes == 0 && self.reactions == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_all_methods() {
        let mut stats = NoopStats;
        for _ in 0..100 {
            stats.record_cell_moved();
            stats.record_state_change();
            stats.record_reaction();
        }
    }

    #[test]
    fn test_tick_stats_counts() {
        let mut stats = TickStats::default();
        assert!(stats.is_quiet());

        stats.record_cell_moved();
        stats.record_cell_moved();
        stats.record_state_change();
        stats.record_reaction();
        stats.record_reaction();
        stats.record_reaction();

        assert_eq!(stats.cells_moved, 2);
        assert_eq!(stats.state_changes, 1);
        assert_eq!(stats.reactions, 3);
        assert!(!stats.is_quiet());
    }
}
