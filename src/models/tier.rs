//! Weight tiers and their boundaries.
//!
//! Every routable job belongs to exactly one of three tiers, chosen by
//! weight. The tier fixes how many carriers the job needs: one, a pair, or
//! a triple. Weights above the heaviest boundary have no tier and are
//! rejected at enqueue time.

use serde::{Deserialize, Serialize};

/// The three weight classes, ordered lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierKind {
    /// Liftable by a single carrier.
    Solo,
    /// Needs two carriers working as a team.
    Pair,
    /// Needs three carriers working as a team.
    Triple,
}

impl TierKind {
    /// All tiers, lightest first. Cross-tier ties resolve toward the
    /// earlier entry.
    pub const ALL: [TierKind; 3] = [TierKind::Solo, TierKind::Pair, TierKind::Triple];

    /// How many carriers a job in this tier requires.
    pub fn required_carriers(self) -> usize {
        match self {
            TierKind::Solo => 1,
            TierKind::Pair => 2,
            TierKind::Triple => 3,
        }
    }

    /// Position of this tier in [`TierKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            TierKind::Solo => 0,
            TierKind::Pair => 1,
            TierKind::Triple => 2,
        }
    }
}

/// Upper weight boundaries of the three tiers.
///
/// The ranges are half-open: `(0, solo_max]`, `(solo_max, pair_max]`,
/// `(pair_max, triple_max]`. Anything above `triple_max` is unroutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Heaviest weight one carrier can lift alone.
    pub solo_max: u32,
    /// Heaviest weight a pair can lift.
    pub pair_max: u32,
    /// Heaviest weight a triple can lift; the routable limit.
    pub triple_max: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            solo_max: 2000,
            pair_max: 2600,
            triple_max: 3000,
        }
    }
}

impl TierThresholds {
    /// Creates custom boundaries.
    ///
    /// # Panics
    /// Panics unless `0 < solo_max < pair_max < triple_max`; misordered
    /// boundaries are a configuration bug, not a runtime condition.
    pub fn new(solo_max: u32, pair_max: u32, triple_max: u32) -> Self {
        assert!(
            solo_max > 0 && solo_max < pair_max && pair_max < triple_max,
            "tier thresholds must be strictly increasing and positive"
        );
        Self {
            solo_max,
            pair_max,
            triple_max,
        }
    }

    /// Classifies a weight into its tier, or `None` if unroutable.
    pub fn classify(&self, weight: u32) -> Option<TierKind> {
        if weight <= self.solo_max {
            Some(TierKind::Solo)
        } else if weight <= self.pair_max {
            Some(TierKind::Pair)
        } else if weight <= self.triple_max {
            Some(TierKind::Triple)
        } else {
            None
        }
    }
}
