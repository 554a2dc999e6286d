// Fighter stats - ALL PLAYERS HAVE THE SAME BODY
// Differentiation comes from the MOVESET, not base stats

/// Body and bookkeeping values shared by every fighter
#[derive(Debug, Clone, PartialEq)]
pub struct FighterStats {
    // Dimensions (for physics collider)
    /// Fighter width in world units
    pub width: f32,
    /// Fighter height in world units
    pub height: f32,

    // Ground detection
    /// How far below the feet the ground probe reaches
    pub ground_probe_distance: f32,

    // Bookkeeping
    /// Seconds of neutral input on the ground before Idle is requested
    pub idle_time_threshold: f32,
}

/// The ONE set of fighter stats used by all players
pub const BASE_STATS: FighterStats = FighterStats {
    width: 1.0,
    height: 2.0,

    ground_probe_distance: 0.2,

    idle_time_threshold: 0.5,
};

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl FighterStats {
    /// Get the standard fighter stats (same for all players)
    pub fn standard() -> Self {
        BASE_STATS
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}
