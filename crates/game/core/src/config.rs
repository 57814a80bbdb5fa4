/// Game configuration constants and tunable parameters.
///
/// The fixed amounts used by board-wide effects live here so difficulty
/// datasets can stay declarative. A scalar `value` on an individual square's
/// effect descriptor overrides the configured amount for that square.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of faces on the die. Rolls are uniform in `[1, dice_sides]`.
    pub dice_sides: u32,
    /// Squares every other player ahead of the actor is pushed back by `volcano`.
    pub volcano_push: u32,
    /// Squares the actor jumps forward on `geyser`.
    pub geyser_jump: u32,
    /// Squares the leading opponent is pushed back by `snipe`.
    pub snipe_push: u32,
    /// Squares the actor jumps forward on `wormhole`.
    pub wormhole_jump: u32,
    /// Squares every player jumps forward on `supernova`.
    pub supernova_jump: u32,
    /// Squares every other player is pushed back by `meteor_shower`.
    pub meteor_shower_push: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of participants in one session.
    pub const MAX_PLAYERS: usize = 4;
    /// Minimum number of participants in one session.
    pub const MIN_PLAYERS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DICE_SIDES: u32 = 6;
    pub const DEFAULT_VOLCANO_PUSH: u32 = 3;
    pub const DEFAULT_GEYSER_JUMP: u32 = 4;
    pub const DEFAULT_SNIPE_PUSH: u32 = 4;
    pub const DEFAULT_WORMHOLE_JUMP: u32 = 10;
    pub const DEFAULT_SUPERNOVA_JUMP: u32 = 2;
    pub const DEFAULT_METEOR_SHOWER_PUSH: u32 = 2;

    pub fn new() -> Self {
        Self {
            dice_sides: Self::DEFAULT_DICE_SIDES,
            volcano_push: Self::DEFAULT_VOLCANO_PUSH,
            geyser_jump: Self::DEFAULT_GEYSER_JUMP,
            snipe_push: Self::DEFAULT_SNIPE_PUSH,
            wormhole_jump: Self::DEFAULT_WORMHOLE_JUMP,
            supernova_jump: Self::DEFAULT_SUPERNOVA_JUMP,
            meteor_shower_push: Self::DEFAULT_METEOR_SHOWER_PUSH,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
