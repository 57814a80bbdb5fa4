//! Effect resolver: applies a square's effect to the roster.
//!
//! [`apply_effect`] is a pure function of its inputs and the draw stream. It
//! takes the roster by value and hands back the updated roster together with
//! an advisory [`EffectEvent`] for presentation. The event never feeds back
//! into game state.
//!
//! ## Effect Categories
//!
//! - **Movement** ([`movement`]): the acting player is displaced or relocated
//! - **Interaction** ([`interaction`]): other players are pushed, pulled or swapped
//! - **Board-wide** ([`board_wide`]): every player is repositioned
//! - **Status** ([`status`]): rest / curse / confusion counters
//!
//! Every position-mutating rule clamps to `[0, last_index]`. Resets to 0 are
//! explicit rules, not clamps.

mod board_wide;
mod interaction;
mod movement;
mod status;

pub use status::{ModifiedRoll, apply_roll_modifiers};

use crate::board::{Board, EffectDescriptor, EffectKind, EffectTag, Square};
use crate::config::GameConfig;
use crate::env::DrawStream;
use crate::state::{PlayerId, Roster};

/// How the outcome reads from the acting player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventTone {
    Bonus,
    Penalty,
    Neutral,
}

impl EventTone {
    fn from_delta(delta: i32) -> Self {
        match delta.signum() {
            1 => Self::Bonus,
            -1 => Self::Penalty,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bonus => "bonus",
            Self::Penalty => "penalty",
            Self::Neutral => "neutral",
        }
    }
}

/// Advisory description of a resolved effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectEvent {
    pub tone: EventTone,
    pub kind: EffectTag,
    /// Square the effect belongs to.
    pub square: u32,
    pub message: String,
    /// Acting player.
    pub player: PlayerId,
    /// Acting player's displacement, or the status duration for status effects.
    pub magnitude: i32,
}

/// Read-only inputs plus the draw stream for the current roll.
pub struct EffectContext<'a, 'r> {
    pub board: &'a Board,
    pub config: &'a GameConfig,
    pub draws: &'a mut DrawStream<'r>,
}

impl<'a, 'r> EffectContext<'a, 'r> {
    pub fn new(board: &'a Board, config: &'a GameConfig, draws: &'a mut DrawStream<'r>) -> Self {
        Self {
            board,
            config,
            draws,
        }
    }
}

/// What a handler did, before tone and magnitude defaults are filled in.
struct Applied {
    message: String,
    magnitude: Option<i32>,
    tone: Option<EventTone>,
}

impl Applied {
    fn moved(message: String) -> Self {
        Self {
            message,
            magnitude: None,
            tone: None,
        }
    }

    fn with_magnitude(mut self, magnitude: i32) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    fn with_tone(mut self, tone: EventTone) -> Self {
        self.tone = Some(tone);
        self
    }
}

/// Applies `square`'s effect on behalf of `players[acting]`.
///
/// Returns the roster unchanged and no event when the square is plain or
/// `acting` is out of range. Unrecognized kinds leave positions untouched but
/// still produce a neutral event.
pub fn apply_effect(
    mut players: Roster,
    acting: usize,
    square: &Square,
    ctx: &mut EffectContext<'_, '_>,
) -> (Roster, Option<EffectEvent>) {
    let Some(effect) = &square.effect else {
        return (players, None);
    };
    let Some(actor) = players.get(acting) else {
        return (players, None);
    };
    let (actor_id, before) = (actor.id, actor.position);

    let applied = match effect.kind.known() {
        Some(kind) => dispatch(kind, &mut players, acting, effect, square, ctx),
        None => {
            tracing::warn!(
                square = square.id,
                kind = %effect.kind,
                "unrecognized effect kind; treating as no effect"
            );
            Applied::moved(format!("{} triggered an effect", square.name))
                .with_tone(EventTone::Neutral)
        }
    };

    let delta = players[acting].position as i32 - before as i32;
    let event = EffectEvent {
        tone: applied.tone.unwrap_or_else(|| EventTone::from_delta(delta)),
        kind: effect.kind.clone(),
        square: square.id,
        message: applied.message,
        player: actor_id,
        magnitude: applied.magnitude.unwrap_or(delta),
    };

    tracing::debug!(
        player = %actor_id,
        square = square.id,
        kind = %event.kind,
        tone = event.tone.as_str(),
        magnitude = event.magnitude,
        "effect resolved"
    );

    (players, Some(event))
}

fn dispatch(
    kind: EffectKind,
    players: &mut Roster,
    acting: usize,
    effect: &EffectDescriptor,
    square: &Square,
    ctx: &mut EffectContext<'_, '_>,
) -> Applied {
    let config = ctx.config;
    let last = ctx.board.last_index();
    let value = effect.scalar().unwrap_or(0);

    match kind {
        EffectKind::Move => movement::shift(players, acting, i64::from(value), ctx.board),
        EffectKind::Bonus => {
            movement::shift(players, acting, i64::from(value).abs(), ctx.board)
        }
        EffectKind::Penalty => {
            movement::shift(players, acting, -i64::from(value).abs(), ctx.board)
        }
        EffectKind::Teleport => movement::relocate(players, acting, i64::from(value), ctx.board),
        EffectKind::RandomMove | EffectKind::EnergyBurst => {
            let candidates = effect.candidates().unwrap_or(&[]);
            movement::random_shift(players, acting, candidates, ctx)
        }
        EffectKind::Geyser => {
            let jump = amount(effect, config.geyser_jump);
            movement::shift(players, acting, jump, ctx.board)
        }
        EffectKind::Wormhole => {
            let jump = amount(effect, config.wormhole_jump);
            movement::shift(players, acting, jump, ctx.board)
        }
        EffectKind::BlackHole => movement::relocate(players, acting, 0, ctx.board),
        EffectKind::MoveToNearest => movement::move_to_nearest(players, acting, ctx.board),
        EffectKind::GalacticCenter => {
            movement::relocate(players, acting, i64::from(last / 2), ctx.board)
        }
        EffectKind::TimeWarp => {
            let previous = players[acting].previous_position;
            movement::relocate(players, acting, i64::from(previous), ctx.board)
        }
        EffectKind::UltimateTruth => {
            movement::relocate(players, acting, i64::from(last), ctx.board)
        }

        EffectKind::Swap => interaction::swap(players, acting),
        EffectKind::Gravity => interaction::gravity(players, acting),
        EffectKind::Volcano => {
            let push = amount(effect, config.volcano_push);
            interaction::volcano(players, acting, push)
        }
        EffectKind::Snipe => {
            let push = amount(effect, config.snipe_push);
            interaction::snipe(players, acting, push)
        }
        EffectKind::MeteorShower => {
            let push = amount(effect, config.meteor_shower_push);
            interaction::meteor_shower(players, acting, push)
        }

        EffectKind::BigBang => board_wide::big_bang(players),
        EffectKind::Chaos => board_wide::chaos(players, ctx),
        EffectKind::Supernova => {
            let jump = amount(effect, config.supernova_jump);
            board_wide::supernova(players, jump, ctx.board)
        }
        EffectKind::BigCrunch => board_wide::big_crunch(players),

        EffectKind::Rest => {
            let reason = effect.desc.clone().unwrap_or_else(|| square.name.clone());
            status::rest(players, acting, value.max(0) as u32, reason)
        }
        EffectKind::Curse => status::curse(players, acting, value.max(0) as u32),
        EffectKind::Confusion => status::confusion(players, acting, value.max(0) as u32),
        EffectKind::Cleanse => status::cleanse(players, acting),
    }
}

/// Configured amount, overridden by a non-negative scalar on the descriptor.
fn amount(effect: &EffectDescriptor, configured: u32) -> i64 {
    effect
        .scalar()
        .map_or(i64::from(configured), |value| i64::from(value.max(0)))
}

/// Human-readable count of squares, e.g. "1 square" / "3 squares".
fn squares(count: i64) -> String {
    match count.abs() {
        1 => "1 square".to_string(),
        n => format!("{n} squares"),
    }
}

#[cfg(test)]
mod tests;
