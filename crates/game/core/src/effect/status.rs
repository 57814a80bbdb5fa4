//! Status effects and the roll modifiers they drive.

use crate::env::DrawStream;
use crate::state::{Player, Roster};

use super::{Applied, EventTone};

pub(super) fn rest(players: &mut Roster, acting: usize, turns: u32, reason: String) -> Applied {
    let actor = &mut players[acting];
    actor.rest_turns_remaining = actor.rest_turns_remaining.saturating_add(turns);
    actor.rest_reason = reason;
    Applied::moved(format!("{} must rest for {turns} turn(s)", actor.name))
        .with_tone(EventTone::Penalty)
        .with_magnitude(turns as i32)
}

pub(super) fn curse(players: &mut Roster, acting: usize, turns: u32) -> Applied {
    let actor = &mut players[acting];
    actor.curse_turns_remaining = turns;
    Applied::moved(format!(
        "{} is cursed: movement halved for {turns} turn(s)",
        actor.name
    ))
    .with_tone(EventTone::Penalty)
    .with_magnitude(turns as i32)
}

pub(super) fn confusion(players: &mut Roster, acting: usize, turns: u32) -> Applied {
    let actor = &mut players[acting];
    actor.confusion_turns_remaining = turns;
    Applied::moved(format!(
        "{} is confused for {turns} turn(s)",
        actor.name
    ))
    .with_tone(EventTone::Penalty)
    .with_magnitude(turns as i32)
}

/// Clears curse and confusion. Rest is left alone.
pub(super) fn cleanse(players: &mut Roster, acting: usize) -> Applied {
    let actor = &mut players[acting];
    let cleared = actor.is_cursed() || actor.is_confused();
    actor.curse_turns_remaining = 0;
    actor.confusion_turns_remaining = 0;

    if cleared {
        Applied::moved(format!("{} is cleansed of every affliction", actor.name))
            .with_tone(EventTone::Bonus)
    } else {
        Applied::moved(format!("{} feels refreshed", actor.name)).with_tone(EventTone::Neutral)
    }
}

/// Movement derived from a raw die value after status modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifiedRoll {
    /// Signed number of squares to move.
    pub movement: i32,
    pub cursed: bool,
    pub confused: bool,
    /// Confusion flipped the direction.
    pub reversed: bool,
}

/// Applies curse then confusion to `roll`, consuming one turn of each.
///
/// Curse halves (floor) the magnitude. Confusion negates it on a coin flip;
/// the coin is only drawn while confused.
pub fn apply_roll_modifiers(
    player: &mut Player,
    roll: u32,
    draws: &mut DrawStream<'_>,
) -> ModifiedRoll {
    let mut movement = roll as i32;

    let cursed = player.is_cursed();
    if cursed {
        movement /= 2;
        player.curse_turns_remaining -= 1;
    }

    let confused = player.is_confused();
    let mut reversed = false;
    if confused {
        reversed = draws.coin();
        if reversed {
            movement = -movement;
        }
        player.confusion_turns_remaining -= 1;
    }

    ModifiedRoll {
        movement,
        cursed,
        confused,
        reversed,
    }
}
