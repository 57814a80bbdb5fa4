//! Board-wide effects: every player, the actor included, is repositioned.

use crate::board::Board;
use crate::state::Roster;

use super::{Applied, EffectContext, squares};

/// Resets every player to the start square.
pub(super) fn big_bang(players: &mut Roster) -> Applied {
    for player in players.iter_mut() {
        player.position = 0;
    }
    Applied::moved("The Big Bang sends everyone back to the start".to_string())
}

/// Randomly permutes player positions (Fisher-Yates over the draw stream).
pub(super) fn chaos(players: &mut Roster, ctx: &mut EffectContext<'_, '_>) -> Applied {
    let mut positions: Vec<u32> = players.iter().map(|player| player.position).collect();
    for i in (1..positions.len()).rev() {
        let j = ctx.draws.index(i + 1);
        positions.swap(i, j);
    }
    for (player, position) in players.iter_mut().zip(positions) {
        player.position = position;
    }
    Applied::moved("Chaos scrambles every position".to_string())
}

/// Every player jumps forward by `jump`, clamped to the goal.
pub(super) fn supernova(players: &mut Roster, jump: i64, board: &Board) -> Applied {
    for player in players.iter_mut() {
        player.position = board.clamp(i64::from(player.position) + jump);
    }
    Applied::moved(format!(
        "A supernova launches everyone forward {}",
        squares(jump)
    ))
}

/// Collapses every player onto the floor of the mean position.
pub(super) fn big_crunch(players: &mut Roster) -> Applied {
    let total: u64 = players.iter().map(|player| u64::from(player.position)).sum();
    let mean = (total / players.len().max(1) as u64) as u32;
    for player in players.iter_mut() {
        player.position = mean;
    }
    Applied::moved(format!("The Big Crunch pulls everyone to square {mean}"))
}
