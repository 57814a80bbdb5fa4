//! Movement effects: only the acting player's position changes.

use crate::board::Board;
use crate::state::Roster;

use super::{Applied, EffectContext, squares};

/// Moves the actor by `delta` squares, clamped to the board.
pub(super) fn shift(players: &mut Roster, acting: usize, delta: i64, board: &Board) -> Applied {
    let actor = &mut players[acting];
    let from = actor.position;
    actor.position = board.clamp(i64::from(from) + delta);

    let message = match delta.signum() {
        1 => format!("{} advances {}", actor.name, squares(delta)),
        -1 => format!("{} falls back {}", actor.name, squares(delta)),
        _ => format!("{} stays put", actor.name),
    };
    Applied::moved(message)
}

/// Sets the actor's position to `target`, clamped to the board.
pub(super) fn relocate(players: &mut Roster, acting: usize, target: i64, board: &Board) -> Applied {
    let actor = &mut players[acting];
    actor.position = board.clamp(target);
    Applied::moved(format!(
        "{} is transported to square {}",
        actor.name, actor.position
    ))
}

/// Picks one of `candidates` uniformly and applies it as a shift.
pub(super) fn random_shift(
    players: &mut Roster,
    acting: usize,
    candidates: &[i32],
    ctx: &mut EffectContext<'_, '_>,
) -> Applied {
    let Some(&delta) = candidates.get(ctx.draws.index(candidates.len())) else {
        return Applied::moved(format!("{} stays put", players[acting].name));
    };
    shift(players, acting, i64::from(delta), ctx.board)
}

/// Relocates the actor to the closest other square with an effect.
///
/// Ties go to the lower index. Without any other effect square the actor
/// stays where it is.
pub(super) fn move_to_nearest(players: &mut Roster, acting: usize, board: &Board) -> Applied {
    let here = players[acting].position;
    let nearest = board
        .effect_indices()
        .filter(|&index| index != here)
        .min_by_key(|&index| (index.abs_diff(here), index));

    match nearest {
        Some(target) => {
            let actor = &mut players[acting];
            actor.position = target;
            Applied::moved(format!(
                "{} is drawn to the nearest anomaly at square {target}",
                actor.name
            ))
        }
        None => Applied::moved(format!("{} finds no anomaly nearby", players[acting].name)),
    }
}
