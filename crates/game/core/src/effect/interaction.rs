//! Interaction effects: the actor's square acts on other players.
//!
//! Pushbacks floor at 0. Nothing here can move a player past the goal, so no
//! upper clamp is needed.

use crate::state::Roster;

use super::{Applied, squares};

/// Exchanges positions with the next player in turn order.
///
/// With two players that is simply the other player.
pub(super) fn swap(players: &mut Roster, acting: usize) -> Applied {
    let other = (acting + 1) % players.len();
    if other == acting {
        return Applied::moved(format!("{} has no one to swap with", players[acting].name));
    }

    let (mine, theirs) = (players[acting].position, players[other].position);
    players[acting].position = theirs;
    players[other].position = mine;

    Applied::moved(format!(
        "{} swaps places with {}",
        players[acting].name, players[other].name
    ))
}

/// Every other player ahead of the actor moves one square toward them.
pub(super) fn gravity(players: &mut Roster, acting: usize) -> Applied {
    let anchor = players[acting].position;
    let mut pulled = 0;
    for (index, player) in players.iter_mut().enumerate() {
        if index != acting && player.position > anchor {
            player.position -= 1;
            pulled += 1;
        }
    }

    let name = &players[acting].name;
    if pulled == 0 {
        Applied::moved(format!("{name}'s gravity well pulls on empty space"))
    } else {
        Applied::moved(format!("{name}'s gravity pulls {pulled} rival(s) closer"))
    }
}

/// Every other player ahead of the actor is pushed back by `push`.
pub(super) fn volcano(players: &mut Roster, acting: usize, push: i64) -> Applied {
    let anchor = players[acting].position;
    let hit = push_back(players, push, |index, position| {
        index != acting && position > anchor
    });
    Applied::moved(format!(
        "An eruption pushes {hit} rival(s) back {}",
        squares(push)
    ))
}

/// The furthest-advanced other player is pushed back by `push`.
///
/// Ties go to the earliest player in turn order.
pub(super) fn snipe(players: &mut Roster, acting: usize, push: i64) -> Applied {
    let target = players
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != acting)
        // max_by_key keeps the last maximum, so compare on reversed index.
        .max_by_key(|(index, player)| (player.position, core::cmp::Reverse(*index)))
        .map(|(index, _)| index);

    let Some(target) = target else {
        return Applied::moved(format!("{} finds no target", players[acting].name));
    };
    push_back(players, push, |index, _| index == target);

    Applied::moved(format!(
        "{} snipes {} back {}",
        players[acting].name,
        players[target].name,
        squares(push)
    ))
}

/// Every other player is pushed back by `push`.
pub(super) fn meteor_shower(players: &mut Roster, acting: usize, push: i64) -> Applied {
    let hit = push_back(players, push, |index, _| index != acting);
    Applied::moved(format!(
        "A meteor shower knocks {hit} rival(s) back {}",
        squares(push)
    ))
}

/// Moves every matching player back by `push`, floor 0. Returns how many matched.
fn push_back(players: &mut Roster, push: i64, hits: impl Fn(usize, u32) -> bool) -> usize {
    let push = u32::try_from(push.max(0)).unwrap_or(u32::MAX);
    let mut count = 0;
    for (index, player) in players.iter_mut().enumerate() {
        if hits(index, player.position) {
            player.position = player.position.saturating_sub(push);
            count += 1;
        }
    }
    count
}
