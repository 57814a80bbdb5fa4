use super::*;
use crate::board::Square;
use crate::env::{PcgRng, RngOracle, SequenceRng};
use crate::state::{GameMode, Player, init_players};

fn board_with(len: usize, effects: &[(u32, EffectDescriptor)]) -> Board {
    let mut squares: Vec<Square> = Board::plain(len).unwrap().into();
    for (index, effect) in effects {
        squares[*index as usize].effect = Some(effect.clone());
    }
    Board::new(squares).unwrap()
}

fn roster(positions: &[u32]) -> Roster {
    positions
        .iter()
        .enumerate()
        .map(|(seat, &position)| {
            Player::new(PlayerId(seat as u32 + 1), format!("Player {}", seat + 1), "#fff")
                .at(position)
        })
        .collect()
}

fn positions(players: &Roster) -> Vec<u32> {
    players.iter().map(|player| player.position).collect()
}

/// Resolves the effect on `square` for `acting` with a scripted oracle.
fn resolve(
    board: &Board,
    players: Roster,
    acting: usize,
    square: u32,
    rng: &dyn RngOracle,
) -> (Roster, Option<EffectEvent>) {
    let config = GameConfig::default();
    let mut draws = DrawStream::new(rng, 1, 0, 1);
    let mut ctx = EffectContext::new(board, &config, &mut draws);
    apply_effect(players, acting, board.square(square).unwrap(), &mut ctx)
}

#[test]
fn plain_square_yields_no_event() {
    let board = Board::plain(10).unwrap();
    let (players, event) = resolve(&board, roster(&[3, 0]), 0, 3, &PcgRng);
    assert_eq!(positions(&players), [3, 0]);
    assert!(event.is_none());
}

#[test]
fn move_clamps_both_ends() {
    let board = board_with(
        10,
        &[
            (2, EffectDescriptor::new(EffectKind::Move).with_value(-5)),
            (8, EffectDescriptor::new(EffectKind::Move).with_value(4)),
        ],
    );

    let (players, event) = resolve(&board, roster(&[2, 0]), 0, 2, &PcgRng);
    assert_eq!(players[0].position, 0);
    let event = event.unwrap();
    assert_eq!(event.tone, EventTone::Penalty);
    assert_eq!(event.magnitude, -2);

    let (players, event) = resolve(&board, roster(&[8, 0]), 0, 8, &PcgRng);
    assert_eq!(players[0].position, 9);
    assert_eq!(event.unwrap().tone, EventTone::Bonus);
}

#[test]
fn bonus_and_penalty_ignore_sign() {
    let board = board_with(
        20,
        &[
            (5, EffectDescriptor::new(EffectKind::Bonus).with_value(-3)),
            (6, EffectDescriptor::new(EffectKind::Penalty).with_value(3)),
        ],
    );
    let (players, _) = resolve(&board, roster(&[5, 0]), 0, 5, &PcgRng);
    assert_eq!(players[0].position, 8);
    let (players, _) = resolve(&board, roster(&[6, 0]), 0, 6, &PcgRng);
    assert_eq!(players[0].position, 3);
}

#[test]
fn teleport_and_fixed_targets() {
    let board = board_with(
        21,
        &[
            (3, EffectDescriptor::new(EffectKind::Teleport).with_value(99)),
            (4, EffectDescriptor::new(EffectKind::BlackHole)),
            (5, EffectDescriptor::new(EffectKind::GalacticCenter)),
            (6, EffectDescriptor::new(EffectKind::UltimateTruth)),
        ],
    );
    let cases = [(3, 20), (4, 0), (5, 10), (6, 20)];
    for (square, expected) in cases {
        let (players, _) = resolve(&board, roster(&[square, 0]), 0, square, &PcgRng);
        assert_eq!(players[0].position, expected, "square {square}");
    }
}

#[test]
fn swap_picks_next_player_in_turn_order() {
    let board = board_with(20, &[(5, EffectDescriptor::new(EffectKind::Swap))]);

    let (players, event) = resolve(&board, roster(&[5, 12]), 0, 5, &PcgRng);
    assert_eq!(positions(&players), [12, 5]);
    assert_eq!(event.unwrap().tone, EventTone::Bonus);

    let (players, _) = resolve(&board, roster(&[2, 7, 5, 9]), 2, 5, &PcgRng);
    assert_eq!(positions(&players), [2, 7, 9, 5]);

    let (players, _) = resolve(&board, roster(&[2, 7, 9, 5]), 3, 5, &PcgRng);
    assert_eq!(positions(&players), [5, 7, 9, 2]);
}

#[test]
fn random_move_uses_drawn_candidate() {
    let board = board_with(
        20,
        &[
            (
                4,
                EffectDescriptor::new(EffectKind::RandomMove).with_candidates([-2, 1, 3]),
            ),
            (
                5,
                EffectDescriptor::new(EffectKind::EnergyBurst).with_candidates([5, -5]),
            ),
        ],
    );

    let rng = SequenceRng::new().choose(2);
    let (players, _) = resolve(&board, roster(&[4, 0]), 0, 4, &rng);
    assert_eq!(players[0].position, 7);

    let rng = SequenceRng::new().choose(1);
    let (players, event) = resolve(&board, roster(&[5, 0]), 0, 5, &rng);
    assert_eq!(players[0].position, 0);
    assert_eq!(event.unwrap().magnitude, -5);
}

#[test]
fn gravity_pulls_only_players_ahead() {
    let board = board_with(20, &[(5, EffectDescriptor::new(EffectKind::Gravity))]);
    let (players, _) = resolve(&board, roster(&[5, 9, 2, 6]), 0, 5, &PcgRng);
    assert_eq!(positions(&players), [5, 8, 2, 5]);
}

#[test]
fn volcano_pushes_players_ahead_with_floor() {
    let board = board_with(
        20,
        &[
            (2, EffectDescriptor::new(EffectKind::Volcano)),
            (3, EffectDescriptor::new(EffectKind::Volcano).with_value(10)),
        ],
    );
    let (players, event) = resolve(&board, roster(&[2, 4, 1, 12]), 0, 2, &PcgRng);
    assert_eq!(positions(&players), [2, 1, 1, 9]);
    assert_eq!(event.unwrap().tone, EventTone::Neutral);

    let (players, _) = resolve(&board, roster(&[3, 4, 15]), 0, 3, &PcgRng);
    assert_eq!(positions(&players), [3, 0, 5]);
}

#[test]
fn snipe_hits_leader_and_breaks_ties_by_turn_order() {
    let board = board_with(20, &[(2, EffectDescriptor::new(EffectKind::Snipe))]);

    let (players, _) = resolve(&board, roster(&[2, 9, 14, 3]), 0, 2, &PcgRng);
    assert_eq!(positions(&players), [2, 9, 10, 3]);

    let (players, _) = resolve(&board, roster(&[2, 11, 11, 11]), 0, 2, &PcgRng);
    assert_eq!(positions(&players), [2, 7, 11, 11]);

    let (players, _) = resolve(&board, roster(&[12, 12, 2]), 2, 2, &PcgRng);
    assert_eq!(positions(&players), [8, 12, 2]);
}

#[test]
fn meteor_shower_hits_everyone_else() {
    let board = board_with(20, &[(6, EffectDescriptor::new(EffectKind::MeteorShower))]);
    let (players, _) = resolve(&board, roster(&[6, 1, 10]), 0, 6, &PcgRng);
    assert_eq!(positions(&players), [6, 0, 8]);
}

#[test]
fn big_bang_resets_everyone() {
    let board = board_with(24, &[(5, EffectDescriptor::new(EffectKind::BigBang))]);
    let (players, event) = resolve(&board, roster(&[5, 12, 20]), 0, 5, &PcgRng);
    assert_eq!(positions(&players), [0, 0, 0]);
    let event = event.unwrap();
    assert_eq!(event.tone, EventTone::Penalty);
    assert_eq!(event.magnitude, -5);
}

#[test]
fn chaos_permutes_positions() {
    let board = board_with(20, &[(5, EffectDescriptor::new(EffectKind::Chaos))]);
    let (players, _) = resolve(&board, roster(&[5, 9, 14]), 0, 5, &PcgRng);
    let mut after = positions(&players);
    after.sort_unstable();
    assert_eq!(after, [5, 9, 14]);

    // i=2 picks j=0, i=1 picks j=1: [14, 9, 5]
    let rng = SequenceRng::new().choose(0).choose(1);
    let (players, _) = resolve(&board, roster(&[5, 9, 14]), 0, 5, &rng);
    assert_eq!(positions(&players), [14, 9, 5]);
}

#[test]
fn supernova_and_big_crunch() {
    let board = board_with(
        12,
        &[
            (4, EffectDescriptor::new(EffectKind::Supernova)),
            (5, EffectDescriptor::new(EffectKind::BigCrunch)),
        ],
    );
    let (players, _) = resolve(&board, roster(&[4, 10, 0]), 0, 4, &PcgRng);
    assert_eq!(positions(&players), [6, 11, 2]);

    let (players, _) = resolve(&board, roster(&[5, 10, 0]), 0, 5, &PcgRng);
    assert_eq!(positions(&players), [5, 5, 5]);

    let (players, _) = resolve(&board, roster(&[5, 2]), 0, 5, &PcgRng);
    assert_eq!(positions(&players), [3, 3]);
}

#[test]
fn move_to_nearest_prefers_lower_index_on_ties() {
    let board = board_with(
        20,
        &[
            (3, EffectDescriptor::new(EffectKind::BlackHole)),
            (5, EffectDescriptor::new(EffectKind::MoveToNearest)),
            (7, EffectDescriptor::new(EffectKind::Geyser)),
        ],
    );
    let (players, _) = resolve(&board, roster(&[5, 0]), 0, 5, &PcgRng);
    assert_eq!(players[0].position, 3);

    let lonely = board_with(20, &[(5, EffectDescriptor::new(EffectKind::MoveToNearest))]);
    let (players, event) = resolve(&lonely, roster(&[5, 0]), 0, 5, &PcgRng);
    assert_eq!(players[0].position, 5);
    assert_eq!(event.unwrap().tone, EventTone::Neutral);
}

#[test]
fn fixed_jumps_use_config_or_override() {
    let board = board_with(
        30,
        &[
            (2, EffectDescriptor::new(EffectKind::Geyser)),
            (3, EffectDescriptor::new(EffectKind::Wormhole)),
            (4, EffectDescriptor::new(EffectKind::Geyser).with_value(1)),
            (25, EffectDescriptor::new(EffectKind::Wormhole)),
        ],
    );
    let cases = [(2, 6), (3, 13), (4, 5), (25, 29)];
    for (square, expected) in cases {
        let (players, _) = resolve(&board, roster(&[square, 0]), 0, square, &PcgRng);
        assert_eq!(players[0].position, expected, "square {square}");
    }
}

#[test]
fn time_warp_returns_to_previous_position() {
    let board = board_with(20, &[(9, EffectDescriptor::new(EffectKind::TimeWarp))]);
    let mut players = roster(&[9, 0]);
    players[0].previous_position = 4;
    let (players, event) = resolve(&board, players, 0, 9, &PcgRng);
    assert_eq!(players[0].position, 4);
    assert_eq!(event.unwrap().magnitude, -5);
}

#[test]
fn status_effects_set_counters() {
    let board = board_with(
        20,
        &[
            (
                2,
                EffectDescriptor::new(EffectKind::Rest)
                    .with_value(2)
                    .with_desc("Refuelling"),
            ),
            (3, EffectDescriptor::new(EffectKind::Rest).with_value(1)),
            (4, EffectDescriptor::new(EffectKind::Curse).with_value(3)),
            (5, EffectDescriptor::new(EffectKind::Confusion).with_value(2)),
        ],
    );

    let (players, event) = resolve(&board, roster(&[2, 0]), 0, 2, &PcgRng);
    assert_eq!(players[0].rest_turns_remaining, 2);
    assert_eq!(players[0].rest_reason, "Refuelling");
    let event = event.unwrap();
    assert_eq!(event.tone, EventTone::Penalty);
    assert_eq!(event.magnitude, 2);

    let mut resting = roster(&[3, 0]);
    resting[0].rest_turns_remaining = 1;
    let (players, _) = resolve(&board, resting, 0, 3, &PcgRng);
    assert_eq!(players[0].rest_turns_remaining, 2);
    assert_eq!(players[0].rest_reason, "Square 3");

    let mut cursed = roster(&[4, 0]);
    cursed[0].curse_turns_remaining = 5;
    let (players, _) = resolve(&board, cursed, 0, 4, &PcgRng);
    assert_eq!(players[0].curse_turns_remaining, 3);

    let (players, _) = resolve(&board, roster(&[5, 0]), 0, 5, &PcgRng);
    assert_eq!(players[0].confusion_turns_remaining, 2);
}

#[test]
fn cleanse_clears_curse_and_confusion_only() {
    let board = board_with(20, &[(6, EffectDescriptor::new(EffectKind::Cleanse))]);
    let mut players = roster(&[6, 0]);
    players[0].curse_turns_remaining = 2;
    players[0].confusion_turns_remaining = 1;
    players[0].rest_turns_remaining = 1;

    let (players, event) = resolve(&board, players, 0, 6, &PcgRng);
    assert_eq!(players[0].curse_turns_remaining, 0);
    assert_eq!(players[0].confusion_turns_remaining, 0);
    assert_eq!(players[0].rest_turns_remaining, 1);
    assert_eq!(event.unwrap().tone, EventTone::Bonus);
}

#[test]
fn unrecognized_kind_is_a_neutral_no_op() {
    let board = board_with(20, &[(7, EffectDescriptor::new("quasar_pulse"))]);
    let before = roster(&[7, 3]);
    let (players, event) = resolve(&board, before.clone(), 0, 7, &PcgRng);
    assert_eq!(players, before);

    let event = event.unwrap();
    assert_eq!(event.tone, EventTone::Neutral);
    assert_eq!(event.kind, EffectTag::Unrecognized("quasar_pulse".to_string()));
    assert_eq!(event.magnitude, 0);
}

#[test]
fn positions_stay_on_board_for_every_kind() {
    use strum::IntoEnumIterator;

    let mut players = init_players(GameMode::Party {
        humans: 2,
        automated: 2,
    })
    .unwrap();
    let effects: Vec<(u32, EffectDescriptor)> = EffectKind::iter()
        .enumerate()
        .map(|(offset, kind)| {
            let descriptor = match kind {
                EffectKind::RandomMove => EffectDescriptor::new(kind).with_candidates([-7, 9]),
                EffectKind::EnergyBurst => EffectDescriptor::new(kind).with_candidates([12, -12]),
                EffectKind::Move | EffectKind::Bonus | EffectKind::Penalty => {
                    EffectDescriptor::new(kind).with_value(15)
                }
                EffectKind::Teleport => EffectDescriptor::new(kind).with_value(-4),
                EffectKind::Rest | EffectKind::Curse | EffectKind::Confusion => {
                    EffectDescriptor::new(kind).with_value(1)
                }
                _ => EffectDescriptor::new(kind),
            };
            (offset as u32 + 1, descriptor)
        })
        .collect();
    let board = board_with(effects.len() + 2, &effects);
    let last = board.last_index();

    for (round, (square, _)) in effects.iter().enumerate() {
        let acting = round % players.len();
        players[acting].position = *square;
        let (next, _) = resolve(&board, players, acting, *square, &PcgRng);
        assert!(next.iter().all(|p| p.position <= last));
        players = next;
    }
}
