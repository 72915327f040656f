#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text presentation shared by the Orb Dungeon adapters.

use std::fmt::Write as _;

use orb_dungeon_core::{AttackOutcome, AttackRejection, Direction, Event, ATTACK_ORB_THRESHOLD};
use orb_dungeon_world::{query, Dungeon};

/// Marker printed in front of the tile the player occupies.
pub const PLAYER_MARKER: &str = "(P)";

/// Separator placed between consecutive moves of a solution.
pub const MOVE_SEPARATOR: &str = " -> ";

/// Renders the grid, the player's stats and the move history.
///
/// Each grid row becomes one line of tile values separated by spaces, with
/// [`PLAYER_MARKER`] glued to the player's tile. The stats and the move
/// symbols follow on their own lines.
#[must_use]
pub fn render_dungeon(dungeon: &Dungeon) -> String {
    let player = query::player(dungeon);
    let mut rendered = String::new();

    for (row, tiles) in query::grid(dungeon).rows().enumerate() {
        for (column, tile) in tiles.iter().enumerate() {
            if column > 0 {
                rendered.push(' ');
            }
            if row as u32 == player.position.row() && column as u32 == player.position.column() {
                rendered.push_str(PLAYER_MARKER);
            }
            let _ = write!(rendered, "{}", tile.value());
        }
        rendered.push('\n');
    }

    let _ = writeln!(rendered, "HP: {} Orbs: {}", player.health, player.orb_count);
    rendered.push_str("Past moves: ");
    rendered.extend(query::move_history(dungeon).iter().map(|direction| direction.symbol()));
    rendered.push('\n');
    rendered
}

/// Formats a move sequence using full direction names, e.g. `Up -> Left`.
#[must_use]
pub fn format_moves(moves: &[Direction]) -> String {
    moves
        .iter()
        .map(|direction| direction.name())
        .collect::<Vec<_>>()
        .join(MOVE_SEPARATOR)
}

/// Describes events worth reporting to a player driving the dungeon by hand.
///
/// Routine confirmations such as successful moves or resets yield `None`.
#[must_use]
pub fn describe_event(event: &Event) -> Option<String> {
    match event {
        Event::DungeonReset | Event::PlayerMoved { .. } => None,
        Event::MoveRejected { reason } => Some(reason.to_string()),
        Event::PlayerDied { health } => Some(format!("YOU DIED!! (HP: {health})")),
        Event::AttackResolved { outcome } => match outcome {
            AttackOutcome::Rejected(AttackRejection::NotOnSanctuary) => {
                Some("ERROR - Not standing on a sanctuary!".to_owned())
            }
            AttackOutcome::Rejected(AttackRejection::Finished) => {
                Some("ERROR - The dungeon is already finished".to_owned())
            }
            AttackOutcome::NoEffect => Some(format!(
                "Not enough orbs! At least {ATTACK_ORB_THRESHOLD} are required."
            )),
            AttackOutcome::Succeeded => None,
        },
        Event::DungeonPassed { moves } => {
            Some(format!("Attack successful! Dungeon passed in {moves} moves."))
        }
    }
}
