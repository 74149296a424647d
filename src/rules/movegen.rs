//! Legal action enumeration
//!
//! All generators walk the board in scan order (row-major), which fixes the
//! order in which search visits children and therefore how ties break.

use crate::board::{Board, Phase, Player, Pos, Snapshot};

use super::action::Action;

/// Every empty cell
pub fn placements(board: &Board) -> Vec<Pos> {
    Pos::all().filter(|&pos| board.is_empty(pos)).collect()
}

/// Every (from, to) slide of a `player` piece into an empty neighbour
pub fn moves(board: &Board, player: Player) -> Vec<(Pos, Pos)> {
    let mut result = Vec::new();
    for from in board.positions_of(player) {
        for to in from.adjacent() {
            if board.is_empty(to) {
                result.push((from, to));
            }
        }
    }
    result
}

/// Every cell holding an opponent piece
pub fn bomb_targets(board: &Board, player: Player) -> Vec<Pos> {
    board.positions_of(player.opponent()).collect()
}

/// Candidate actions for the acting player in the snapshot's phase.
///
/// Empty in GAMEOVER and REPLACING.
pub fn legal_actions(snapshot: &Snapshot) -> Vec<Action> {
    let player = snapshot.current_player;
    match snapshot.phase {
        Phase::Placing if !snapshot.hands[player].is_empty() => placements(&snapshot.board)
            .into_iter()
            .map(|to| Action::Place { to })
            .collect(),
        Phase::Moving => moves(&snapshot.board, player)
            .into_iter()
            .map(|(from, to)| Action::Move { from, to })
            .collect(),
        Phase::Bombing if !snapshot.hands[player].is_empty() => {
            bomb_targets(&snapshot.board, player)
                .into_iter()
                .map(|target| Action::Bomb { target })
                .collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Hands, Piece, PieceKind, TOTAL_CELLS};

    fn red(id: u16) -> Piece {
        Piece::new(format!("RED-{id}"), PieceKind::Soldier, Player::Red)
    }

    fn black(id: u16) -> Piece {
        Piece::new(format!("BLACK-{id}"), PieceKind::Pawn, Player::Black)
    }

    #[test]
    fn test_placements_empty_board() {
        let board = Board::new();
        let cells = placements(&board);
        assert_eq!(cells.len(), TOTAL_CELLS);
        assert_eq!(cells[0], Pos::new(0, 0));
        assert_eq!(cells[1], Pos::new(1, 0));
        assert_eq!(cells[4], Pos::new(0, 1));
    }

    #[test]
    fn test_placements_skip_occupied() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), red(0));
        board.place(Pos::new(2, 3), black(1));
        let cells = placements(&board);
        assert_eq!(cells.len(), TOTAL_CELLS - 2);
        assert!(!cells.contains(&Pos::new(0, 0)));
        assert!(!cells.contains(&Pos::new(2, 3)));
    }

    #[test]
    fn test_moves_corner_piece() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), red(0));
        let result = moves(&board, Player::Red);
        // right, then down (left/up are off the board)
        assert_eq!(
            result,
            vec![(Pos::new(0, 0), Pos::new(1, 0)), (Pos::new(0, 0), Pos::new(0, 1))]
        );
        assert!(moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn test_moves_blocked_neighbours() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), red(0));
        board.place(Pos::new(1, 0), black(1));
        board.place(Pos::new(0, 1), black(2));
        assert!(moves(&board, Player::Red).is_empty());
        // Black pieces can still slide away
        assert!(!moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn test_moves_order_left_right_up_down() {
        let mut board = Board::new();
        board.place(Pos::new(1, 1), red(0));
        let targets: Vec<Pos> = moves(&board, Player::Red).into_iter().map(|(_, to)| to).collect();
        assert_eq!(
            targets,
            vec![Pos::new(0, 1), Pos::new(2, 1), Pos::new(1, 0), Pos::new(1, 2)]
        );
    }

    #[test]
    fn test_bomb_targets_are_opponent_pieces() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), red(0));
        board.place(Pos::new(3, 7), black(1));
        board.place(Pos::new(1, 2), black(2));
        assert_eq!(bomb_targets(&board, Player::Red), vec![Pos::new(1, 2), Pos::new(3, 7)]);
        assert_eq!(bomb_targets(&board, Player::Black), vec![Pos::new(0, 0)]);
    }

    #[test]
    fn test_legal_actions_by_phase() {
        let snapshot = Snapshot::new_game();
        let actions = legal_actions(&snapshot);
        assert_eq!(actions.len(), TOTAL_CELLS);
        assert_eq!(actions[0], Action::Place { to: Pos::new(0, 0) });

        let mut over = Snapshot::new_game();
        over.phase = Phase::GameOver;
        assert!(legal_actions(&over).is_empty());

        let mut replacing = Snapshot::new_game();
        replacing.phase = Phase::Replacing;
        assert!(legal_actions(&replacing).is_empty());
    }

    #[test]
    fn test_legal_actions_placing_with_empty_hand() {
        let snapshot = Snapshot::new(Board::new(), Hands::default(), Player::Red, Phase::Placing);
        assert!(legal_actions(&snapshot).is_empty());
    }
}
