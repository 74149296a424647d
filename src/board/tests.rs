use super::*;
use crate::error::EngineError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Red.opponent(), Player::Black);
    assert_eq!(Player::Black.opponent(), Player::Red);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 4);
    assert_eq!(pos.x, 2);
    assert_eq!(pos.y, 4);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 5);
    assert_eq!(pos.to_index(), 5 * 4 + 3);
    assert_eq!(Pos::from_index(23), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(3, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(4, 0));
    assert!(!Pos::is_valid(0, 8));
    assert!(Pos::new(3, 7).in_bounds());
    assert!(!Pos::new(4, 7).in_bounds());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_WIDTH, 4);
    assert_eq!(BOARD_HEIGHT, 8);
    assert_eq!(TOTAL_CELLS, 32);
    assert_eq!(Pos::all().count(), 32);
    assert_eq!(Pos::all().next(), Some(Pos::new(0, 0)));
    assert_eq!(Pos::all().nth(4), Some(Pos::new(0, 1)));
}

#[test]
fn test_adjacent_order() {
    let inner: Vec<Pos> = Pos::new(1, 1).adjacent().collect();
    assert_eq!(
        inner,
        vec![Pos::new(0, 1), Pos::new(2, 1), Pos::new(1, 0), Pos::new(1, 2)]
    );

    let corner: Vec<Pos> = Pos::new(3, 7).adjacent().collect();
    assert_eq!(corner, vec![Pos::new(2, 7), Pos::new(3, 6)]);
}

#[test]
fn test_center_distance() {
    assert_eq!(Pos::new(2, 4).center_distance(), 0);
    assert_eq!(Pos::new(0, 0).center_distance(), 6);
    assert_eq!(Pos::new(3, 7).center_distance(), 4);
}

#[test]
fn test_board_place_and_take() {
    let mut board = Board::new();
    let piece = Piece::new("RED-7", PieceKind::Chariot, Player::Red);
    let pos = Pos::new(1, 3);

    assert!(board.is_board_empty());
    assert_eq!(board.place(pos, piece.clone()), None);
    assert_eq!(board.get(pos), Some(&piece));
    assert_eq!(board.owner(pos), Some(Player::Red));
    assert!(board.is_owned_by(pos, Player::Red));
    assert!(!board.is_owned_by(pos, Player::Black));
    assert_eq!(board.count(Player::Red), 1);
    assert_eq!(board.count(Player::Black), 0);

    assert_eq!(board.take(pos), Some(piece));
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_board_positions_scan_order() {
    let mut board = Board::new();
    board.place(Pos::new(3, 2), Piece::new("RED-0", PieceKind::Soldier, Player::Red));
    board.place(Pos::new(0, 5), Piece::new("RED-1", PieceKind::Soldier, Player::Red));
    board.place(Pos::new(1, 2), Piece::new("RED-2", PieceKind::Soldier, Player::Red));
    let found: Vec<Pos> = board.positions_of(Player::Red).collect();
    assert_eq!(found, vec![Pos::new(1, 2), Pos::new(3, 2), Pos::new(0, 5)]);
}

#[test]
fn test_has_mobile_piece() {
    let mut board = Board::new();
    assert!(!board.has_mobile_piece(Player::Red));

    board.place(Pos::new(0, 0), Piece::new("RED-0", PieceKind::Soldier, Player::Red));
    board.place(Pos::new(1, 0), Piece::new("BLACK-0", PieceKind::Pawn, Player::Black));
    board.place(Pos::new(0, 1), Piece::new("BLACK-1", PieceKind::Pawn, Player::Black));
    assert!(!board.has_mobile_piece(Player::Red));
    assert!(board.has_mobile_piece(Player::Black));
}

#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Piece::new("RED-0", PieceKind::Soldier, Player::Red));
    let text = board.to_string();
    assert!(text.contains("R兵"));
    assert_eq!(text.lines().count(), BOARD_HEIGHT + 1);
}

#[test]
fn test_starting_hands() {
    let red = Hand::starting(Player::Red);
    let black = Hand::starting(Player::Black);
    assert_eq!(red.len(), 16);
    assert_eq!(black.len(), 16);
    assert_eq!(red.front().map(|p| p.id.as_str()), Some("RED-0"));
    assert_eq!(black.front().map(|p| p.id.as_str()), Some("BLACK-0"));
    assert_eq!(red.iter().last().map(|p| p.id.as_str()), Some("RED-15"));
    assert_eq!(red.front().map(|p| p.kind), Some(PieceKind::Marshal));
    assert_eq!(black.front().map(|p| p.kind), Some(PieceKind::General));
    assert!(red.iter().all(|p| p.owner == Player::Red));
}

#[test]
fn test_hand_draw_is_fifo() {
    let mut hand = Hand::starting(Player::Red);
    assert_eq!(hand.draw().map(|p| p.id), Some(PieceId::from("RED-0")));
    assert_eq!(hand.draw().map(|p| p.id), Some(PieceId::from("RED-1")));
    assert_eq!(hand.len(), 14);
}

#[test]
fn test_hand_recycle_keeps_line_order() {
    let mut hand: Hand = [Piece::new("r9", PieceKind::Pawn, Player::Red)]
        .into_iter()
        .collect();
    let line = ["r3", "r1", "r2", "r0"].map(|id| Piece::new(id, PieceKind::Soldier, Player::Red));

    hand.recycle(line);

    let ids: Vec<&str> = hand.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r1", "r2", "r0", "r9"]);
}

#[test]
fn test_hands_index() {
    let mut hands = Hands::starting();
    hands[Player::Black].draw();
    assert_eq!(hands[Player::Red].len(), 16);
    assert_eq!(hands[Player::Black].len(), 15);
}

#[test]
fn test_new_game_snapshot() {
    let snapshot = Snapshot::new_game();
    assert!(snapshot.board.is_board_empty());
    assert_eq!(snapshot.current_player, Player::Red);
    assert_eq!(snapshot.phase, Phase::Placing);
    assert_eq!(snapshot.winner, None);
    assert_eq!(snapshot.total(Player::Red), 16);
    assert_eq!(snapshot.total(Player::Black), 16);
    assert!(!snapshot.below_threshold());
    assert!(snapshot.validate().is_ok());
}

#[test]
fn test_below_threshold() {
    let mut hands = Hands::default();
    for id in 0..3 {
        hands.red.push_back(Piece::new(format!("RED-{id}"), PieceKind::Soldier, Player::Red));
    }
    for id in 16..22 {
        hands.black.push_back(Piece::new(format!("BLACK-{id}"), PieceKind::Pawn, Player::Black));
    }
    let snapshot = Snapshot::new(Board::new(), hands, Player::Red, Phase::Placing);
    assert!(snapshot.below_threshold());
}

#[test]
fn test_snapshot_json_roundtrip() {
    let mut snapshot = Snapshot::new_game();
    let front = snapshot.hands.red.draw().unwrap();
    snapshot.board.place(Pos::new(2, 4), front);

    let json = snapshot.to_json().unwrap();
    let parsed = Snapshot::from_json(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_snapshot_json_wire_names() {
    let json = serde_json::to_value(Snapshot::new_game()).unwrap();
    assert_eq!(json["currentPlayer"], "RED");
    assert_eq!(json["phase"], "PLACING");
    assert_eq!(json["hands"]["RED"][0]["type"], "帅");
    assert_eq!(json["board"].as_array().map(Vec::len), Some(BOARD_HEIGHT));
    assert!(json.get("winner").is_none());
}

#[test]
fn test_snapshot_accepts_game_state_alias() {
    let mut json = serde_json::to_value(Snapshot::new_game()).unwrap();
    let object = json.as_object_mut().unwrap();
    let phase = object.remove("phase").unwrap();
    object.insert("gameState".to_string(), phase);

    let parsed = Snapshot::from_json(&json.to_string()).unwrap();
    assert_eq!(parsed.phase, Phase::Placing);
}

#[test]
fn test_snapshot_rejects_malformed_json() {
    let err = Snapshot::from_json("{\"board\": 3}").unwrap_err();
    assert!(matches!(err, EngineError::Json(_)));
}

#[test]
fn test_validate_duplicate_piece() {
    let mut snapshot = Snapshot::new_game();
    // RED-0 is still in RED's hand
    snapshot.board.place(Pos::new(0, 0), Piece::new("RED-0", PieceKind::Marshal, Player::Red));
    assert!(matches!(
        snapshot.validate(),
        Err(EngineError::DuplicatePiece { id }) if id == "RED-0"
    ));
}

#[test]
fn test_validate_hand_owner() {
    let mut snapshot = Snapshot::new_game();
    snapshot.hands.red.push_back(Piece::new("BLACK-99", PieceKind::Pawn, Player::Black));
    assert!(matches!(
        snapshot.validate(),
        Err(EngineError::HandOwnerMismatch { id, hand: Player::Red }) if id == "BLACK-99"
    ));
}

#[test]
fn test_validate_winner_requires_game_over() {
    let mut snapshot = Snapshot::new_game();
    snapshot.winner = Some(Player::Red);
    assert!(matches!(
        snapshot.validate(),
        Err(EngineError::WinnerWithoutGameOver)
    ));
    snapshot.phase = Phase::GameOver;
    assert!(snapshot.validate().is_ok());
}

#[test]
fn test_game_over_wire_name() {
    let mut snapshot = Snapshot::new_game();
    snapshot.phase = Phase::GameOver;
    snapshot.winner = Some(Player::Black);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["phase"], "GAMEOVER");
    assert_eq!(json["winner"], "BLACK");

    let parsed = Snapshot::from_json(&json.to_string()).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_snapshot_with_string_ids() {
    let json = r#"{
        "board": [
            [{ "id": "RED-11", "type": "兵", "owner": "RED" }, null, null, null],
            [null, null, null, null],
            [null, null, null, null],
            [null, null, null, null],
            [null, null, null, null],
            [null, null, null, null],
            [null, null, null, null],
            [null, null, null, { "id": "BLACK-0", "type": "将", "owner": "BLACK" }]
        ],
        "hands": {
            "RED": [{ "id": "RED-12", "type": "兵", "owner": "RED" }],
            "BLACK": [{ "id": "BLACK-1", "type": "士", "owner": "BLACK" }]
        },
        "currentPlayer": "BLACK",
        "gameState": "GAMEOVER"
    }"#;

    let snapshot = Snapshot::from_json(json).unwrap();
    let corner = snapshot.board.get(Pos::new(0, 0)).unwrap();
    assert_eq!(corner.id, "RED-11");
    assert_eq!(corner.kind, PieceKind::Soldier);
    assert_eq!(snapshot.hands[Player::Black].front().map(|p| p.kind), Some(PieceKind::Guard));
    assert_eq!(snapshot.phase, Phase::GameOver);
    assert_eq!(snapshot.current_player, Player::Black);
}
