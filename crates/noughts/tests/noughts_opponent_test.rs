//! Tests for the opponent's fixed-priority move policy.

use noughts::{Board, GameError, Move, OpponentPolicy, Player, Position, SequenceRandom, Tier};

fn board(human: &[usize], opponent: &[usize]) -> Board {
    let mut board = Board::new();
    for (player, cells) in [(Player::Human, human), (Player::Opponent, opponent)] {
        for &i in cells {
            let pos = Position::from_index(i).expect("cell in range");
            board.place(Move::new(player, pos)).expect("cell free");
        }
    }
    board
}

fn policy() -> OpponentPolicy<SequenceRandom> {
    OpponentPolicy::new(SequenceRandom::new([0]))
}

#[test]
fn test_win_now_completes_own_line() {
    let board = board(&[3, 8], &[0, 1]);
    let decision = policy().decide(&board).unwrap();
    assert_eq!(decision.cell(), Position::TopRight);
    assert_eq!(decision.tier(), Tier::WinNow);
}

#[test]
fn test_win_now_with_human_elsewhere() {
    for human in [3, 5, 6, 7, 8] {
        let board = board(&[human], &[0, 1]);
        assert_eq!(policy().select_move(&board), Ok(Position::TopRight));
    }
}

#[test]
fn test_block_diagonal() {
    let board = board(&[0, 4], &[1]);
    let decision = policy().decide(&board).unwrap();
    assert_eq!(decision.cell(), Position::BottomRight);
    assert_eq!(decision.tier(), Tier::Block);
}

#[test]
fn test_center_on_empty_board() {
    let decision = policy().decide(&Board::new()).unwrap();
    assert_eq!(decision.cell(), Position::Center);
    assert_eq!(decision.tier(), Tier::Center);
}

#[test]
fn test_win_scans_all_patterns_before_blocking() {
    // The human's threat (left column) comes before the opponent's own win
    // (right column) in pattern order.
    let board = board(&[0, 3], &[2, 5]);
    let decision = policy().decide(&board).unwrap();
    assert_eq!(decision.cell(), Position::BottomRight);
    assert_eq!(decision.tier(), Tier::WinNow);
}

#[test]
fn test_three_in_pattern_is_not_a_trigger() {
    // Opponent already owns a full line's worth elsewhere; only exactly-two
    // lines with a free third cell count.
    let board = board(&[0, 2, 6], &[3, 4, 5]);
    let decision = policy().decide(&board).unwrap();
    assert_ne!(decision.tier(), Tier::WinNow);
}

#[test]
fn test_random_uses_injected_source() {
    // X . . / . O . / . . X  -> no threats, center taken
    let board = board(&[0, 8], &[4]);
    let empty = board.empty_cells();
    for (i, expected) in empty.iter().enumerate() {
        let mut policy = OpponentPolicy::new(SequenceRandom::new([i]));
        let decision = policy.decide(&board).unwrap();
        assert_eq!(decision.tier(), Tier::Random);
        assert_eq!(decision.cell(), *expected);
    }
}

#[test]
fn test_random_never_picks_occupied_cell() {
    let board = board(&[0, 8], &[4]);
    let mut policy = OpponentPolicy::new(noughts::StdRandom::seeded(7));
    for _ in 0..100 {
        let cell = policy.select_move(&board).unwrap();
        assert!(board.is_empty(cell));
    }
}

#[test]
fn test_no_legal_move_on_full_board() {
    let board = board(&[0, 2, 4, 5, 7], &[1, 3, 6, 8]);
    assert_eq!(policy().select_move(&board), Err(GameError::NoLegalMove));
}
