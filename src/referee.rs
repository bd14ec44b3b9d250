// This file is part of the chess-referee library.
// Copyright (C) 2026 The chess-referee developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Move legality, threats, check and mate.
//!
//! The referee is a set of stateless functions over a [`Position`]. It
//! never mutates the position. Turn order is not its concern either, see
//! [`Game`](crate::Game) for that.
//!
//! # Examples
//!
//! ```
//! use chess_referee::{referee, Color, Position, Square};
//!
//! let pos = Position::new();
//! let knight = pos.piece_at(Square::G1).expect("knight");
//!
//! let moves = referee::legal_moves(&pos, knight);
//! assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Square::F3, Square::H3]);
//!
//! assert!(!referee::is_check(&pos, Color::White));
//! ```

use crate::{
    bitboard::Bitboard,
    color::Color,
    piece::Piece,
    position::Position,
    square::Square,
};

/// Checks if `piece` may move to `to`, where `occupant` is the piece
/// currently standing on `to`.
///
/// The conditions are evaluated cheapest first: the target must not hold a
/// piece of the same color, the move must match the
/// [shape](Piece::is_shape_legal) of the piece, and the path must be clear.
/// Whether the move exposes the own king is not considered here.
///
/// Being on the board is guaranteed by [`Square`]. Use
/// [`is_move_legal_xy()`] for raw coordinates.
pub fn is_move_legal(pos: &Position, piece: &Piece, to: Square, occupant: Option<&Piece>) -> bool {
    !occupant.is_some_and(|other| other.color == piece.color)
        && piece.is_shape_legal(to, occupant.is_some())
        && !is_blocked(pos, piece, to)
}

/// Like [`is_move_legal()`], but for coordinates that may lie off the
/// board. Those are never legal.
///
/// ```
/// use chess_referee::{referee, Position, Square};
///
/// let pos = Position::new();
/// let rook = pos.piece_at(Square::A1).expect("rook");
/// assert!(!referee::is_move_legal_xy(&pos, rook, -1, 7));
/// assert!(!referee::is_move_legal_xy(&pos, rook, 0, 8));
/// ```
pub fn is_move_legal_xy(pos: &Position, piece: &Piece, x: i32, y: i32) -> bool {
    Square::from_coords(x, y).is_some_and(|to| is_move_legal(pos, piece, to, pos.piece_at(to)))
}

/// Checks if a piece is stopped by another piece standing between its
/// square and `to`.
///
/// Only straight and diagonal lines can be obstructed. Any other shape,
/// like the knight's, jumps. The target square itself is not part of the
/// path.
pub fn is_blocked(pos: &Position, piece: &Piece, to: Square) -> bool {
    let from = piece.square;
    let (dx, dy) = from.delta(to);
    if !(dx == 0 || dy == 0 || dx == dy) {
        return false;
    }

    let step_x = (i32::from(to.x()) - i32::from(from.x())).signum();
    let step_y = (i32::from(to.y()) - i32::from(from.y())).signum();

    let mut sq = from;
    while let Some(next) = sq.offset(step_x, step_y) {
        if next == to {
            break;
        }
        if pos.board().is_occupied(next) {
            return true;
        }
        sq = next;
    }
    false
}

/// All squares `piece` may move to, ignoring the safety of its own king.
///
/// Each of the 64 squares is tested with [`is_move_legal()`].
pub fn legal_moves(pos: &Position, piece: &Piece) -> Bitboard {
    Bitboard::FULL
        .into_iter()
        .filter(|&to| is_move_legal(pos, piece, to, pos.piece_at(to)))
        .collect()
}

/// All squares that some live piece of `color` may move to.
///
/// Squares held by pieces of `color` are never part of the map, so they
/// count as unprotected.
pub fn threat_map(pos: &Position, color: Color) -> Bitboard {
    pos.pieces(color)
        .fold(Bitboard::EMPTY, |map, piece| map | legal_moves(pos, piece))
}

/// Checks if the king of `color` stands on a square the opponent
/// threatens.
pub fn is_check(pos: &Position, color: Color) -> bool {
    threat_map(pos, !color).contains(pos.king(color).square)
}

/// Pieces of the opponent of `color` that can move onto the king of
/// `color`.
pub fn checkers<'a>(pos: &'a Position, color: Color) -> impl Iterator<Item = &'a Piece> + 'a {
    let king = pos.king(color).square;
    pos.pieces(!color)
        .filter(move |piece| is_move_legal(pos, piece, king, pos.piece_at(king)))
}

/// Checks if the king of `defender` has no square to escape to.
///
/// The candidate squares are the legal moves of the king and its current
/// square. Every candidate that the opponent threatens is dropped.
///
/// This only looks at the king. Capturing the checking piece or blocking
/// its path is not considered, so some positions are reported as mate even
/// though the defender could save the king.
pub fn is_mate(pos: &Position, defender: Color) -> bool {
    let king = pos.king(defender);
    let escapes = legal_moves(pos, king).with(king.square);
    (escapes - threat_map(pos, !defender)).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn setup(board: &str) -> Position {
        board.parse().expect("valid board")
    }

    fn moves_of(pos: &Position, sq: Square) -> Bitboard {
        legal_moves(pos, pos.piece_at(sq).expect("piece on square"))
    }

    #[test]
    fn test_opening_move_counts() {
        let pos = Position::new();
        let total: usize = pos
            .pieces(Color::White)
            .map(|piece| legal_moves(&pos, piece).count())
            .sum();
        assert_eq!(total, 20);
        for piece in pos.pieces(Color::Black) {
            let expected = match piece.role {
                Role::Pawn => 2,
                Role::Knight => 2,
                _ => 0,
            };
            assert_eq!(legal_moves(&pos, piece).count(), expected, "{:?}", piece);
        }
    }

    #[test]
    fn test_blocked_lines() {
        let pos = setup("4k3/8/8/8/3p4/8/3R1p2/4K3");
        let rook = pos.piece_at(Square::D2).expect("rook");
        assert!(!is_blocked(&pos, rook, Square::D3));
        assert!(!is_blocked(&pos, rook, Square::D4));
        assert!(is_blocked(&pos, rook, Square::D5));
        assert!(is_blocked(&pos, rook, Square::G2));
        assert!(!is_blocked(&pos, rook, Square::F2));
        assert!(!is_blocked(&pos, rook, Square::A2));
    }

    #[test]
    fn test_blocked_diagonal() {
        let pos = setup("4k3/8/8/8/8/2p5/8/B3K3");
        let bishop = pos.piece_at(Square::A1).expect("bishop");
        assert!(!is_blocked(&pos, bishop, Square::B2));
        assert!(!is_blocked(&pos, bishop, Square::C3));
        assert!(is_blocked(&pos, bishop, Square::D4));
        assert!(is_blocked(&pos, bishop, Square::H8));
        assert_eq!(
            legal_moves(&pos, bishop),
            Bitboard::from(Square::B2) | Bitboard::from(Square::C3)
        );
    }

    #[test]
    fn test_knight_jumps() {
        let pos = setup("4k3/8/8/2ppp3/2pNp3/2ppp3/8/4K3");
        let moves = moves_of(&pos, Square::D4);
        let expected: Bitboard = [
            Square::C6,
            Square::E6,
            Square::B5,
            Square::F5,
            Square::B3,
            Square::F3,
            Square::C2,
            Square::E2,
        ]
        .into_iter()
        .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_pawn_capture_needs_enemy() {
        let pos = setup("4k3/8/8/8/8/3p1P2/4P3/4K3");
        assert_eq!(
            moves_of(&pos, Square::E2),
            [Square::D3, Square::E3, Square::E4].into_iter().collect::<Bitboard>()
        );
    }

    #[test]
    fn test_pawn_blocked_double_step() {
        let pos = setup("4k3/8/8/8/8/4n3/4P3/4K3");
        assert_eq!(moves_of(&pos, Square::E2), Bitboard::EMPTY);

        let pos = setup("4k3/8/8/8/4n3/8/4P3/4K3");
        assert_eq!(moves_of(&pos, Square::E2), Bitboard::from(Square::E3));
    }

    #[test]
    fn test_threat_map_opening() {
        let pos = Position::new();
        assert_eq!(threat_map(&pos, Color::White), Bitboard::row(4) | Bitboard::row(5));
        assert_eq!(threat_map(&pos, Color::Black), Bitboard::row(2) | Bitboard::row(3));
    }

    #[test]
    fn test_check() {
        let pos = setup("4k3/8/8/8/8/8/8/R3K2r");
        assert!(is_check(&pos, Color::White));
        assert!(!is_check(&pos, Color::Black));
        let checkers: arrayvec::ArrayVec<Square, 2> =
            checkers(&pos, Color::White).map(|p| p.square).collect();
        assert_eq!(checkers.as_slice(), &[Square::H1]);
    }

    #[test]
    fn test_back_rank_mate() {
        let pos = setup("R6k/6pp/8/8/8/8/8/6K1");
        assert!(is_check(&pos, Color::Black));
        assert!(is_mate(&pos, Color::Black));
        assert!(!is_mate(&pos, Color::White));
    }

    #[test]
    fn test_king_hides_behind_itself() {
        // h8 looks safe because the king itself blocks the rook's line.
        let pos = setup("R5k1/5ppp/8/8/8/8/8/6K1");
        assert!(is_check(&pos, Color::Black));
        assert!(!threat_map(&pos, Color::White).contains(Square::H8));
        assert!(!is_mate(&pos, Color::Black));
    }

    #[test]
    fn test_escape_prevents_mate() {
        let pos = setup("R6k/7p/8/8/8/8/8/6K1");
        assert!(is_check(&pos, Color::Black));
        assert!(!is_mate(&pos, Color::Black));
    }

    #[test]
    fn test_mate_ignores_captures() {
        // The rook on a7 could take the checking rook, yet the king has no
        // square left.
        let pos = setup("R6k/r5pp/8/8/8/8/8/6K1");
        assert!(is_check(&pos, Color::Black));
        assert!(is_mate(&pos, Color::Black));
    }
}
