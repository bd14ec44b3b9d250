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

//! Pieces, rosters and board kept in sync.
//!
//! # Examples
//!
//! ```
//! use chess_referee::{Color, Position, Role, Square};
//!
//! let pos = Position::new();
//! assert_eq!(pos.to_string(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
//! assert_eq!(pos.roster(Color::White).len(), 16);
//!
//! let king = pos.king(Color::Black);
//! assert_eq!(king.role, Role::King);
//! assert_eq!(king.square, Square::E8);
//! ```

use core::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::{
    board::Board,
    color::{ByColor, Color},
    piece::{Piece, PieceId},
    role::Role,
    square::Square,
};

/// Maximum number of pieces per side.
pub const MAX_PIECES_PER_COLOR: usize = 16;

const MAX_PIECES: usize = 2 * MAX_PIECES_PER_COLOR;

/// Live pieces of one side, in a stable order.
pub type Roster = ArrayVec<PieceId, MAX_PIECES_PER_COLOR>;

/// The pieces of both players and where they stand.
///
/// Every piece ever placed stays in an arena addressed by [`PieceId`].
/// A piece is live while the board slot at its square refers back to it.
/// Captured pieces leave their roster and the board but keep their id, so
/// that a capture can be reverted exactly (see [`Position::undo()`]).
///
/// Each side has exactly one king.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Position {
    pieces: ArrayVec<Piece, MAX_PIECES>,
    board: Board,
    rosters: ByColor<Roster>,
    kings: ByColor<PieceId>,
}

impl Position {
    /// The standard opening position.
    ///
    /// Rosters list officers from the a-file to the h-file followed by the
    /// pawns. Black's roster is in reverse order.
    pub fn new() -> Position {
        let mut pos = Position::empty();
        for color in Color::ALL {
            for (x, role) in (0..).zip(Role::HOME_ROW) {
                pos.push(color, role, Square::new(x, color.home_row()));
            }
            for x in 0..8 {
                pos.push(color, Role::Pawn, Square::new(x, color.pawn_row()));
            }
        }
        pos.rosters.black.reverse();
        pos
    }

    /// Sets up a position from `(square, color, role)` placements.
    ///
    /// Pieces are placed in iteration order, which also determines the
    /// roster order. Every piece starts unmoved on its square.
    ///
    /// # Errors
    ///
    /// Fails if a side does not have exactly one king, has more than
    /// [`MAX_PIECES_PER_COLOR`] pieces, if two placements share a square,
    /// or if there are no pieces at all.
    ///
    /// ```
    /// use chess_referee::{Color, Position, PositionErrorKinds, Role, Square};
    ///
    /// let pos = Position::from_placements([
    ///     (Square::E1, Color::White, Role::King),
    ///     (Square::E8, Color::Black, Role::King),
    ///     (Square::A8, Color::Black, Role::Rook),
    /// ])?;
    /// assert_eq!(pos.to_string(), "r3k3/8/8/8/8/8/8/4K3");
    ///
    /// let err = Position::from_placements([(Square::E1, Color::White, Role::King)])
    ///     .unwrap_err();
    /// assert_eq!(err.kinds(), PositionErrorKinds::MISSING_KING);
    /// # Ok::<_, chess_referee::PositionError>(())
    /// ```
    pub fn from_placements<I>(placements: I) -> Result<Position, PositionError>
    where
        I: IntoIterator<Item = (Square, Color, Role)>,
    {
        let mut errors = PositionErrorKinds::empty();
        let mut kings = ByColor::<usize>::default();
        let mut pos = Position::empty();

        for (sq, color, role) in placements {
            if role == Role::King {
                *kings.get_mut(color) += 1;
            }
            if pos.board.is_occupied(sq) {
                errors |= PositionErrorKinds::INVALID_BOARD;
            } else if pos.rosters.get(color).is_full() {
                errors |= PositionErrorKinds::TOO_MANY_PIECES;
            } else {
                pos.push(color, role, sq);
            }
        }

        if pos.pieces.is_empty() {
            errors |= PositionErrorKinds::EMPTY_BOARD;
        }
        if kings.iter().any(|&n| n == 0) {
            errors |= PositionErrorKinds::MISSING_KING;
        }
        if kings.iter().any(|&n| n > 1) {
            errors |= PositionErrorKinds::TOO_MANY_KINGS;
        }

        if errors.is_empty() {
            Ok(pos)
        } else {
            Err(PositionError { errors })
        }
    }

    fn empty() -> Position {
        Position {
            pieces: ArrayVec::new(),
            board: Board::empty(),
            rosters: ByColor::default(),
            kings: ByColor::new_with(|_| PieceId(0)),
        }
    }

    // Caller checks capacity and that `sq` is empty.
    fn push(&mut self, color: Color, role: Role, sq: Square) {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece::new(color, role, sq));
        self.board.set(sq, id);
        self.rosters.get_mut(color).push(id);
        if role == Role::King {
            *self.kings.get_mut(color) = id;
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets a piece by id. Captured pieces remain addressable.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this position.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.to_usize()]
    }

    /// Gets the piece with `id` if it belongs to this position.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.to_usize())
    }

    #[inline]
    pub fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.board.get(sq)
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.get(sq).map(|id| self.piece(id))
    }

    /// Checks if `id` refers to a piece that is still on the board.
    pub fn is_live(&self, id: PieceId) -> bool {
        self.get(id)
            .is_some_and(|piece| self.board.get(piece.square) == Some(id))
    }

    /// Live pieces of `color` in roster order.
    #[inline]
    pub fn roster(&self, color: Color) -> &[PieceId] {
        self.rosters.get(color)
    }

    /// Iterates over the live pieces of `color` in roster order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.roster(color).iter().map(|&id| self.piece(id))
    }

    #[inline]
    pub fn king_id(&self, color: Color) -> PieceId {
        *self.kings.get(color)
    }

    #[inline]
    pub fn king(&self, color: Color) -> &Piece {
        self.piece(self.king_id(color))
    }

    /// Moves a piece without checking legality, capturing whatever stands
    /// on `to`. Returns what is needed to revert the move with
    /// [`Position::undo()`].
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this position.
    #[must_use = "dropping the undo record makes the move irreversible"]
    pub fn play_unchecked(&mut self, id: PieceId, to: Square) -> Undo {
        let from = self.piece(id).square;

        let capture = self.board.remove(to).map(|captured| {
            let color = self.piece(captured).color;
            let roster = self.rosters.get_mut(color);
            let index = roster
                .iter()
                .position(|&other| other == captured)
                .unwrap_or(roster.len());
            if index < roster.len() {
                roster.remove(index);
            }
            Capture {
                id: captured,
                index,
            }
        });

        self.board.relocate(from, to);
        self.pieces[id.to_usize()].square = to;

        Undo {
            id,
            from,
            to,
            capture,
        }
    }

    /// Reverts a move made by [`Position::play_unchecked()`].
    ///
    /// Undo records must be applied in reverse order of the moves that
    /// produced them.
    pub fn undo(&mut self, undo: Undo) {
        self.board.relocate(undo.to, undo.from);
        self.pieces[undo.id.to_usize()].square = undo.from;

        if let Some(capture) = undo.capture {
            let color = self.piece(capture.id).color;
            self.board.set(undo.to, capture.id);
            let roster = self.rosters.get_mut(color);
            let index = capture.index.min(roster.len());
            roster.insert(index, capture.id);
        }
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Capture {
    id: PieceId,
    index: usize,
}

/// Record of a move played with [`Position::play_unchecked()`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Undo {
    id: PieceId,
    from: Square,
    to: Square,
    capture: Option<Capture>,
}

impl Undo {
    pub const fn piece(&self) -> PieceId {
        self.id
    }

    pub const fn from(&self) -> Square {
        self.from
    }

    pub const fn to(&self) -> Square {
        self.to
    }

    /// The captured piece, if any.
    pub fn captured(&self) -> Option<PieceId> {
        self.capture.map(|c| c.id)
    }
}

impl fmt::Display for Position {
    /// Writes the board field of a FEN, Black's home row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            let mut empty = 0;
            for x in 0..8 {
                match self.piece_at(Square::new(x, y)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        f.write_char(piece.char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if y < 7 {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses the board field of a FEN, for example
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    fn from_str(s: &str) -> Result<Position, PositionError> {
        Position::from_ascii(s.as_bytes())
    }
}

impl Position {
    /// Parses the board field of a FEN from bytes.
    pub fn from_ascii(s: &[u8]) -> Result<Position, PositionError> {
        let invalid = PositionError {
            errors: PositionErrorKinds::INVALID_BOARD,
        };

        let mut placements = ArrayVec::<(Square, Color, Role), 64>::new();
        let mut rows = 0;

        for (y, row) in s.split(|&ch| ch == b'/').enumerate() {
            if y >= 8 {
                return Err(invalid);
            }
            rows += 1;
            let mut x = 0;
            for &ch in row {
                if x >= 8 {
                    return Err(invalid);
                }
                match ch {
                    b'1'..=b'8' => x += ch - b'0',
                    _ => {
                        let role = Role::from_char(char::from(ch)).ok_or(invalid.clone())?;
                        let color = Color::from_white(ch.is_ascii_uppercase());
                        placements.push((Square::new(x, y as u8), color, role));
                        x += 1;
                    }
                }
            }
            if x != 8 {
                return Err(invalid);
            }
        }

        if rows != 8 {
            return Err(invalid);
        }

        Position::from_placements(placements)
    }
}

bitflags! {
    /// Reasons for a [`Position`] to be rejected.
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// The board description could not be parsed, or two pieces share
        /// a square.
        const INVALID_BOARD = 1 << 0;
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 1;
        /// A side has no king.
        const MISSING_KING = 1 << 2;
        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 3;
        /// A side has more than 16 pieces.
        const TOO_MANY_PIECES = 1 << 4;
        /// The side that just moved is in check.
        const OPPOSITE_CHECK = 1 << 5;
    }
}

const REASONS: [(PositionErrorKinds, &str); 6] = [
    (PositionErrorKinds::INVALID_BOARD, "invalid board"),
    (PositionErrorKinds::EMPTY_BOARD, "empty board"),
    (PositionErrorKinds::MISSING_KING, "missing king"),
    (PositionErrorKinds::TOO_MANY_KINGS, "too many kings"),
    (PositionErrorKinds::TOO_MANY_PIECES, "too many pieces"),
    (PositionErrorKinds::OPPOSITE_CHECK, "opposite check"),
];

/// Error when trying to set up an invalid [`Position`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionError {
    pub(crate) errors: PositionErrorKinds,
}

impl PositionError {
    pub fn kinds(&self) -> PositionErrorKinds {
        self.errors
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position: ")?;

        let mut first = true;
        for (kind, reason) in REASONS {
            if self.errors.contains(kind) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(reason)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Error for PositionError {}

#[cfg(test)]
mod tests {
    #[cfg(feature = "alloc")]
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_opening_rosters() {
        let pos = Position::new();
        let white: ArrayVec<Role, 16> = pos.pieces(Color::White).map(|p| p.role).collect();
        assert_eq!(&white[..8], &Role::HOME_ROW);
        assert!(white[8..].iter().all(|&r| r == Role::Pawn));

        let black: ArrayVec<Square, 16> = pos.pieces(Color::Black).map(|p| p.square).collect();
        assert_eq!(black[0], Square::H7);
        assert_eq!(black[15], Square::A8);
    }

    #[test]
    fn test_board_synchronized() {
        let pos = Position::new();
        for color in Color::ALL {
            for &id in pos.roster(color) {
                assert!(pos.is_live(id));
                assert_eq!(pos.id_at(pos.piece(id).square), Some(id));
            }
        }
        assert_eq!(pos.board().occupied().count(), 32);
    }

    #[test]
    fn test_capture_and_undo() {
        let mut pos: Position = "4k3/8/8/3p4/4P3/8/8/4K3".parse().expect("valid board");
        let before = pos.clone();
        let pawn = pos.id_at(Square::E4).expect("white pawn");
        let victim = pos.id_at(Square::D5).expect("black pawn");

        let undo = pos.play_unchecked(pawn, Square::D5);
        assert_eq!(undo.piece(), pawn);
        assert_eq!(undo.from(), Square::E4);
        assert_eq!(undo.to(), Square::D5);
        assert_eq!(undo.captured(), Some(victim));
        assert!(!pos.is_live(victim));
        assert_eq!(pos.roster(Color::Black).len(), 1);
        assert_eq!(pos.piece(pawn).square, Square::D5);
        assert_eq!(pos.id_at(Square::E4), None);

        pos.undo(undo);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_roster_order_restored() {
        let mut pos = Position::new();
        let before = pos.clone();
        let victim = pos.id_at(Square::D7).expect("black pawn");
        let queen = pos.id_at(Square::D1).expect("white queen");
        let undo = pos.play_unchecked(queen, Square::D7);
        assert!(!pos.roster(Color::Black).contains(&victim));
        pos.undo(undo);
        assert_eq!(pos.roster(Color::Black), before.roster(Color::Black));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_parse_and_display() {
        for board in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "6k1/5ppp/8/8/8/8/8/R5K1",
            "k7/8/8/8/8/8/8/7K",
        ] {
            let pos: Position = board.parse().expect("valid board");
            assert_eq!(pos.to_string(), board);
        }
        assert_eq!(
            Position::new().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn test_parse_errors() {
        let kinds = |s: &str| s.parse::<Position>().unwrap_err().kinds();
        assert_eq!(
            kinds("8/8/8/8/8/8/8/8"),
            PositionErrorKinds::EMPTY_BOARD | PositionErrorKinds::MISSING_KING
        );
        assert_eq!(kinds("k7/8/8/8/8/8/8/8"), PositionErrorKinds::MISSING_KING);
        assert_eq!(kinds("kk6/8/8/8/8/8/8/7K"), PositionErrorKinds::TOO_MANY_KINGS);
        assert_eq!(kinds("k7/8/8/8/8/8/8"), PositionErrorKinds::INVALID_BOARD);
        assert_eq!(kinds("k8/8/8/8/8/8/8/7K"), PositionErrorKinds::INVALID_BOARD);
        assert_eq!(kinds("k6/8/8/8/8/8/8/7K"), PositionErrorKinds::INVALID_BOARD);
        assert_eq!(kinds("kx6/8/8/8/8/8/8/7K"), PositionErrorKinds::INVALID_BOARD);
        assert_eq!(
            kinds("k7/PPPPPPPP/PPPPPPPP/PPPPPPPP/8/8/8/7K"),
            PositionErrorKinds::TOO_MANY_PIECES
        );
    }

    #[test]
    fn test_error_display() {
        let err = "8/8/8/8/8/8/8/8".parse::<Position>().unwrap_err();
        let mut buf = arrayvec::ArrayString::<64>::new();
        fmt::Write::write_fmt(&mut buf, format_args!("{err}")).expect("fits");
        assert_eq!(buf.as_str(), "illegal position: empty board, missing king");
    }
}
