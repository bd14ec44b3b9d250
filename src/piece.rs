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

use core::fmt;

use crate::{color::Color, role::Role, square::Square};

/// Handle of a piece in a [`Position`](crate::Position).
///
/// Ids are assigned in placement order and stay valid for the lifetime of
/// the position, including while the piece is captured.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece with [`Color`] and [`Role`] standing on a [`Square`].
///
/// `origin` is the square the piece was placed on and never changes. It
/// only matters for the pawn double step.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub square: Square,
    pub origin: Square,
}

impl Piece {
    /// A piece that has not moved yet.
    pub const fn new(color: Color, role: Role, square: Square) -> Piece {
        Piece {
            color,
            role,
            square,
            origin: square,
        }
    }

    /// The FEN letter, uppercase for White.
    pub const fn char(&self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.square.to_u8() != self.origin.to_u8()
    }

    /// Checks if moving to `to` matches the geometric pattern of the role,
    /// ignoring the board.
    ///
    /// `attack` tells whether `to` holds an enemy piece. Only pawns care.
    /// Whether `to` holds a friendly piece and whether the path is clear
    /// are left to the [`referee`](crate::referee).
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_referee::{Color, Piece, Role, Square};
    ///
    /// let knight = Piece::new(Color::White, Role::Knight, Square::B1);
    /// assert!(knight.is_shape_legal(Square::C3, false));
    /// assert!(!knight.is_shape_legal(Square::B3, false));
    ///
    /// let pawn = Piece::new(Color::White, Role::Pawn, Square::E2);
    /// assert!(pawn.is_shape_legal(Square::E4, false));
    /// assert!(!pawn.is_shape_legal(Square::E4, true));
    /// assert!(pawn.is_shape_legal(Square::D3, true));
    /// ```
    pub fn is_shape_legal(&self, to: Square, attack: bool) -> bool {
        let (dx, dy) = self.square.delta(to);
        match self.role {
            Role::King => dx <= 1 && dy <= 1,
            Role::Queen => dx == 0 || dy == 0 || dx == dy,
            Role::Bishop => dx == dy,
            Role::Rook => dx == 0 || dy == 0,
            Role::Knight => (dx == 2 && dy == 1) || (dx == 1 && dy == 2),
            Role::Pawn => self.is_pawn_shape_legal(to, dx, dy, attack),
        }
    }

    fn is_pawn_shape_legal(&self, to: Square, dx: u8, dy: u8, attack: bool) -> bool {
        let advance = i32::from(to.y()) - i32::from(self.square.y());
        if advance.signum() != self.color.forward() {
            return false;
        }
        match (dx, dy) {
            (0, 1) => !attack,
            (1, 1) => attack,
            (0, 2) => !attack && !self.has_moved(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destinations(piece: &Piece, attack: bool) -> usize {
        (0..64u8)
            .filter_map(|i| Square::try_from(i).ok())
            .filter(|&sq| sq != piece.square && piece.is_shape_legal(sq, attack))
            .count()
    }

    #[test]
    fn test_shape_counts_from_center() {
        let at = |role| Piece::new(Color::White, role, Square::D4);
        assert_eq!(destinations(&at(Role::King), false), 8);
        assert_eq!(destinations(&at(Role::Knight), false), 8);
        assert_eq!(destinations(&at(Role::Rook), false), 14);
        assert_eq!(destinations(&at(Role::Bishop), false), 13);
        assert_eq!(destinations(&at(Role::Queen), false), 27);
    }

    #[test]
    fn test_pawn_direction() {
        let white = Piece::new(Color::White, Role::Pawn, Square::D4);
        assert!(white.is_shape_legal(Square::D5, false));
        assert!(!white.is_shape_legal(Square::D3, false));

        let black = Piece::new(Color::Black, Role::Pawn, Square::D5);
        assert!(black.is_shape_legal(Square::D4, false));
        assert!(!black.is_shape_legal(Square::D6, false));
        assert!(black.is_shape_legal(Square::E4, true));
        assert!(!black.is_shape_legal(Square::E4, false));
        assert!(!black.is_shape_legal(Square::E6, true));
    }

    #[test]
    fn test_pawn_double_step_only_from_origin() {
        let mut pawn = Piece::new(Color::Black, Role::Pawn, Square::C7);
        assert!(pawn.is_shape_legal(Square::C5, false));
        assert!(!pawn.is_shape_legal(Square::C5, true));

        pawn.square = Square::C6;
        assert!(pawn.has_moved());
        assert!(!pawn.is_shape_legal(Square::C4, false));
        assert!(pawn.is_shape_legal(Square::C5, false));
    }

    #[test]
    fn test_pawn_never_sideways() {
        let pawn = Piece::new(Color::White, Role::Pawn, Square::E2);
        assert!(!pawn.is_shape_legal(Square::F2, true));
        assert!(!pawn.is_shape_legal(Square::F2, false));
        assert!(!pawn.is_shape_legal(Square::G3, true));
    }

    #[test]
    fn test_char() {
        assert_eq!(Piece::new(Color::White, Role::Knight, Square::B1).char(), 'N');
        assert_eq!(Piece::new(Color::Black, Role::Queen, Square::D8).char(), 'q');
    }
}
