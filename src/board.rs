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

//! Occupancy of the 8×8 grid.

use core::fmt;

use crate::{bitboard::Bitboard, piece::PieceId, square::Square};

/// Which piece stands on which square.
///
/// The board stores [`PieceId`]s only. The pieces themselves live in the
/// arena of the owning [`Position`](crate::Position). There is no rule
/// knowledge here.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    slots: [Option<PieceId>; 64],
    occupied: Bitboard,
}

impl Board {
    pub const fn empty() -> Board {
        Board {
            slots: [None; 64],
            occupied: Bitboard::EMPTY,
        }
    }

    #[inline]
    pub const fn get(&self, sq: Square) -> Option<PieceId> {
        self.slots[sq.to_usize()]
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    /// Puts `id` on `sq`, returning the id that was there before.
    pub fn set(&mut self, sq: Square, id: PieceId) -> Option<PieceId> {
        self.occupied.add(sq);
        self.slots[sq.to_usize()].replace(id)
    }

    pub fn remove(&mut self, sq: Square) -> Option<PieceId> {
        self.occupied.discard(sq);
        self.slots[sq.to_usize()].take()
    }

    /// Moves whatever stands on `from` to `to`. Returns the id that was
    /// displaced from `to`, if any. Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<PieceId> {
        let id = self.remove(from)?;
        self.set(to, id)
    }

    /// Iterates over occupied squares and their pieces.
    pub fn iter(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.occupied
            .into_iter()
            .filter_map(|sq| self.get(sq).map(|id| (sq, id)))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut board = Board::empty();
        assert_eq!(board.set(Square::E4, PieceId(3)), None);
        assert!(board.is_occupied(Square::E4));
        assert_eq!(board.set(Square::E4, PieceId(5)), Some(PieceId(3)));
        assert_eq!(board.get(Square::E4), Some(PieceId(5)));
        assert_eq!(board.remove(Square::E4), Some(PieceId(5)));
        assert_eq!(board.occupied(), Bitboard::EMPTY);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_relocate() {
        let mut board = Board::empty();
        board.set(Square::A1, PieceId(0));
        board.set(Square::A8, PieceId(1));
        assert_eq!(board.relocate(Square::A1, Square::A8), Some(PieceId(1)));
        assert_eq!(board.get(Square::A1), None);
        assert_eq!(board.get(Square::A8), Some(PieceId(0)));
        assert_eq!(board.occupied().count(), 1);
    }

    #[test]
    fn test_iter() {
        let mut board = Board::empty();
        board.set(Square::H1, PieceId(2));
        board.set(Square::B8, PieceId(7));
        let items: arrayvec::ArrayVec<_, 4> = board.iter().collect();
        assert_eq!(
            items.as_slice(),
            &[(Square::B8, PieceId(7)), (Square::H1, PieceId(2))]
        );
    }
}
