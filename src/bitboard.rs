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

//! Sets of squares.
//!
//! Legal destinations, threat maps and occupancy are all [`Bitboard`]s.
//!
//! # Example
//!
//! ```
//! use chess_referee::{Bitboard, Square};
//!
//! let mut set = Bitboard::EMPTY;
//! set.add(Square::E4);
//! set.add(Square::E3);
//!
//! assert!(set.contains(Square::E4));
//! assert_eq!(set.count(), 2);
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), [Square::E4, Square::E3]);
//! ```

use core::{fmt, iter::FusedIterator, ops};

use crate::square::Square;

/// A set of [`Square`]s, one bit per square.
///
/// Iteration yields squares in ascending index order, that is row by row
/// from Black's home row, and from the a-file to the h-file within a row.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares.
    pub const FULL: Bitboard = Bitboard(!0);

    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1 << sq.to_u8())
    }

    /// All squares of the row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in `0..8`.
    #[inline]
    pub const fn row(y: u8) -> Bitboard {
        assert!(y < 8, "row out of range");
        Bitboard(0xff << (8 * y))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Bitboard::from_square(sq).0 != 0
    }

    #[inline]
    pub fn add(&mut self, sq: Square) {
        self.0 |= Bitboard::from_square(sq).0;
    }

    #[inline]
    pub fn discard(&mut self, sq: Square) {
        self.0 &= !Bitboard::from_square(sq).0;
    }

    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | Bitboard::from_square(sq).0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !Bitboard::from_square(sq).0)
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The square with the lowest index.
    #[inline]
    pub fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Square::try_from(self.0.trailing_zeros()).ok()
        }
    }

    #[inline]
    pub const fn is_disjoint(self, other: Bitboard) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<Square> {
        let sq = self.first()?;
        self.0 &= self.0.wrapping_sub(1);
        Some(sq)
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T>(iter: T) -> Bitboard
    where
        T: IntoIterator<Item = Square>,
    {
        let mut result = Bitboard::EMPTY;
        result.extend(iter);
        result
    }
}

impl Extend<Square> for Bitboard {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = Square>,
    {
        for sq in iter {
            self.add(sq);
        }
    }
}

impl fmt::Debug for Bitboard {
    /// Renders the set as a grid, Black's home row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..8 {
            for x in 0..8 {
                f.write_str(if self.contains(Square::new(x, y)) { "1" } else { "." })?;
                f.write_str(if x < 7 { " " } else { "\n" })?;
            }
        }
        Ok(())
    }
}

macro_rules! bitboard_binop_impl {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl ops::$trait for Bitboard {
            type Output = Bitboard;

            #[inline]
            fn $fn(self, rhs: Bitboard) -> Bitboard {
                Bitboard(self.0 $op rhs.0)
            }
        }

        impl ops::$assign_trait for Bitboard {
            #[inline]
            fn $assign_fn(&mut self, rhs: Bitboard) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

bitboard_binop_impl!(BitOr, bitor, BitOrAssign, bitor_assign, |);
bitboard_binop_impl!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
bitboard_binop_impl!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl ops::Sub for Bitboard {
    type Output = Bitboard;

    /// Set difference.
    #[inline]
    fn sub(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & !rhs.0)
    }
}

impl ops::SubAssign for Bitboard {
    #[inline]
    fn sub_assign(&mut self, rhs: Bitboard) {
        self.0 &= !rhs.0;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

/// Iterator over the squares of a [`Bitboard`].
#[derive(Debug, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_order() {
        let bb = Bitboard::EMPTY
            .with(Square::H1)
            .with(Square::A8)
            .with(Square::E4);
        let mut iter = bb.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(Square::A8));
        assert_eq!(iter.next(), Some(Square::E4));
        assert_eq!(iter.next(), Some(Square::H1));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_full() {
        assert_eq!(Bitboard::FULL.count(), 64);
        assert_eq!(Bitboard::FULL.into_iter().count(), 64);
        assert_eq!(!Bitboard::FULL, Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL.first(), Some(Square::A8));
    }

    #[test]
    fn test_rows() {
        let rows = (0..8).fold(Bitboard::EMPTY, |acc, y| acc | Bitboard::row(y));
        assert_eq!(rows, Bitboard::FULL);
        assert!(Bitboard::row(0).contains(Square::H8));
        assert!(!Bitboard::row(0).contains(Square::A7));
    }

    #[test]
    fn test_set_ops() {
        let a = Bitboard::from(Square::D4) | Bitboard::from(Square::D5);
        let b = Bitboard::from(Square::D5) | Bitboard::from(Square::E5);
        assert_eq!((a & b).first(), Some(Square::D5));
        assert_eq!(a - b, Bitboard::from(Square::D4));
        assert_eq!((a ^ b).count(), 2);
        assert!(a.without(Square::D5).is_disjoint(b));
    }
}
