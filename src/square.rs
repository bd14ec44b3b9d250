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

use core::{error::Error, fmt, str::FromStr};

use crate::util::{board_index, overflow_error};

/// A square of the 8×8 board.
///
/// Squares are addressed by `(x, y)` coordinates in `0..8`. `x` grows from
/// the a-file to the h-file, `y` grows from Black's home row (rank 8) down
/// to White's home row (rank 1). A `Square` is always on the board.
///
/// # Examples
///
/// ```
/// use chess_referee::Square;
///
/// let sq = Square::from_coords(4, 6).expect("on board");
/// assert_eq!(sq, Square::E2);
/// assert_eq!(sq.to_string(), "e2");
///
/// assert_eq!(Square::from_coords(8, 0), None);
/// assert_eq!(Square::from_coords(3, -1), None);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square at `(x, y)`, or `None` if the coordinates are off
    /// the board.
    #[inline]
    pub const fn from_coords(x: i32, y: i32) -> Option<Square> {
        match board_index(x, y) {
            Some(index) => Some(Square(index)),
            None => None,
        }
    }

    /// Gets the square at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in `0..8`.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Square {
        assert!(x < 8 && y < 8, "square coordinates out of range");
        Square(x + 8 * y)
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.0 & 7
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.0 >> 3
    }

    /// The index `x + 8 * y`, in `0..64`.
    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Moves by `(dx, dy)`, returning `None` when leaving the board.
    ///
    /// ```
    /// use chess_referee::Square;
    ///
    /// assert_eq!(Square::E2.offset(0, -2), Some(Square::E4));
    /// assert_eq!(Square::H1.offset(1, 0), None);
    /// ```
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        match ((self.x() as i32).checked_add(dx), (self.y() as i32).checked_add(dy)) {
            (Some(x), Some(y)) => Square::from_coords(x, y),
            _ => None,
        }
    }

    /// Absolute coordinate distances `(|dx|, |dy|)` to another square.
    #[inline]
    pub const fn delta(self, other: Square) -> (u8, u8) {
        (self.x().abs_diff(other.x()), self.y().abs_diff(other.y()))
    }

    /// The file letter, `a` to `h`.
    pub const fn file_char(self) -> char {
        (b'a' + self.x()) as char
    }

    /// The rank digit, `8` on Black's home row down to `1`.
    pub const fn rank_char(self) -> char {
        (b'8' - self.y()) as char
    }

    /// Parses a square name like `e4`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square::new(file - b'a', b'8' - rank))
            }
            _ => Err(ParseSquareError),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file_char().to_ascii_uppercase(),
            self.rank_char()
        )
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

macro_rules! try_square_from_int_impl {
    ($($t:ty)+) => {
        $(impl TryFrom<$t> for Square {
            type Error = core::num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Square, Self::Error> {
                match u8::try_from(value) {
                    Ok(index) if index < 64 => Ok(Square(index)),
                    _ => Err(overflow_error()),
                }
            }
        })+
    }
}

try_square_from_int_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

impl From<Square> for usize {
    #[inline]
    fn from(sq: Square) -> usize {
        sq.to_usize()
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("square name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

macro_rules! square_consts {
    ($($name:ident = ($x:expr, $y:expr),)+) => {
        impl Square {
            $(
                #[allow(missing_docs)]
                pub const $name: Square = Square::new($x, $y);
            )+
        }
    }
}

square_consts! {
    A8 = (0, 0),
    B8 = (1, 0),
    C8 = (2, 0),
    D8 = (3, 0),
    E8 = (4, 0),
    F8 = (5, 0),
    G8 = (6, 0),
    H8 = (7, 0),
    A7 = (0, 1),
    B7 = (1, 1),
    C7 = (2, 1),
    D7 = (3, 1),
    E7 = (4, 1),
    F7 = (5, 1),
    G7 = (6, 1),
    H7 = (7, 1),
    A6 = (0, 2),
    B6 = (1, 2),
    C6 = (2, 2),
    D6 = (3, 2),
    E6 = (4, 2),
    F6 = (5, 2),
    G6 = (6, 2),
    H6 = (7, 2),
    A5 = (0, 3),
    B5 = (1, 3),
    C5 = (2, 3),
    D5 = (3, 3),
    E5 = (4, 3),
    F5 = (5, 3),
    G5 = (6, 3),
    H5 = (7, 3),
    A4 = (0, 4),
    B4 = (1, 4),
    C4 = (2, 4),
    D4 = (3, 4),
    E4 = (4, 4),
    F4 = (5, 4),
    G4 = (6, 4),
    H4 = (7, 4),
    A3 = (0, 5),
    B3 = (1, 5),
    C3 = (2, 5),
    D3 = (3, 5),
    E3 = (4, 5),
    F3 = (5, 5),
    G3 = (6, 5),
    H3 = (7, 5),
    A2 = (0, 6),
    B2 = (1, 6),
    C2 = (2, 6),
    D2 = (3, 6),
    E2 = (4, 6),
    F2 = (5, 6),
    G2 = (6, 6),
    H2 = (7, 6),
    A1 = (0, 7),
    B1 = (1, 7),
    C1 = (2, 7),
    D1 = (3, 7),
    E1 = (4, 7),
    F1 = (5, 7),
    G1 = (6, 7),
    H1 = (7, 7),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords() {
        for y in 0..8 {
            for x in 0..8 {
                let sq = Square::new(x, y);
                assert_eq!(sq.x(), x);
                assert_eq!(sq.y(), y);
                assert_eq!(
                    Square::from_coords(i32::from(x), i32::from(y)),
                    Some(sq)
                );
            }
        }
    }

    #[test]
    fn test_off_board() {
        for y in -3..11 {
            for x in -3..11 {
                let on_board = (0..8).contains(&x) && (0..8).contains(&y);
                assert_eq!(Square::from_coords(x, y).is_some(), on_board);
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Square::A8, Square::new(0, 0));
        assert_eq!(Square::H1, Square::new(7, 7));
        assert_eq!(Square::E1.to_usize(), 60);
        assert_eq!("e1".parse(), Ok(Square::E1));
        assert_eq!("a8".parse(), Ok(Square::A8));
        assert_eq!("i1".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("e9".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("e".parse::<Square>(), Err(ParseSquareError));
    }

    #[test]
    fn test_offset_far_off_board() {
        assert_eq!(Square::H1.offset(i32::MAX, 0), None);
        assert_eq!(Square::H1.offset(0, i32::MAX), None);
        assert_eq!(Square::A8.offset(i32::MIN, 0), None);
        assert_eq!(Square::A8.offset(0, i32::MIN), None);
        assert_eq!(Square::A8.offset(i32::MAX, i32::MIN), None);
        assert_eq!(Square::D4.offset(1, -1), Some(Square::E5));
    }

    #[test]
    fn test_delta() {
        assert_eq!(Square::B1.delta(Square::C3), (1, 2));
        assert_eq!(Square::C3.delta(Square::B1), (1, 2));
        assert_eq!(Square::D4.delta(Square::D4), (0, 0));
    }

    #[test]
    fn test_try_from_int() {
        assert_eq!(Square::try_from(63u32), Ok(Square::H1));
        assert!(Square::try_from(64u32).is_err());
        assert!(Square::try_from(-1i32).is_err());
    }
}
