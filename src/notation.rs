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

//! Text forms of board input.
//!
//! A [`MoveRequest`] names a move by its origin and target squares, like
//! `e2e4`. A [`ClickRequest`] carries raw click coordinates, like `4,6`,
//! that may lie off the board.
//!
//! # Examples
//!
//! ```
//! use chess_referee::{ClickRequest, Game, MoveOutcome, MoveRequest, Square};
//!
//! let request: MoveRequest = "e2e4".parse()?;
//! assert_eq!(request.from, Square::E2);
//! assert_eq!(request.to, Square::E4);
//!
//! let mut game = Game::new();
//! assert_eq!(game.play(request), MoveOutcome::Applied);
//!
//! let click: ClickRequest = "4,-1".parse()?;
//! assert_eq!(click.square(), None);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use core::{error::Error, fmt, str::FromStr};

use crate::square::Square;

/// Error when parsing a [`MoveRequest`] or [`ClickRequest`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseMoveRequestError;

impl fmt::Display for ParseMoveRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid move request")
    }
}

impl Error for ParseMoveRequestError {}

/// A move named by origin and target square.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
}

impl MoveRequest {
    pub fn from_ascii(s: &[u8]) -> Result<MoveRequest, ParseMoveRequestError> {
        if s.len() != 4 {
            return Err(ParseMoveRequestError);
        }
        Ok(MoveRequest {
            from: Square::from_ascii(&s[..2]).map_err(|_| ParseMoveRequestError)?,
            to: Square::from_ascii(&s[2..]).map_err(|_| ParseMoveRequestError)?,
        })
    }
}

impl FromStr for MoveRequest {
    type Err = ParseMoveRequestError;

    fn from_str(s: &str) -> Result<MoveRequest, ParseMoveRequestError> {
        MoveRequest::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Raw click coordinates, `x` to the right and `y` downwards from the
/// top-left corner.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct ClickRequest {
    pub x: i32,
    pub y: i32,
}

impl ClickRequest {
    /// The clicked square, or `None` for clicks off the board.
    pub const fn square(self) -> Option<Square> {
        Square::from_coords(self.x, self.y)
    }

    /// Parses `x,y`, allowing spaces around either number.
    pub fn from_ascii(s: &[u8]) -> Result<ClickRequest, ParseMoveRequestError> {
        let comma = s
            .iter()
            .position(|&ch| ch == b',')
            .ok_or(ParseMoveRequestError)?;
        let coord = |part: &[u8]| {
            btoi::btoi::<i32>(part.trim_ascii()).map_err(|_| ParseMoveRequestError)
        };
        Ok(ClickRequest {
            x: coord(&s[..comma])?,
            y: coord(&s[comma + 1..])?,
        })
    }
}

impl FromStr for ClickRequest {
    type Err = ParseMoveRequestError;

    fn from_str(s: &str) -> Result<ClickRequest, ParseMoveRequestError> {
        ClickRequest::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for ClickRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request() {
        assert_eq!(
            "g8f6".parse(),
            Ok(MoveRequest {
                from: Square::G8,
                to: Square::F6
            })
        );
        assert_eq!("g8f".parse::<MoveRequest>(), Err(ParseMoveRequestError));
        assert_eq!("g8f9".parse::<MoveRequest>(), Err(ParseMoveRequestError));
        assert_eq!("g8-f6".parse::<MoveRequest>(), Err(ParseMoveRequestError));
    }

    #[test]
    fn test_click_request() {
        assert_eq!("4,6".parse(), Ok(ClickRequest { x: 4, y: 6 }));
        assert_eq!(" 0 , 7 ".parse(), Ok(ClickRequest { x: 0, y: 7 }));
        assert_eq!("-3,12".parse(), Ok(ClickRequest { x: -3, y: 12 }));
        assert_eq!("3;4".parse::<ClickRequest>(), Err(ParseMoveRequestError));
        assert_eq!("a,4".parse::<ClickRequest>(), Err(ParseMoveRequestError));
        assert_eq!(",".parse::<ClickRequest>(), Err(ParseMoveRequestError));
    }

    #[test]
    fn test_click_square() {
        assert_eq!(ClickRequest { x: 4, y: 6 }.square(), Some(Square::E2));
        assert_eq!(ClickRequest { x: 8, y: 6 }.square(), None);
    }
}
