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

use core::num::TryFromIntError;

pub(crate) fn overflow_error() -> TryFromIntError {
    // TryFromIntError has a private constructor. Provoke one from a
    // conversion that is known to overflow.
    u8::try_from(u32::MAX).unwrap_err()
}

/// Converts a coordinate pair to a board index if both lie in `0..8`.
#[inline]
pub(crate) const fn board_index(x: i32, y: i32) -> Option<u8> {
    if 0 <= x && x < 8 && 0 <= y && y < 8 {
        Some((x + 8 * y) as u8)
    } else {
        None
    }
}
