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

//! Turn order and the select-then-move cycle of a game.
//!
//! # Examples
//!
//! ```
//! use chess_referee::{Click, Color, Game, MoveOutcome, Square};
//!
//! let mut game = Game::new();
//! assert_eq!(game.turn(), Color::White);
//!
//! // Pick up the e-pawn. Its destinations can be highlighted.
//! match game.select_square(Square::E2) {
//!     Click::Selected(moves) => assert_eq!(moves.count(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! // Put it down two squares ahead.
//! assert_eq!(game.select_square(Square::E4), Click::Moved(MoveOutcome::Applied));
//! assert_eq!(game.turn(), Color::Black);
//! ```

use core::fmt;

use tracing::{debug, trace};

use crate::{
    bitboard::Bitboard,
    color::Color,
    notation::MoveRequest,
    piece::{Piece, PieceId},
    position::{Position, PositionError, PositionErrorKinds},
    referee,
    role::Role,
    square::Square,
};

/// Result of [`Game::attempt_move()`].
///
/// Rejections are ordinary outcomes, not errors. A rejected move leaves
/// no trace on the game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MoveOutcome {
    /// The move breaks the movement rules, or cannot be made right now.
    Rejected,
    /// The move would leave the king of the mover in check.
    RejectedSelfCheck,
    /// The move was played.
    Applied,
    /// The move was played and the given side is now in check.
    AppliedCheck(Color),
    /// The move was played and mated the opponent. The given side wins and
    /// the game is over.
    Checkmate(Color),
}

impl MoveOutcome {
    /// Checks if the move was played.
    pub const fn is_applied(self) -> bool {
        matches!(
            self,
            MoveOutcome::Applied | MoveOutcome::AppliedCheck(_) | MoveOutcome::Checkmate(_)
        )
    }

    pub const fn is_rejected(self) -> bool {
        !self.is_applied()
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MoveOutcome::Rejected => f.write_str("illegal move"),
            MoveOutcome::RejectedSelfCheck => {
                f.write_str("illegal move: can't put the king in danger")
            }
            MoveOutcome::Applied => f.write_str("move played"),
            MoveOutcome::AppliedCheck(color) => write!(f, "check: {color}"),
            MoveOutcome::Checkmate(winner) => write!(f, "checkmate: {winner} wins"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MoveOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            MoveOutcome::Rejected => {
                serializer.serialize_unit_variant("MoveOutcome", 0, "rejected")
            }
            MoveOutcome::RejectedSelfCheck => {
                serializer.serialize_unit_variant("MoveOutcome", 1, "rejected_self_check")
            }
            MoveOutcome::Applied => serializer.serialize_unit_variant("MoveOutcome", 2, "applied"),
            MoveOutcome::AppliedCheck(ref color) => {
                serializer.serialize_newtype_variant("MoveOutcome", 3, "applied_check", color)
            }
            MoveOutcome::Checkmate(ref winner) => {
                serializer.serialize_newtype_variant("MoveOutcome", 4, "checkmate", winner)
            }
        }
    }
}

/// Result of [`Game::select_square()`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Click {
    /// Nothing happened.
    Ignored,
    /// A piece of the side to move was picked up. These are its legal
    /// destinations.
    Selected(Bitboard),
    /// The selected piece was put down, with this result.
    Moved(MoveOutcome),
}

/// Where a [`Game`] stands in the select-then-move cycle.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    GameOver { winner: Color },
}

/// The currently picked up piece.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Selection {
    pub piece: PieceId,
    pub legal_moves: Bitboard,
}

/// A game between two players.
///
/// Owns the [`Position`], whose turn it is, and the selection made through
/// [`Game::select_square()`]. All rule questions are delegated to the
/// [`referee`].
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    turn: Color,
    selection: Option<Selection>,
    winner: Option<Color>,
}

impl Game {
    /// A game in the standard opening position, White to move.
    pub fn new() -> Game {
        Game {
            position: Position::new(),
            turn: Color::White,
            selection: None,
            winner: None,
        }
    }

    /// A game from a custom position.
    ///
    /// # Errors
    ///
    /// Fails with [`PositionErrorKinds::OPPOSITE_CHECK`] if the side that is
    /// not to move is in check.
    pub fn from_position(position: Position, turn: Color) -> Result<Game, PositionError> {
        if referee::is_check(&position, !turn) {
            return Err(PositionError {
                errors: PositionErrorKinds::OPPOSITE_CHECK,
            });
        }
        Ok(Game {
            position,
            turn,
            selection: None,
            winner: None,
        })
    }

    /// Throws the game away and starts over from the opening position.
    pub fn restart(&mut self) {
        debug!(winner = ?self.winner, "restarting game");
        *self = Game::new();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The side to move. Stays with the winner once the game is over.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.position.piece_at(sq)
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Destinations of the selected piece, for highlighting.
    pub fn legal_destinations(&self) -> Bitboard {
        self.selection
            .map_or(Bitboard::EMPTY, |selection| selection.legal_moves)
    }

    pub fn phase(&self) -> Phase {
        match (self.winner, self.selection) {
            (Some(winner), _) => Phase::GameOver { winner },
            (None, Some(_)) => Phase::PieceSelected,
            (None, None) => Phase::AwaitingSelection,
        }
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn is_check(&self, color: Color) -> bool {
        referee::is_check(&self.position, color)
    }

    /// Checks if the defending side has no escape square, see
    /// [`referee::is_mate()`]. The defender is the side to move, or the
    /// loser once the game is over.
    pub fn is_mate(&self) -> bool {
        let defender = self.winner.map_or(self.turn, |winner| !winner);
        referee::is_mate(&self.position, defender)
    }

    /// Handles a click on a board square.
    ///
    /// Clicking a piece of the side to move selects it. Clicking any other
    /// square while a piece is selected tries to move it there. In either
    /// case a previous selection is dropped.
    pub fn select_square(&mut self, sq: Square) -> Click {
        if self.is_over() {
            trace!(%sq, "game is over, ignoring click");
            return Click::Ignored;
        }

        match self.position.id_at(sq) {
            Some(id) if self.position.piece(id).color == self.turn => {
                let legal_moves = referee::legal_moves(&self.position, self.position.piece(id));
                trace!(%sq, moves = legal_moves.count(), "selected");
                self.selection = Some(Selection {
                    piece: id,
                    legal_moves,
                });
                Click::Selected(legal_moves)
            }
            _ => match self.selection.take() {
                Some(selection) => Click::Moved(self.attempt_move(selection.piece, sq)),
                None => Click::Ignored,
            },
        }
    }

    /// Handles a click at raw board coordinates. Clicks outside the board
    /// drop the selection and are otherwise ignored.
    pub fn click(&mut self, x: i32, y: i32) -> Click {
        match Square::from_coords(x, y) {
            Some(sq) => self.select_square(sq),
            None => {
                trace!(x, y, "click off the board");
                self.selection = None;
                Click::Ignored
            }
        }
    }

    /// Tries to move the piece `id` to `to`.
    ///
    /// The move is first checked against the movement rules. It is then
    /// played tentatively and taken back if it leaves the mover in check.
    /// Otherwise the opponent is examined for mate and check, and the turn
    /// passes unless the game is over.
    pub fn attempt_move(&mut self, id: PieceId, to: Square) -> MoveOutcome {
        self.selection = None;

        if self.is_over() || !self.position.is_live(id) {
            return MoveOutcome::Rejected;
        }

        let mover = self.turn;
        let piece = self.position.piece(id);
        let occupant = self.position.piece_at(to);
        if piece.color != mover
            || occupant.is_some_and(|other| other.role == Role::King)
            || !referee::is_move_legal(&self.position, piece, to, occupant)
        {
            trace!(%mover, from = %piece.square, %to, "illegal move");
            return MoveOutcome::Rejected;
        }

        let undo = self.position.play_unchecked(id, to);

        if referee::is_check(&self.position, mover) {
            self.position.undo(undo);
            debug!(%mover, from = %undo.from(), %to, "move exposes own king, taken back");
            return MoveOutcome::RejectedSelfCheck;
        }

        let opponent = !mover;

        if referee::is_mate(&self.position, opponent) {
            self.winner = Some(mover);
            debug!(winner = %mover, from = %undo.from(), %to, "checkmate");
            return MoveOutcome::Checkmate(mover);
        }

        let outcome = if referee::is_check(&self.position, opponent) {
            MoveOutcome::AppliedCheck(opponent)
        } else {
            MoveOutcome::Applied
        };

        debug!(
            %mover,
            from = %undo.from(),
            %to,
            capture = undo.captured().is_some(),
            check = matches!(outcome, MoveOutcome::AppliedCheck(_)),
            "move played"
        );

        self.turn = opponent;
        outcome
    }

    /// Plays a move given by origin and target square. An empty origin is
    /// rejected.
    pub fn play(&mut self, request: MoveRequest) -> MoveOutcome {
        match self.position.id_at(request.from) {
            Some(id) => self.attempt_move(id, request.to),
            None => {
                self.selection = None;
                MoveOutcome::Rejected
            }
        }
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
