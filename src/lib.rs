//! A referee for two-player chess: move legality, check, checkmate and turn
//! order.
//!
//! # Examples
//!
//! Ask for the legal moves of a piece:
//!
//! ```
//! use chess_referee::{referee, Position, Square};
//!
//! let pos = Position::new();
//! let pawn = pos.piece_at(Square::E2).expect("pawn");
//! assert_eq!(referee::legal_moves(&pos, pawn).count(), 2);
//! ```
//!
//! Drive a game the way a board UI would, by clicking squares:
//!
//! ```
//! use chess_referee::{Click, Color, Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! assert!(matches!(game.click(6, 7), Click::Selected(_))); // g1
//! assert_eq!(game.click(5, 5), Click::Moved(MoveOutcome::Applied)); // f3
//! assert_eq!(game.turn(), Color::Black);
//! ```
//!
//! Detect the end of the game:
//!
//! ```
//! use chess_referee::{Color, Game, MoveOutcome, Position};
//!
//! let pos: Position = "7k/6pp/8/8/8/8/8/R5K1".parse()?;
//! let mut game = Game::from_position(pos, Color::White)?;
//! assert_eq!(
//!     game.play("a1a8".parse()?),
//!     MoveOutcome::Checkmate(Color::White)
//! );
//! assert!(game.is_over());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Rules
//!
//! Castling, en passant and promotion do not exist. Draws are not detected.
//! Mate is declared as soon as the king of the defender has no square to go
//! to, without looking for captures or blocks that would save it. See
//! [`referee::is_mate()`].
//!
//! # Feature flags
//!
//! * `alloc`: Links the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate.
//!   Enables `alloc` support in `serde`. The library itself never
//!   allocates.
//! * `std`: Implies `alloc`, and enables `std` support in `btoi` and
//!   `tracing`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Color`], [`Role`] and [`Square`], and `Serialize` for [`MoveOutcome`].
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! The [`Game`] reports accepted moves, check and mate at `debug` level and
//! selections and rejections at `trace` level through
//! [`tracing`](https://docs.rs/tracing/0.1).

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod color;
mod game;
mod notation;
mod piece;
mod position;
mod role;
mod square;
mod util;

pub mod bitboard;
pub mod board;
pub mod referee;

pub use bitboard::Bitboard;
pub use board::Board;
pub use color::{ByColor, Color, ParseColorError};
pub use game::{Click, Game, MoveOutcome, Phase, Selection};
pub use notation::{ClickRequest, MoveRequest, ParseMoveRequestError};
pub use piece::{Piece, PieceId};
pub use position::{
    Position, PositionError, PositionErrorKinds, Roster, Undo, MAX_PIECES_PER_COLOR,
};
pub use role::{ParseRoleError, Role};
pub use square::{ParseSquareError, Square};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceId {}
