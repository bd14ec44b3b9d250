#![no_main]

use arbitrary::Arbitrary;
use chess_referee::{referee, Color, Game, MoveOutcome, MoveRequest};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    requests: Vec<MoveRequest>,
}

fuzz_target!(|data: Data| {
    let mut game = Game::new();

    for request in data.requests {
        let before = game.position().clone();
        let turn = game.turn();
        let outcome = game.play(request);

        match outcome {
            MoveOutcome::Rejected | MoveOutcome::RejectedSelfCheck => {
                assert_eq!(game.position(), &before);
                assert_eq!(game.turn(), turn);
            }
            MoveOutcome::Applied | MoveOutcome::AppliedCheck(_) => {
                assert_eq!(game.turn(), !turn);
                assert!(!referee::is_check(game.position(), turn));
            }
            MoveOutcome::Checkmate(winner) => {
                assert_eq!(winner, turn);
                assert!(game.is_over());
                assert!(referee::is_mate(game.position(), !winner));
            }
        }

        for color in Color::ALL {
            assert_eq!(game.position().roster(color).len(), game.position().pieces(color).count());
            let king = game.position().king(color);
            assert_eq!(game.position().piece_at(king.square), Some(king));
        }
    }
});
