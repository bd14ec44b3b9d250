use iai::black_box;
use chess_referee::{referee, Bitboard, Color, Game, MoveOutcome, MoveRequest, Position, Square};

const MIDDLEGAME: &str = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2NP1N2/PPP2PPP/R1BQK2R";

fn bench_opening_moves() -> usize {
    let pos = Position::new();
    black_box(&pos)
        .pieces(Color::White)
        .map(|piece| referee::legal_moves(&pos, piece).count())
        .sum()
}

fn bench_queen_moves() -> Bitboard {
    let pos: Position = MIDDLEGAME.parse().expect("valid board");
    let queen = pos.piece_at(Square::D1).expect("queen");
    referee::legal_moves(black_box(&pos), black_box(queen))
}

fn bench_threat_map() -> Bitboard {
    let pos: Position = MIDDLEGAME.parse().expect("valid board");
    referee::threat_map(black_box(&pos), Color::Black)
}

fn bench_is_mate() -> bool {
    let pos: Position = "R6k/6pp/8/8/8/8/8/6K1".parse().expect("valid board");
    referee::is_mate(black_box(&pos), Color::Black)
}

fn bench_attempt_move() -> MoveOutcome {
    let pos: Position = MIDDLEGAME.parse().expect("valid board");
    let mut game = Game::from_position(pos, Color::White).expect("legal game");
    let request = MoveRequest {
        from: Square::C4,
        to: Square::F7,
    };
    black_box(&mut game).play(black_box(request))
}

fn bench_play_game() -> Game {
    let moves = [
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5", "b1c3", "d7d6", "c1g5",
        "h7h6", "g5f6", "d8f6", "c3d5", "f6d8", "c2c3", "a7a6", "d3d4", "e5d4", "c3d4", "c5b4",
        "e1f1", "e8f8", "a2a3", "b4a5", "b2b4", "a5b6", "d1d3", "c8g4",
    ];

    let mut game = black_box(Game::new());
    for m in black_box(moves) {
        let outcome = game.play(m.parse().expect("valid request"));
        assert!(outcome.is_applied(), "{m}: {outcome}");
    }
    game
}

iai::main!(
    bench_opening_moves,
    bench_queen_moves,
    bench_threat_map,
    bench_is_mate,
    bench_attempt_move,
    bench_play_game,
);
