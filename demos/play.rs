use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_referee::{Click, ClickRequest, Color, Game, MoveRequest, Position, Square};

/// Plays a game on the terminal. Enter moves like `e2e4`, or clicks like
/// `4,6` to select and move pieces by board coordinates. `restart` starts
/// over, `quit` leaves.
#[derive(Debug, Parser)]
struct Opt {
    /// Starting board in FEN board notation
    #[arg(long)]
    board: Option<Position>,
    /// Side to move first
    #[arg(long, default_value = "white")]
    turn: Color,
    /// Prints only the final board
    #[arg(long)]
    quiet: bool,
}

fn print_board(game: &Game) {
    for y in 0..8 {
        let mut row = String::new();
        row.push(char::from(b'8' - y));
        for x in 0..8 {
            let sq = Square::new(x, y);
            row.push(' ');
            row.push(match game.piece_at(sq) {
                Some(piece) => piece.char(),
                None if game.legal_destinations().contains(sq) => '*',
                None => '.',
            });
        }
        println!("{row}");
    }
    println!("  a b c d e f g h");
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opt = Opt::parse();

    let mut game = match opt.board {
        Some(pos) => Game::from_position(pos, opt.turn)?,
        None => Game::new(),
    };

    if !opt.quiet {
        print_board(&game);
    }

    let stdin = io::stdin();
    loop {
        if !opt.quiet {
            print!("{} > ", game.turn());
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "quit" => break,
            "restart" => game.restart(),
            _ => {
                if let Ok(request) = line.parse::<MoveRequest>() {
                    println!("{}", game.play(request));
                } else if let Ok(request) = line.parse::<ClickRequest>() {
                    match game.click(request.x, request.y) {
                        Click::Ignored => println!("nothing to do"),
                        Click::Selected(moves) => println!("{} legal moves", moves.count()),
                        Click::Moved(outcome) => println!("{outcome}"),
                    }
                } else {
                    println!("expected a move like e2e4 or a click like 4,6");
                    continue;
                }
            }
        }

        if !opt.quiet {
            print_board(&game);
        }
        if let Some(winner) = game.winner() {
            println!("{winner} wins, type restart for a new game");
        }
    }

    if opt.quiet {
        println!("{}", game.position());
    }

    Ok(())
}
