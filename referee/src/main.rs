use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sos::{Color, Game, GameMode, Player, PlayerKind, Winner};
use tracing::{debug, info, trace};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Board size (3 to 10)
    #[arg(short, long, default_value_t = 5)]
    board_size: i8,

    /// Which rule set to play under
    #[arg(short, long, value_enum, default_value_t = ModeArg::General)]
    mode: ModeArg,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum ModeArg {
    Simple,
    General,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => GameMode::Simple,
            ModeArg::General => GameMode::General,
        }
    }
}

#[derive(Default)]
struct MatchScore {
    blue_wins: usize,
    red_wins: usize,
    draws: usize,
}

/// Plays one computer-vs-computer game through the engine's public API.
fn play_game(mode: GameMode, board_size: i8, rng: &mut StdRng) -> anyhow::Result<Winner> {
    let mut game = Game::new(mode);
    game.set_board_size(board_size)?;
    game.set_players(
        Player::new(PlayerKind::Computer, "Blue", Color::Blue),
        Player::new(PlayerKind::Computer, "Red", Color::Red),
    );
    game.start_new_game();

    while !game.is_over() {
        let mover = game.current_player().color;
        let placement = game
            .current_player()
            .decide_move(&game, rng)
            .expect("a running game always has an empty cell");
        let lines = game.make_move(placement.row, placement.col, placement.letter)?;
        debug!(
            player = %mover,
            row = placement.row,
            col = placement.col,
            letter = %placement.letter,
            completed_lines = lines.len(),
        );
        if let Some(board) = game.board() {
            trace!("board state:\n{}", board);
        }
    }

    let winner = game.winner().expect("a finished game has a winner");
    debug!(
        blue_score = game.blue_player().score,
        red_score = game.red_player().score,
        winner = ?winner,
    );
    Ok(winner)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mode = GameMode::from(args.mode);
    let mut match_score = MatchScore::default();
    for game_idx in 0..args.num_games {
        match play_game(mode, args.board_size, &mut rng)? {
            Winner::Blue => {
                debug!(game_idx, "Blue wins");
                match_score.blue_wins += 1;
            }
            Winner::Red => {
                debug!(game_idx, "Red wins");
                match_score.red_wins += 1;
            }
            Winner::Draw => {
                debug!(game_idx, "Draw");
                match_score.draws += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by Blue\n- {} wins by Red\n- {} draws",
        match_score.blue_wins, match_score.red_wins, match_score.draws
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
