use std::process::ExitCode;

use flipflop_recall::{io::Console, timing::ThreadPause, Session};
use log::{error, LevelFilter};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> ExitCode {
    // env_logger writes to stderr; stdout belongs to the game
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut session = Session::new(SmallRng::from_entropy());
    let mut console = Console::stdio();
    let mut pause = ThreadPause::new();

    match session.run(&mut console, &mut pause) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("game ended early after {} correct rounds: {:?}", session.score(), e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
