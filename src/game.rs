//! Contains the main loop of the game: grow the sequence, show it, hide it, ask for it back.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    constants::{display::FILLER_LINES, gameplay::MEMORIZE_FOR},
    error::Result,
    io::Console,
    sequence::Sequence,
    timing::Pause,
};

pub const WELCOME: &str = "Welcome to the Memory Game!";
pub const MEMORIZE: &str = "Memorize this sequence: ";
pub const CORRECT: &str = "Correct! Get ready for the next round.";
pub const INCORRECT: &str = "Sorry that was incorrect. Game Over. :(";
pub const PAUSE_FAILED: &str = "Waiting caused an error.";

/// Where the game is at.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Still going; the next round will add another digit.
    Playing,
    /// The player missed one. Nothing left to do but show the score.
    GameOver,
}

/// Everything about one run of the game.
#[derive(Debug)]
pub struct Session<R> {
    sequence: Sequence,
    score: u32,
    phase: Phase,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// A fresh game, drawing its digits from `rng`.
    pub fn new(rng: R) -> Self {
        Self::with_sequence(rng, Sequence::new())
    }

    /// A game which picks up with some digits already in play.
    pub fn with_sequence(rng: R, sequence: Sequence) -> Self {
        Self { sequence, score: 0, phase: Phase::Playing, rng }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Play a single round, returning the phase the game is in afterwards.
    ///
    /// Does nothing once the game is over.
    pub fn play_round<I, O>(&mut self, console: &mut Console<I, O>, pause: &mut dyn Pause) -> Result<Phase>
    where
        I: BufRead,
        O: Write,
    {
        if self.phase == Phase::GameOver {
            return Ok(self.phase);
        }

        let digit = self.sequence.append_random_digit(&mut self.rng);
        debug!("round {}: appended {}", self.sequence.len(), digit);

        console.say(format_args!("{}{}", MEMORIZE, self.sequence))?;
        if let Err(e) = pause.wait(MEMORIZE_FOR) {
            warn!("memorization {}; moving on", e);
            console.say(PAUSE_FAILED)?;
        }
        self.sequence.reset_all_markers();
        console.scroll_away(FILLER_LINES)?;

        let mut answer = Vec::with_capacity(self.sequence.len());
        for i in 1..=self.sequence.len() {
            console.say(format_args!("What was number {}", i))?;
            answer.push(console.read_number()?);
        }

        if self.sequence.matches(&answer) {
            self.score += 1;
            debug!("round {} correct, score now {}", self.sequence.len(), self.score);
            console.say(CORRECT)?;
        } else {
            debug!("expected {:?}, got {:?}", self.sequence.digits(), answer);
            console.say(INCORRECT)?;
            self.phase = Phase::GameOver;
        }
        Ok(self.phase)
    }

    /// Play from the welcome banner through to the final score, which is returned.
    pub fn run<I, O>(&mut self, console: &mut Console<I, O>, pause: &mut dyn Pause) -> Result<u32>
    where
        I: BufRead,
        O: Write,
    {
        info!("starting a new game");
        console.say(WELCOME)?;
        while self.play_round(console, pause)? == Phase::Playing {}
        info!("game over with score {}", self.score);
        console.say(format_args!("Thanks for playing! \nFinal Score: {}", self.score))?;
        Ok(self.score)
    }
}
