//! Various constants, for use in various places. None of these are configurable at runtime.

/// Constants with gameplay implications.
pub mod gameplay {
    use std::time::Duration;

    /// Digits are drawn from `0..DIGIT_RANGE`.
    pub const DIGIT_RANGE: u8 = 10;

    /// How long the sequence stays on screen before it's scrolled away.
    pub const MEMORIZE_FOR: Duration = Duration::from_millis(5000);
}

/// Constants specifically relating to how things are shown to the player.
pub mod display {
    use std::time::Duration;

    /// How many filler lines get printed to push the sequence out of view.
    pub const FILLER_LINES: usize = 100;

    /// The longest a single sleep lasts while pausing, so interruptions are noticed promptly.
    pub const TICK: Duration = Duration::from_millis(50);
}
