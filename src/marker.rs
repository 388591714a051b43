//! Per-digit state markers, modeled on an SR flip-flop.
//!
//! Each digit in the sequence gets one marker. It's set when the digit is added (the circuit "remembers" it) and
//! reset once the sequence has been shown (the circuit "forgets" it until the next recall). Markers never influence
//! whether the player's answer is right.

/// The two states a [`Marker`] can be in. Exactly one holds at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MarkerState {
    Set,
    #[default]
    Reset,
}

/// A single flip-flop. Starts out [`MarkerState::Reset`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Marker {
    state: MarkerState,
}

impl Marker {
    /// Create a marker that's already been set, for a freshly added digit.
    pub fn set_new() -> Self {
        let mut marker = Self::default();
        marker.set();
        marker
    }

    pub fn set(&mut self) {
        self.state = MarkerState::Set;
    }

    pub fn reset(&mut self) {
        self.state = MarkerState::Reset;
    }

    pub fn state(&self) -> MarkerState {
        self.state
    }

    pub fn is_set(&self) -> bool {
        self.state == MarkerState::Set
    }

    pub fn is_reset(&self) -> bool {
        self.state == MarkerState::Reset
    }
}
