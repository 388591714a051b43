//! A console memory game built around a row of flip-flops.
//!
//! Every round one more random digit joins the [`Sequence`], each with its own [`marker::Marker`] that gets set as
//! the digit is remembered. The whole sequence is shown for a few seconds, the markers are reset, the screen is
//! scrolled away, and the player has to type it back. One miss ends the game.
//!
//! The pieces:
//!
//! - [`sequence`] and [`marker`] hold the digits and their flip-flop state.
//! - [`game`] runs the rounds and keeps score in an owned [`Session`].
//! - [`io`] and [`timing`] are the seams to the outside world, so the loop can be driven by tests without a terminal
//!   or a real clock.

pub mod constants;
pub mod error;
pub mod game;
pub mod io;
pub mod marker;
pub mod sequence;
pub mod timing;

pub use error::{Error, Result};
pub use game::{Phase, Session};
pub use sequence::Sequence;
