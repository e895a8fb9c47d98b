#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
mod controller;
#[cfg(feature = "std")]
mod logging;

pub use crate::core::*;
pub use player::Player;
#[cfg(feature = "std")]
pub use player::{GameDisplay, InputSource, LineInput, WriterDisplay};
#[cfg(feature = "std")]
pub use controller::TurnController;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
