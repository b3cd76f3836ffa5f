#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
pub mod prelude;
mod ship;

pub use ai::{hunt, HitTrail, Mode};
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use ship::*;
