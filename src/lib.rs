#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod driver;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
mod ship;
mod state;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env_value, LOG_ENV};
pub use ship::*;
pub use state::*;
