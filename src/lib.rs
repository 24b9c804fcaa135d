pub mod animation;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod match_state;
pub mod render;
pub mod round;
pub mod throw_gen;
pub mod types;
pub mod utils;
