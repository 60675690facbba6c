//! Classic grid Snake: a fixed playfield, a growing segment chain, one food
//! cell at a time. The simulation lives in [`game::GameSession`]; everything
//! else is either a leaf it builds on or the terminal shell around it.

pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
