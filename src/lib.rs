//! Deterministic fixed-timestep snake simulation with a terminal frontend.
//!
//! The simulation core (`clock`, `direction`, `collision`, `food`, `game`)
//! never touches the terminal; `input`, `renderer`, and `ui` adapt it to
//! crossterm events and ratatui frames, and `score` holds the durable
//! best-score collaborator.

pub mod clock;
pub mod collision;
pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod ui;
