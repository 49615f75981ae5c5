//! Classic single-player Snake for the terminal.
//!
//! The engine lives in [`game`]; everything else is a thin adapter around it:
//! [`input`] maps key presses to engine inputs, [`renderer`] and [`ui`] draw
//! frames from immutable state, and [`terminal_runtime`] owns the terminal
//! lifecycle.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
