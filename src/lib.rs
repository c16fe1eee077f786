//! # Connect Four Minimax
//!
//! Connect Four on a 7x6 board against a computer opponent that picks its
//! columns with depth-limited minimax and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, move log, win detection, game session
//! - [`ai`] — Agent trait, heuristic evaluator, minimax search, random and typed-in agents
//! - [`render`] — Text board rendering with the winning line highlighted
//! - [`driver`] — Game loop and play modes
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod render;
