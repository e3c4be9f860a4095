//! # Minimax Connect Four
//!
//! A Connect Four engine with a depth-bounded negamax opponent and a turn
//! controller that sequences local, computer and remote moves.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, win detection, game state
//! - [`ai`] — Game-model trait, negamax search, agents
//! - [`controller`] — Turn state machine, render sink and transport interfaces
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
