//! Save the Penguin, a terminal arcade survival game.
//!
//! Core modules:
//! - `consts`: fixed gameplay configuration shared by core and shell
//! - `entities`: pure data types (rectangles, penguin, ships, game state)
//! - `compute`: pure, RNG-injected simulation functions
//!
//! The binary adds the crossterm presentation shell (rendering, input
//! loop) and optional rodio background music behind the `sound` feature.
//! The library never draws, plays audio, or polls input: it exposes
//! read-only state for the shell to render, and every random draw comes
//! through an injected `Rng` so a seeded generator replays a run exactly.

pub mod compute;
pub mod consts;
pub mod entities;
