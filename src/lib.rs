//! Gravity Maze game library.
//!
//! A 3D physics puzzle: tilt the platform discs to roll a ball through a
//! series of floating obstacles to the golden target ring, under a
//! fixed-timestep rigid-body simulation.

pub mod arena;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod input;
pub mod level;
pub mod menu;
pub mod simulation;
