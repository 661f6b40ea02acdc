//! Core basin-of-attraction mapping library.
//!
//! A point particle is released from rest at every pixel of a square grid
//! and integrated under the inverse-square pull of a set of fixed
//! attractors until it is captured by one of them or leaves the system.
//!
//! Main components:
//! - [`attractor`] — attractor points and sets.
//! - [`config`] — per-run simulation configuration.
//! - [`error`] — configuration error taxonomy.
//! - [`force`] — net force on a particle from an attractor set.
//! - [`integrator`] — fixed-step RK4 and symplectic integrators.
//! - [`trajectory`] — single-trajectory capture/escape simulation.
//! - [`map`] — pixel-grid basin map generation.
//! - [`types`] — shared type aliases and IDs.

pub mod attractor;
pub mod config;
pub mod error;
pub mod force;
pub mod integrator;
pub mod map;
pub mod trajectory;
pub mod types;
