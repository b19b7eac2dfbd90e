//! CGX - numeric cores of introductory computer-graphics exercises
//!
//! The library side of the `cgx` driver: layered configuration and the
//! per-exercise systems that run the cores from `cgx_core` and `cgx_math`.

pub mod config;
pub mod systems;
