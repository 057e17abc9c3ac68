//! # Ring Crypto Module
//!
//! Provides the [`Ring`] struct for representing residue rings Z_k over big integers.

pub mod math;

pub use math::Ring;
