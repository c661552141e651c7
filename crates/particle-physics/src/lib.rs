//! # Particle Physics
//!
//! Static quark model: quark flavors with their fixed charges and masses, and
//! named baryons assembled from three quarks.

pub mod baryon;
pub mod constants;
pub mod error;
pub mod quark;

pub use baryon::*;
pub use constants::*;
pub use error::*;
pub use quark::*;
