//! Physical constants for the quark model
//!
//! Approximate values, good enough to tell the flavors apart. Masses are bare
//! rest masses in eV with no unit conversion applied.

/// Spin projection magnitude of every quark
pub const QUARK_SPIN: f32 = 0.5;

/// Charge of the up-type quarks (up, charm, top), in units of e
pub const UP_TYPE_CHARGE: f32 = 2.0 / 3.0;

/// Charge of the down-type quarks (down, strange, bottom), in units of e
pub const DOWN_TYPE_CHARGE: f32 = -1.0 / 3.0;

// Generation 1
/// Up quark mass (~2.2 MeV)
pub const QUARK_UP_MASS: f32 = 2.2e6;
/// Down quark mass (~4.7 MeV)
pub const QUARK_DOWN_MASS: f32 = 4.7e6;

// Generation 2
/// Charm quark mass (~1.28 GeV)
pub const QUARK_CHARM_MASS: f32 = 1.28e9;
/// Strange quark mass (~96 MeV)
pub const QUARK_STRANGE_MASS: f32 = 9.6e7;

// Generation 3
/// Top quark mass (~173.1 GeV)
pub const QUARK_TOP_MASS: f32 = 1.731e11;
/// Bottom quark mass (~4.18 GeV)
pub const QUARK_BOTTOM_MASS: f32 = 4.18e9;
