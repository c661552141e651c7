//! Error types for baryon construction.

use thiserror::Error;

use crate::quark::Flavor;

/// Reasons a baryon constructor can reject its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BaryonError {
    /// Hyperons carry one to three strange quarks.
    #[error("no hyperon with strangeness {0} (expected 1, 2 or 3)")]
    UnknownStrangeness(i32),

    /// The requested spin configuration is not modelled for this hyperon.
    #[error("half-spin hyperon with {strange} strange quarks is not supported")]
    UnsupportedSpin {
        /// Number of strange quarks requested.
        strange: i32,
    },

    /// The supplied third quark has a flavor the baryon does not accept.
    #[error("{baryon} baryon cannot be built around a {flavor} quark")]
    FlavorMismatch {
        /// Name of the baryon family being built.
        baryon: &'static str,
        /// Flavor of the rejected quark.
        flavor: Flavor,
    },
}
