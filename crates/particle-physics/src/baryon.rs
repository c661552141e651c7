//! Baryons: bound states of three quarks
//!
//! Each constructor encodes one row of the baryon multiplet tables as a fixed
//! selection over quark flavors and spins.

use std::fmt;

use crate::error::BaryonError;
use crate::quark::{Flavor, Quark};

/// Up/down selection for the light quark slots of a baryon
///
/// `true` picks the positive-charge quark of the slot's generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UpDown {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl UpDown {
    pub const fn new(first: bool, second: bool, third: bool) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Decode a packed selection: bit 0 is the first slot, bit 1 the second,
    /// bit 2 the third. Higher bits are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            first: bits & 1 != 0,
            second: bits & 2 != 0,
            third: bits & 4 != 0,
        }
    }
}

/// Three quarks, in order
///
/// Either all three quarks are null or none are; the named constructors are
/// the only way to build one.
///
/// ```compile_fail
/// use particle_physics::{Baryon, Quark};
///
/// let mixed = Baryon { q1: Quark::null(), q2: Quark::gen1(true, true), q3: Quark::null() };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baryon {
    q1: Quark,
    q2: Quark,
    q3: Quark,
}

impl Baryon {
    const fn new(q1: Quark, q2: Quark, q3: Quark) -> Self {
        Self { q1, q2, q3 }
    }

    /// Placeholder made of three null quarks
    pub const fn null() -> Self {
        Self::new(Quark::null(), Quark::null(), Quark::null())
    }

    /// Proton as tabulated: (u↑ d↑ d↓)
    pub fn proton() -> Self {
        Self::new(
            Quark::gen1(true, true),
            Quark::gen1(false, true),
            Quark::gen1(false, false),
        )
    }

    /// Neutron as tabulated: (u↑ u↑ d↓)
    pub fn neutron() -> Self {
        Self::new(
            Quark::gen1(true, true),
            Quark::gen1(true, true),
            Quark::gen1(false, false),
        )
    }

    /// Neutron for zero charge, proton otherwise
    pub fn nucleon(charge: i32) -> Self {
        if charge == 0 {
            Self::neutron()
        } else {
            Self::proton()
        }
    }

    /// Spin-aligned delta: two light quarks and a second-generation quark
    pub fn delta(updown: UpDown) -> Self {
        Self::new(
            Quark::gen1(updown.first, true),
            Quark::gen1(updown.second, true),
            Quark::gen2(updown.third, true),
        )
    }

    /// Hyperon with `strange` strange quarks
    ///
    /// With `half_spin` the last strange quark is flipped down. Only
    /// `updown.first` and `updown.second` are read; slots taken by strange
    /// quarks ignore their flag.
    ///
    /// The fully strange baryon (Ω) only exists spin-aligned, so
    /// `hyperon(3, true, _)` fails with [`BaryonError::UnsupportedSpin`].
    pub fn hyperon(strange: i32, half_spin: bool, updown: UpDown) -> Result<Self, BaryonError> {
        let strange_quark = |spin_up| Quark::gen2(false, spin_up);

        match strange {
            1 => Ok(Self::new(
                Quark::gen1(updown.first, true),
                Quark::gen1(updown.second, true),
                strange_quark(!half_spin),
            )),
            2 => Ok(Self::new(
                Quark::gen1(updown.first, true),
                strange_quark(true),
                strange_quark(!half_spin),
            )),
            3 if half_spin => {
                log::debug!("rejecting half-spin omega hyperon");
                Err(BaryonError::UnsupportedSpin { strange })
            }
            3 => Ok(Self::new(
                strange_quark(true),
                strange_quark(true),
                strange_quark(true),
            )),
            _ => {
                log::debug!("rejecting hyperon with strangeness {}", strange);
                Err(BaryonError::UnknownStrangeness(strange))
            }
        }
    }

    /// Lambda-like baryon: u↑ d↓ plus a heavy down-type or charm quark
    pub fn lambda(third_quark: Quark) -> Result<Self, BaryonError> {
        match third_quark.flavor() {
            Flavor::Strange | Flavor::Charm | Flavor::Bottom => Ok(Self::new(
                Quark::gen1(true, true),
                Quark::gen1(false, false),
                third_quark,
            )),
            flavor => {
                log::debug!("rejecting lambda around {} quark", flavor);
                Err(BaryonError::FlavorMismatch {
                    baryon: "lambda",
                    flavor,
                })
            }
        }
    }

    /// Sigma-like baryon built around `third_quark`
    ///
    /// Strange and charm quarks are always accepted. A bottom quark is only
    /// accepted together with `half_spin`.
    ///
    /// The up quark points up if `half_spin` is set or the third quark points
    /// up. The down quark points down only when `half_spin` is unset and the
    /// third quark points up.
    pub fn sigma(third_quark: Quark, half_spin: bool) -> Result<Self, BaryonError> {
        let flavor = third_quark.flavor();
        // half_spin only gates the bottom branch
        let accepted = flavor == Flavor::Strange
            || flavor == Flavor::Charm
            || (flavor == Flavor::Bottom && half_spin);

        if !accepted {
            log::debug!(
                "rejecting sigma around {} quark (half_spin={})",
                flavor,
                half_spin
            );
            return Err(BaryonError::FlavorMismatch {
                baryon: "sigma",
                flavor,
            });
        }

        let third_up = third_quark.is_spin_up();
        Ok(Self::new(
            Quark::gen1(true, half_spin || third_up),
            Quark::gen1(false, !(!half_spin && third_up)),
            third_quark,
        ))
    }

    pub const fn q1(&self) -> Quark {
        self.q1
    }

    pub const fn q2(&self) -> Quark {
        self.q2
    }

    pub const fn q3(&self) -> Quark {
        self.q3
    }

    pub fn quarks(&self) -> [Quark; 3] {
        [self.q1, self.q2, self.q3]
    }

    pub fn is_null(&self) -> bool {
        self.quarks().iter().all(Quark::is_null)
    }

    /// Total electric charge in units of e
    pub fn charge(&self) -> f32 {
        self.quarks().iter().map(Quark::charge).sum()
    }

    /// Total spin projection
    pub fn spin(&self) -> f32 {
        self.quarks().iter().map(Quark::spin).sum()
    }

    /// Sum of the bare quark masses in eV (binding energy not included)
    pub fn mass(&self) -> f32 {
        self.quarks().iter().map(Quark::mass).sum()
    }

    /// Strangeness quantum number, minus the number of strange quarks
    pub fn strangeness(&self) -> i32 {
        let strange = self
            .quarks()
            .iter()
            .filter(|q| q.flavor() == Flavor::Strange)
            .count();
        -(strange as i32)
    }
}

impl Default for Baryon {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for Baryon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.q1, self.q2, self.q3)
    }
}
