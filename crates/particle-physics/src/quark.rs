//! Quark flavors and the quark value type

use std::fmt;

use crate::constants::*;

/// Quark flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Up,
    Down,
    Strange,
    Charm,
    Bottom,
    Top,
}

/// Flavor generations, ordered by mass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generation {
    /// Up and down
    First,
    /// Charm and strange
    Second,
    /// Top and bottom
    Third,
}

impl Generation {
    /// Flavor of this generation with the given charge sign
    pub fn flavor(self, positive_charge: bool) -> Flavor {
        match (self, positive_charge) {
            (Generation::First, true) => Flavor::Up,
            (Generation::First, false) => Flavor::Down,
            (Generation::Second, true) => Flavor::Charm,
            (Generation::Second, false) => Flavor::Strange,
            (Generation::Third, true) => Flavor::Top,
            (Generation::Third, false) => Flavor::Bottom,
        }
    }
}

impl Flavor {
    pub fn generation(self) -> Generation {
        match self {
            Flavor::Up | Flavor::Down => Generation::First,
            Flavor::Charm | Flavor::Strange => Generation::Second,
            Flavor::Top | Flavor::Bottom => Generation::Third,
        }
    }

    /// Electric charge in units of e
    pub fn charge(self) -> f32 {
        match self {
            Flavor::Up | Flavor::Charm | Flavor::Top => UP_TYPE_CHARGE,
            Flavor::Down | Flavor::Strange | Flavor::Bottom => DOWN_TYPE_CHARGE,
        }
    }

    /// Rest mass in eV
    pub fn mass(self) -> f32 {
        match self {
            Flavor::Up => QUARK_UP_MASS,
            Flavor::Down => QUARK_DOWN_MASS,
            Flavor::Strange => QUARK_STRANGE_MASS,
            Flavor::Charm => QUARK_CHARM_MASS,
            Flavor::Bottom => QUARK_BOTTOM_MASS,
            Flavor::Top => QUARK_TOP_MASS,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Flavor::Up => 'u',
            Flavor::Down => 'd',
            Flavor::Strange => 's',
            Flavor::Charm => 'c',
            Flavor::Bottom => 'b',
            Flavor::Top => 't',
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flavor::Up => "up",
            Flavor::Down => "down",
            Flavor::Strange => "strange",
            Flavor::Charm => "charm",
            Flavor::Bottom => "bottom",
            Flavor::Top => "top",
        };
        f.write_str(name)
    }
}

/// A single quark
///
/// Only built through the constructors below, so charge and mass always match
/// the flavor, except for [`Quark::null`] which zeroes everything.
///
/// ```compile_fail
/// use particle_physics::{Flavor, Quark};
///
/// let forged = Quark { flavor: Flavor::Strange, spin: 7.0, charge: 5.0, mass: -1.0 };
/// ```
///
/// ```compile_fail
/// use particle_physics::Quark;
///
/// let mut q = Quark::gen1(true, true);
/// q.charge = 9.0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quark {
    flavor: Flavor,
    spin: f32,
    charge: f32,
    mass: f32,
}

impl Quark {
    /// Placeholder quark with zero spin, charge and mass
    pub const fn null() -> Self {
        Self {
            flavor: Flavor::Up,
            spin: 0.0,
            charge: 0.0,
            mass: 0.0,
        }
    }

    /// Create a quark of the given flavor
    pub fn new(flavor: Flavor, positive_spin: bool) -> Self {
        Self {
            flavor,
            spin: if positive_spin { QUARK_SPIN } else { -QUARK_SPIN },
            charge: flavor.charge(),
            mass: flavor.mass(),
        }
    }

    /// Up (positive charge) or down quark
    pub fn gen1(positive_charge: bool, positive_spin: bool) -> Self {
        Self::new(Generation::First.flavor(positive_charge), positive_spin)
    }

    /// Charm (positive charge) or strange quark
    pub fn gen2(positive_charge: bool, positive_spin: bool) -> Self {
        Self::new(Generation::Second.flavor(positive_charge), positive_spin)
    }

    /// Top (positive charge) or bottom quark
    pub fn gen3(positive_charge: bool, positive_spin: bool) -> Self {
        Self::new(Generation::Third.flavor(positive_charge), positive_spin)
    }

    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Spin projection, +0.5 or -0.5
    pub const fn spin(&self) -> f32 {
        self.spin
    }

    /// Electric charge in units of e
    pub const fn charge(&self) -> f32 {
        self.charge
    }

    /// Rest mass in eV
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    pub fn is_spin_up(&self) -> bool {
        self.spin > 0.0
    }

    /// Generation of the flavor, `None` for the null quark
    pub fn generation(&self) -> Option<Generation> {
        if self.is_null() {
            None
        } else {
            Some(self.flavor.generation())
        }
    }
}

impl Default for Quark {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for Quark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("∅");
        }
        let arrow = if self.is_spin_up() { '↑' } else { '↓' };
        write!(f, "{}{}", self.flavor.symbol(), arrow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLS: [bool; 2] = [true, false];

    fn expected_spin(positive_spin: bool) -> f32 {
        if positive_spin {
            0.5
        } else {
            -0.5
        }
    }

    #[test]
    fn test_gen1_all_combinations() {
        for positive_charge in BOOLS {
            for positive_spin in BOOLS {
                let q = Quark::gen1(positive_charge, positive_spin);
                if positive_charge {
                    assert_eq!(q.flavor(), Flavor::Up);
                    assert_eq!(q.charge(), 2.0 / 3.0);
                    assert_eq!(q.mass(), 2.2e6);
                } else {
                    assert_eq!(q.flavor(), Flavor::Down);
                    assert_eq!(q.charge(), -1.0 / 3.0);
                    assert_eq!(q.mass(), 4.7e6);
                }
                assert_eq!(q.spin(), expected_spin(positive_spin));
            }
        }
    }

    #[test]
    fn test_gen2_all_combinations() {
        for positive_charge in BOOLS {
            for positive_spin in BOOLS {
                let q = Quark::gen2(positive_charge, positive_spin);
                if positive_charge {
                    assert_eq!(q.flavor(), Flavor::Charm);
                    assert_eq!(q.charge(), 2.0 / 3.0);
                    assert_eq!(q.mass(), 1.28e9);
                } else {
                    assert_eq!(q.flavor(), Flavor::Strange);
                    assert_eq!(q.charge(), -1.0 / 3.0);
                    assert_eq!(q.mass(), 9.6e7);
                }
                assert_eq!(q.spin(), expected_spin(positive_spin));
            }
        }
    }

    #[test]
    fn test_gen3_all_combinations() {
        for positive_charge in BOOLS {
            for positive_spin in BOOLS {
                let q = Quark::gen3(positive_charge, positive_spin);
                if positive_charge {
                    assert_eq!(q.flavor(), Flavor::Top);
                    assert_eq!(q.charge(), 2.0 / 3.0);
                    assert_eq!(q.mass(), 1.731e11);
                } else {
                    assert_eq!(q.flavor(), Flavor::Bottom);
                    assert_eq!(q.charge(), -1.0 / 3.0);
                    assert_eq!(q.mass(), 4.18e9);
                }
                assert_eq!(q.spin(), expected_spin(positive_spin));
            }
        }
    }

    #[test]
    fn test_null_quark() {
        let q = Quark::null();
        assert_eq!(q.flavor(), Flavor::Up);
        assert_eq!(q.spin(), 0.0);
        assert_eq!(q.charge(), 0.0);
        assert_eq!(q.mass(), 0.0);
        assert!(q.is_null());
        assert_eq!(q.generation(), None);
        assert_eq!(Quark::default(), q);
    }

    #[test]
    fn test_real_quarks_are_not_null() {
        assert!(!Quark::gen1(true, true).is_null());
        assert!(!Quark::gen1(true, false).is_null());
    }

    #[test]
    fn test_generation_roundtrip() {
        for generation in [Generation::First, Generation::Second, Generation::Third] {
            assert_eq!(generation.flavor(true).generation(), generation);
            assert_eq!(generation.flavor(false).generation(), generation);
        }
        assert_eq!(Quark::gen3(false, true).generation(), Some(Generation::Third));
    }

    #[test]
    fn test_every_flavor_matches_its_table_row() {
        let table = [
            (Flavor::Up, 2.0 / 3.0, 2.2e6),
            (Flavor::Down, -1.0 / 3.0, 4.7e6),
            (Flavor::Charm, 2.0 / 3.0, 1.28e9),
            (Flavor::Strange, -1.0 / 3.0, 9.6e7),
            (Flavor::Top, 2.0 / 3.0, 1.731e11),
            (Flavor::Bottom, -1.0 / 3.0, 4.18e9),
        ];
        for (flavor, charge, mass) in table {
            for positive_spin in BOOLS {
                let q = Quark::new(flavor, positive_spin);
                assert_eq!(q.flavor(), flavor);
                assert_eq!(q.charge(), charge);
                assert_eq!(q.mass(), mass);
                assert_eq!(q.spin(), expected_spin(positive_spin));
                assert!(!q.is_null());
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Quark::gen1(true, true).to_string(), "u↑");
        assert_eq!(Quark::gen2(false, false).to_string(), "s↓");
        assert_eq!(Quark::null().to_string(), "∅");
        assert_eq!(Flavor::Bottom.to_string(), "bottom");
    }

    #[test]
    fn test_constructors_are_deterministic() {
        assert_eq!(Quark::gen2(true, false), Quark::gen2(true, false));
        assert_eq!(Quark::new(Flavor::Top, true), Quark::gen3(true, true));
    }
}
