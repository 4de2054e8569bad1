//! Named mathematical and physical constants.
//!
//! Physical values are the exact SI defining constants (2019 redefinition)
//! and the conventional standard gravity.

use serde::{Deserialize, Serialize};

/// Ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number, base of the natural logarithm.
pub const E: f64 = std::f64::consts::E;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Planck constant (J·s)
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Boltzmann constant (J/K)
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Standard acceleration of gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Read-only table of the constants above, addressable by field or by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    pub pi: f64,
    pub e: f64,
    #[serde(alias = "c")]
    pub speed_of_light: f64,
    #[serde(alias = "h")]
    pub planck: f64,
    #[serde(alias = "k")]
    pub boltzmann: f64,
    #[serde(alias = "g")]
    pub gravity: f64,
}

/// The process-wide table.
pub static CONSTANTS: Constants = Constants {
    pi: PI,
    e: E,
    speed_of_light: SPEED_OF_LIGHT,
    planck: PLANCK,
    boltzmann: BOLTZMANN,
    gravity: STANDARD_GRAVITY,
};

impl Constants {
    pub fn global() -> &'static Constants {
        &CONSTANTS
    }

    /// `(name, value)` pairs in declaration order. Names match the field names.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("pi", self.pi),
            ("e", self.e),
            ("speed_of_light", self.speed_of_light),
            ("planck", self.planck),
            ("boltzmann", self.boltzmann),
            ("gravity", self.gravity),
        ]
    }

    /// Short symbols accepted by [`Constants::get`] in place of the long names.
    pub const ALIASES: [(&'static str, &'static str); 4] = [
        ("c", "speed_of_light"),
        ("h", "planck"),
        ("k", "boltzmann"),
        ("g", "gravity"),
    ];

    /// Looks up a constant by its field name or its short symbol (`c`, `h`, `k`, `g`).
    pub fn get(&self, name: &str) -> Option<f64> {
        let name = Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map_or(name, |(_, full)| *full);
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}
