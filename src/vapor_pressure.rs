//! Saturation vapor pressure from the Tetens correlation.
//!
//! A closed-form alternative to the table-backed
//! [`pres`](crate::saturation::Property::SaturationPressure) lookup:
//!
//! ```text
//! t = T − 273.15                          (°C)
//! p = 6.11 · 10^(7.5·t / (237.3 + t))     (mbar)
//! ```
//!
//! The fit targets liquid water near ambient conditions; it returns 611 Pa
//! at 0 °C and stays within about 1 % of 101 325 Pa at the normal boiling
//! point.
//!
//! # Degenerate input
//!
//! The exponent's denominator vanishes at t = −237.3 °C (35.85 K). The
//! correlation is not guarded there: results in that neighborhood are
//! meaningless, and the caller keeps whatever IEEE-754 arithmetic
//! produces.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Saturation vapor pressure in pascals at `temperature` in kelvin.
#[must_use]
pub fn from_temperature(temperature: f64) -> f64 {
    let t = temperature - 273.15;
    let millibar = 6.11 * 10_f64.powf(7.5 * t / (237.3 + t));
    millibar * 100.0
}

/// Typed variant of [`from_temperature`].
#[must_use]
pub fn pressure(temperature: ThermodynamicTemperature) -> Pressure {
    Pressure::new::<pascal>(from_temperature(temperature.get::<kelvin>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn anchors_at_611_pa_at_zero_celsius() {
        assert_relative_eq!(from_temperature(273.15), 611.0, max_relative = 1e-12);
    }

    #[test]
    fn approximates_one_atmosphere_at_the_boiling_point() {
        assert_relative_eq!(from_temperature(373.15), 101_325.0, max_relative = 0.02);
    }

    #[test]
    fn matches_the_reference_value_at_20_celsius() {
        assert_relative_eq!(from_temperature(293.15), 2338.94, max_relative = 1e-4);
    }

    #[test]
    fn grows_monotonically_over_the_liquid_range() {
        let mut last = from_temperature(273.15);
        for t in 274..=373 {
            let p = from_temperature(f64::from(t));
            assert!(p > last);
            last = p;
        }
    }

    #[test]
    fn typed_variant_agrees_with_the_raw_one() {
        let t = ThermodynamicTemperature::new::<kelvin>(323.15);
        assert_relative_eq!(
            pressure(t).get::<pascal>(),
            from_temperature(323.15),
            max_relative = 1e-12
        );
    }
}
