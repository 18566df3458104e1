//! The reference table and its row and column types.

use std::ops::RangeInclusive;

use crate::support::interpolate::piecewise_linear;

use super::data;

/// One row of the saturation table, in raw column units.
///
/// Raw units are those of the source tabulation, not SI; property
/// resolution applies a per-property scale afterwards. Each field's doc
/// states its raw unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationRow {
    /// Saturation temperature, K.
    pub temp: f64,
    /// Saturation pressure, bar.
    pub pres: f64,
    /// Liquid specific volume, 10⁻³ m³/kg.
    pub vf: f64,
    /// Vapor specific volume, m³/kg.
    pub vg: f64,
    /// Latent heat of vaporization, kJ/kg.
    pub hfg: f64,
    /// Liquid specific heat, kJ/(kg·K).
    pub cpf: f64,
    /// Vapor specific heat, kJ/(kg·K).
    pub cpg: f64,
    /// Liquid dynamic viscosity, 10⁻⁶ N·s/m².
    pub muf: f64,
    /// Vapor dynamic viscosity, 10⁻⁶ N·s/m².
    pub mug: f64,
    /// Liquid thermal conductivity, 10⁻³ W/(m·K).
    pub kf: f64,
    /// Vapor thermal conductivity, 10⁻³ W/(m·K).
    pub kg: f64,
    /// Liquid Prandtl number.
    pub prf: f64,
    /// Vapor Prandtl number.
    pub prg: f64,
    /// Surface tension, 10⁻³ N/m.
    pub st: f64,
    /// Liquid thermal expansion coefficient, 10⁻⁶ 1/K.
    pub betaf: f64,
}

impl SaturationRow {
    /// Reads the field addressed by `column`.
    #[must_use]
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Temp => self.temp,
            Column::Pres => self.pres,
            Column::Vf => self.vf,
            Column::Vg => self.vg,
            Column::Hfg => self.hfg,
            Column::Cpf => self.cpf,
            Column::Cpg => self.cpg,
            Column::Muf => self.muf,
            Column::Mug => self.mug,
            Column::Kf => self.kf,
            Column::Kg => self.kg,
            Column::Prf => self.prf,
            Column::Prg => self.prg,
            Column::St => self.st,
            Column::Betaf => self.betaf,
        }
    }
}

/// A column of the saturation table, named by its header symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Temp,
    Pres,
    Vf,
    Vg,
    Hfg,
    Cpf,
    Cpg,
    Muf,
    Mug,
    Kf,
    Kg,
    Prf,
    Prg,
    St,
    Betaf,
}

/// The saturated-water reference table.
///
/// Rows run from the triple point (273.13 K, 0.00611 bar) to the critical
/// point (647.3 K, 221.2 bar). The `temp` and `pres` columns are strictly
/// increasing, so either can serve as an interpolation axis. The data is
/// `'static` and immutable, so the table can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct SaturationTable {
    rows: &'static [SaturationRow],
}

impl SaturationTable {
    /// The embedded reference table.
    #[must_use]
    pub const fn reference() -> Self {
        Self { rows: &data::ROWS }
    }

    /// All rows, in ascending temperature order.
    #[must_use]
    pub fn rows(&self) -> &'static [SaturationRow] {
        self.rows
    }

    /// The tabulated range of `column`, from its first to its last row.
    ///
    /// This is the interpolation domain for the monotone axis columns
    /// ([`Column::Temp`] and [`Column::Pres`]); for the other columns it is
    /// merely the pair of boundary entries.
    #[must_use]
    pub fn domain(&self, column: Column) -> RangeInclusive<f64> {
        let first = self.rows[0].value(column);
        let last = self.rows[self.rows.len() - 1].value(column);
        first..=last
    }

    /// Interpolates the `target` column against the `axis` column at `x`.
    ///
    /// Outside the tabulated range this extends the boundary segment and
    /// returns the extrapolated value without comment; emitting a
    /// diagnostic is the caller's concern (see
    /// [`SaturatedWater::resolve`](super::SaturatedWater::resolve)).
    #[must_use]
    pub fn interpolate(&self, axis: Column, target: Column, x: f64) -> f64 {
        piecewise_linear(self.rows, |r| r.value(axis), |r| r.value(target), x)
    }
}

impl Default for SaturationTable {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const TABLE: SaturationTable = SaturationTable::reference();

    #[test]
    fn has_fifty_five_rows() {
        assert_eq!(TABLE.rows().len(), 55);
    }

    #[test]
    fn axis_columns_strictly_increase() {
        for pair in TABLE.rows().windows(2) {
            assert!(pair[0].temp < pair[1].temp);
            assert!(pair[0].pres < pair[1].pres);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn spans_triple_point_to_critical_point() {
        assert_eq!(TABLE.domain(Column::Temp), 273.13..=647.3);
        assert_eq!(TABLE.domain(Column::Pres), 0.00611..=221.2);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn row_at_300_k_matches_the_reference_data() {
        let row = TABLE.rows()[6];
        assert_eq!(row.temp, 300.0);
        assert_eq!(row.pres, 0.03531);
        assert_eq!(row.vf, 1.003);
        assert_eq!(row.vg, 39.13);
        assert_eq!(row.hfg, 2438.0);
        assert_eq!(row.cpf, 4.179);
        assert_eq!(row.cpg, 1.872);
        assert_eq!(row.muf, 855.0);
        assert_eq!(row.mug, 9.09);
        assert_eq!(row.kf, 613.0);
        assert_eq!(row.kg, 19.6);
        assert_eq!(row.prf, 5.83);
        assert_eq!(row.prg, 0.857);
        assert_eq!(row.st, 71.7);
        assert_eq!(row.betaf, 276.1);
    }

    #[test]
    fn interpolates_between_rows() {
        // hfg midway between the 310 K (2414) and 315 K (2402) rows.
        assert_relative_eq!(TABLE.interpolate(Column::Temp, Column::Hfg, 312.5), 2408.0);
    }

    #[test]
    fn interpolates_temperature_against_pressure() {
        assert_relative_eq!(
            TABLE.interpolate(Column::Pres, Column::Temp, 1.0133),
            373.15
        );
    }
}
