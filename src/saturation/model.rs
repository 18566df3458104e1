//! The table-backed property model.

use std::ops::RangeInclusive;

use uom::si::{
    available_energy::joule_per_kilogram,
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, Ratio, SpecificHeatCapacity, SpecificVolume,
        ThermalConductivity, ThermodynamicTemperature,
    },
    mass_density::{gram_per_cubic_meter, kilogram_per_cubic_meter},
    pressure::bar,
    radiant_exposure::joule_per_square_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    temperature_coefficient::per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{
    KinematicViscosity, LatentHeat, SurfaceTension, ThermalDiffusivity, ThermalExpansion,
};

use super::{
    error::UnknownProperty,
    property::{Derivation, Property},
    table::{Column, SaturationTable},
};

/// Saturated-water property model over the embedded reference table.
///
/// Construction is free and allocation-less; the model holds only a
/// reference to `'static` data, so it is `Copy` and safe to share across
/// threads.
///
/// The untyped [`resolve`](Self::resolve) front returns plain `f64` values
/// in the units listed on [`Property`]; the typed accessors wrap the same
/// lookups in [`uom`] quantities.
///
/// ```
/// use uom::si::{
///     f64::ThermodynamicTemperature, pressure::kilopascal,
///     thermodynamic_temperature::degree_celsius,
/// };
/// use watersat::saturation::SaturatedWater;
///
/// let water = SaturatedWater::new();
/// let boiling = ThermodynamicTemperature::new::<degree_celsius>(100.0);
///
/// let p = water.saturation_pressure(boiling);
/// assert!((101.0..102.0).contains(&p.get::<kilopascal>()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SaturatedWater {
    table: SaturationTable,
}

impl SaturatedWater {
    /// A model over the embedded reference table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: SaturationTable::reference(),
        }
    }

    /// The underlying table, for callers that want to inspect the data or
    /// check a domain before resolving.
    #[must_use]
    pub const fn table(&self) -> &SaturationTable {
        &self.table
    }

    /// The tabulated temperature range, K.
    #[must_use]
    pub fn temperature_domain(&self) -> RangeInclusive<f64> {
        self.table.domain(Column::Temp)
    }

    /// The tabulated pressure range, bar.
    #[must_use]
    pub fn pressure_domain(&self) -> RangeInclusive<f64> {
        self.table.domain(Column::Pres)
    }

    /// Resolves `property` at `x` by piecewise-linear interpolation.
    ///
    /// `x` is a temperature in kelvin for every property except
    /// [`Property::SaturationTemperature`], which interpolates the
    /// temperature column against pressure in bar. At a tabulated abscissa
    /// the tabulated value (times the property's unit scale) is returned.
    ///
    /// The call is infallible. Outside the tabulated domain the boundary
    /// segment's line is extended and a single [`tracing`] warning event
    /// reports the excursion; the embedding application routes it by
    /// installing a subscriber, and with none installed it is a no-op.
    /// NaN input propagates to a NaN result without an event.
    ///
    /// ```
    /// use watersat::saturation::{Property, SaturatedWater};
    ///
    /// let water = SaturatedWater::new();
    /// let rho = water.resolve(Property::LiquidDensity, 293.15);
    /// assert!((995.0..1000.0).contains(&rho));
    /// ```
    #[must_use]
    pub fn resolve(&self, property: Property, x: f64) -> f64 {
        let recipe = property.recipe();
        let axis = recipe.axis.column();

        let domain = self.table.domain(axis);
        if !x.is_nan() && !domain.contains(&x) {
            tracing::warn!(
                property = %property,
                value = x,
                min = *domain.start(),
                max = *domain.end(),
                "value outside the tabulated saturation range; result is extrapolated"
            );
        }

        let raw = match recipe.derivation {
            Derivation::Column(column) => self.table.interpolate(axis, column, x),
            Derivation::Product(a, b) => {
                self.table.interpolate(axis, a, x) * self.table.interpolate(axis, b, x)
            }
            Derivation::Diffusivity { k, v, cp } => {
                self.table.interpolate(axis, k, x) * self.table.interpolate(axis, v, x)
                    / self.table.interpolate(axis, cp, x)
            }
            Derivation::DensityOf(column) => 1000.0 / self.table.interpolate(axis, column, x),
        };

        raw * recipe.scale
    }

    /// Resolves a property by its canonical symbol.
    ///
    /// Symbols match ASCII case-insensitively with surrounding whitespace
    /// ignored; [`Property::symbol`] lists the canonical spellings.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownProperty`] if `name` is not a catalog symbol.
    pub fn resolve_named(&self, name: &str, x: f64) -> Result<f64, UnknownProperty> {
        let property = name.parse::<Property>()?;
        Ok(self.resolve(property, x))
    }

    fn at(&self, property: Property, temperature: ThermodynamicTemperature) -> f64 {
        self.resolve(property, temperature.get::<kelvin>())
    }

    /// Saturation temperature at `pressure`.
    #[must_use]
    pub fn saturation_temperature(&self, pressure: Pressure) -> ThermodynamicTemperature {
        let t = self.resolve(Property::SaturationTemperature, pressure.get::<bar>());
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    /// Saturation pressure at `temperature`.
    #[must_use]
    pub fn saturation_pressure(&self, temperature: ThermodynamicTemperature) -> Pressure {
        Pressure::new::<bar>(self.at(Property::SaturationPressure, temperature))
    }

    /// Specific volume of the saturated liquid.
    #[must_use]
    pub fn liquid_specific_volume(&self, temperature: ThermodynamicTemperature) -> SpecificVolume {
        SpecificVolume::new::<cubic_meter_per_kilogram>(
            self.at(Property::LiquidSpecificVolume, temperature),
        )
    }

    /// Specific volume of the saturated vapor.
    #[must_use]
    pub fn vapor_specific_volume(&self, temperature: ThermodynamicTemperature) -> SpecificVolume {
        SpecificVolume::new::<cubic_meter_per_kilogram>(
            self.at(Property::VaporSpecificVolume, temperature),
        )
    }

    /// Density of the saturated liquid.
    #[must_use]
    pub fn liquid_density(&self, temperature: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.at(Property::LiquidDensity, temperature))
    }

    /// Density of the saturated vapor.
    ///
    /// The `rhog` tag resolves in g/m³; the conversion happens here, so the
    /// returned quantity is the physical vapor density.
    #[must_use]
    pub fn vapor_density(&self, temperature: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<gram_per_cubic_meter>(self.at(Property::VaporDensity, temperature))
    }

    /// Latent heat of vaporization.
    #[must_use]
    pub fn latent_heat(&self, temperature: ThermodynamicTemperature) -> LatentHeat {
        LatentHeat::new::<joule_per_kilogram>(self.at(Property::LatentHeat, temperature))
    }

    /// Specific heat of the saturated liquid.
    #[must_use]
    pub fn liquid_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.at(Property::LiquidHeatCapacity, temperature),
        )
    }

    /// Specific heat of the saturated vapor.
    #[must_use]
    pub fn vapor_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.at(Property::VaporHeatCapacity, temperature),
        )
    }

    /// Dynamic viscosity of the saturated liquid.
    #[must_use]
    pub fn liquid_viscosity(&self, temperature: ThermodynamicTemperature) -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(self.at(Property::LiquidViscosity, temperature))
    }

    /// Dynamic viscosity of the saturated vapor.
    #[must_use]
    pub fn vapor_viscosity(&self, temperature: ThermodynamicTemperature) -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(self.at(Property::VaporViscosity, temperature))
    }

    /// Kinematic viscosity of the saturated liquid.
    #[must_use]
    pub fn liquid_kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> KinematicViscosity {
        KinematicViscosity::new::<square_meter_per_second>(
            self.at(Property::LiquidKinematicViscosity, temperature),
        )
    }

    /// Kinematic viscosity of the saturated vapor.
    #[must_use]
    pub fn vapor_kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> KinematicViscosity {
        KinematicViscosity::new::<square_meter_per_second>(
            self.at(Property::VaporKinematicViscosity, temperature),
        )
    }

    /// Thermal conductivity of the saturated liquid.
    #[must_use]
    pub fn liquid_conductivity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(
            self.at(Property::LiquidConductivity, temperature),
        )
    }

    /// Thermal conductivity of the saturated vapor.
    #[must_use]
    pub fn vapor_conductivity(&self, temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(
            self.at(Property::VaporConductivity, temperature),
        )
    }

    /// Thermal diffusivity of the saturated liquid.
    #[must_use]
    pub fn liquid_thermal_diffusivity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> ThermalDiffusivity {
        ThermalDiffusivity::new::<square_meter_per_second>(
            self.at(Property::LiquidThermalDiffusivity, temperature),
        )
    }

    /// Thermal diffusivity of the saturated vapor.
    ///
    /// The 645 K row tabulates a zero vapor heat capacity, so the value is
    /// unbounded at that node.
    #[must_use]
    pub fn vapor_thermal_diffusivity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> ThermalDiffusivity {
        ThermalDiffusivity::new::<square_meter_per_second>(
            self.at(Property::VaporThermalDiffusivity, temperature),
        )
    }

    /// Prandtl number of the saturated liquid.
    #[must_use]
    pub fn liquid_prandtl(&self, temperature: ThermodynamicTemperature) -> Ratio {
        Ratio::new::<ratio>(self.at(Property::LiquidPrandtl, temperature))
    }

    /// Prandtl number of the saturated vapor.
    #[must_use]
    pub fn vapor_prandtl(&self, temperature: ThermodynamicTemperature) -> Ratio {
        Ratio::new::<ratio>(self.at(Property::VaporPrandtl, temperature))
    }

    /// Surface tension of the liquid-vapor interface.
    #[must_use]
    pub fn surface_tension(&self, temperature: ThermodynamicTemperature) -> SurfaceTension {
        SurfaceTension::new::<joule_per_square_meter>(self.at(Property::SurfaceTension, temperature))
    }

    /// Volumetric thermal expansion coefficient of the saturated liquid.
    #[must_use]
    pub fn liquid_thermal_expansion(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> ThermalExpansion {
        ThermalExpansion::new::<per_kelvin>(self.at(Property::LiquidThermalExpansion, temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use approx::assert_relative_eq;
    use tracing::{Event, Level, Metadata, span};
    use uom::si::pressure::pascal;

    const WATER: SaturatedWater = SaturatedWater::new();

    /// Counts WARN events emitted while a closure runs.
    struct WarnCounter {
        warnings: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for WarnCounter {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() == Level::WARN
        }

        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::WARN {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = WarnCounter {
            warnings: Arc::clone(&warnings),
        };
        tracing::subscriber::with_default(subscriber, f);
        warnings.load(Ordering::SeqCst)
    }

    #[test]
    fn node_lookups_scale_to_si() {
        assert_relative_eq!(
            WATER.resolve(Property::LiquidViscosity, 273.13),
            1750e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LatentHeat, 373.15),
            2.257e6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidConductivity, 300.0),
            0.613,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::SurfaceTension, 300.0),
            71.7e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidThermalExpansion, 300.0),
            276.1e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidSpecificVolume, 300.0),
            1.003e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidHeatCapacity, 273.13),
            4217.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn derived_properties_combine_columns_at_the_same_abscissa() {
        assert_relative_eq!(
            WATER.resolve(Property::LiquidKinematicViscosity, 300.0),
            855.0 * 1.003 * 1e-9,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::VaporKinematicViscosity, 300.0),
            9.09 * 39.13 * 1e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidThermalDiffusivity, 300.0),
            613.0 * 1.003 / 4.179 * 1e-9,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::VaporThermalDiffusivity, 300.0),
            19.6 * 39.13 / 1.872 * 1e-6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn derived_properties_interpolate_operands_before_combining() {
        // Midway between the 310 K and 315 K rows each operand column
        // interpolates to its own midpoint before the combine.
        assert_relative_eq!(
            WATER.resolve(Property::LiquidKinematicViscosity, 312.5),
            ((695.0 + 631.0) / 2.0) * ((1.007 + 1.009) / 2.0) * 1e-9,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::VaporKinematicViscosity, 312.5),
            ((9.49 + 9.69) / 2.0) * ((22.93 + 17.82) / 2.0) * 1e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidThermalDiffusivity, 312.5),
            ((628.0 + 634.0) / 2.0) * ((1.007 + 1.009) / 2.0) / ((4.178 + 4.179) / 2.0) * 1e-9,
            max_relative = 1e-12
        );
    }

    #[test]
    fn liquid_density_is_the_reciprocal_of_liquid_specific_volume() {
        for t in [273.13, 300.0, 373.15, 500.0, 620.0] {
            let product = WATER.resolve(Property::LiquidDensity, t)
                * WATER.resolve(Property::LiquidSpecificVolume, t);
            assert_relative_eq!(product, 1.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn vapor_density_resolves_in_grams_per_cubic_meter() {
        assert_relative_eq!(
            WATER.resolve(Property::VaporDensity, 373.15),
            1000.0 / 1.679,
            max_relative = 1e-12
        );
    }

    #[test]
    fn temperature_and_pressure_invert_each_other() {
        for t in [273.13, 310.0, 312.5, 373.15, 645.0] {
            let p = WATER.resolve(Property::SaturationPressure, t);
            assert_relative_eq!(
                WATER.resolve(Property::SaturationTemperature, p),
                t,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn interpolates_on_the_bracketing_segment() {
        // Midway between the 310 K and 315 K rows.
        assert_relative_eq!(
            WATER.resolve(Property::LatentHeat, 312.5),
            2408e3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn extrapolates_below_the_table() {
        let muf = WATER.resolve(Property::LiquidViscosity, 200.0);
        let segment = 1750.0 + (1652.0 - 1750.0) * ((200.0 - 273.13) / (275.0 - 273.13));
        assert_relative_eq!(muf, segment * 1e-6, max_relative = 1e-12);
        // The extended line keeps climbing below the triple point; a clamp
        // would have returned the first row instead.
        assert!(muf > 1750e-6);
    }

    #[test]
    fn extrapolates_above_the_table() {
        let pres = WATER.resolve(Property::SaturationPressure, 700.0);
        let segment = 215.2 + (221.2 - 215.2) * ((700.0 - 645.0) / (647.3 - 645.0));
        assert_relative_eq!(pres, segment, max_relative = 1e-12);
        assert!(pres > 221.2);
    }

    #[test]
    fn warns_once_per_out_of_domain_call() {
        let single = count_warnings(|| {
            let _ = WATER.resolve(Property::LiquidViscosity, 200.0);
        });
        assert_eq!(single, 1);

        // A product derivation touches two columns but still reports once.
        let product = count_warnings(|| {
            let _ = WATER.resolve(Property::LiquidKinematicViscosity, 200.0);
        });
        assert_eq!(product, 1);
    }

    #[test]
    fn stays_quiet_inside_the_domain() {
        let count = count_warnings(|| {
            let _ = WATER.resolve(Property::LatentHeat, 300.0);
            let _ = WATER.resolve(Property::SaturationTemperature, 1.0133);
            let _ = WATER.resolve(Property::LiquidViscosity, 273.13);
            let _ = WATER.resolve(Property::LiquidViscosity, 647.3);
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn nan_input_yields_nan_without_a_warning() {
        let count = count_warnings(|| {
            assert!(WATER.resolve(Property::LatentHeat, f64::NAN).is_nan());
        });
        assert_eq!(count, 0);
    }

    #[test]
    fn critical_row_sentinels_pass_through() {
        assert_relative_eq!(
            WATER.resolve(Property::LiquidHeatCapacity, 647.3),
            1e23,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.resolve(Property::LiquidViscosity, 647.3),
            45e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(WATER.resolve(Property::LatentHeat, 647.3), 0.0);
        assert_relative_eq!(WATER.resolve(Property::SurfaceTension, 647.3), 0.0);
    }

    #[test]
    fn vapor_diffusivity_is_unbounded_at_the_645_k_row() {
        // That row tabulates Cpg = 0.
        assert!(
            WATER
                .resolve(Property::VaporThermalDiffusivity, 645.0)
                .is_infinite()
        );
    }

    #[test]
    fn resolve_named_accepts_any_casing() {
        let hfg = WATER.resolve_named("hfg", 373.15).unwrap();
        assert_relative_eq!(hfg, 2.257e6, max_relative = 1e-12);

        let cpf = WATER.resolve_named("cpf", 300.0).unwrap();
        assert_relative_eq!(cpf, 4179.0, max_relative = 1e-12);
    }

    #[test]
    fn resolve_named_rejects_unknown_names() {
        let err = WATER.resolve_named("enthalpy", 300.0).unwrap_err();
        assert_eq!(err.name, "enthalpy");
    }

    #[test]
    fn typed_accessors_agree_with_resolve() {
        let t = ThermodynamicTemperature::new::<kelvin>(373.15);

        assert_relative_eq!(
            WATER.saturation_pressure(t).get::<pascal>(),
            101330.0,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            WATER
                .saturation_temperature(Pressure::new::<bar>(1.0133))
                .get::<kelvin>(),
            373.15,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.liquid_density(t).get::<kilogram_per_cubic_meter>(),
            1000.0 / 1.044,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.vapor_density(t).get::<kilogram_per_cubic_meter>(),
            1.0 / 1.679,
            max_relative = 1e-9
        );
        assert_relative_eq!(WATER.latent_heat(t).value, 2.257e6, max_relative = 1e-12);
        assert_relative_eq!(
            WATER.liquid_viscosity(t).get::<pascal_second>(),
            279e-6,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.liquid_kinematic_viscosity(t).value,
            279.0 * 1.044 * 1e-9,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.liquid_conductivity(t).get::<watt_per_meter_kelvin>(),
            0.68,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.vapor_prandtl(t).get::<ratio>(),
            0.994,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.surface_tension(t).value,
            58.9e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            WATER.liquid_thermal_expansion(t).value,
            750.1e-6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn domains_report_the_table_bounds() {
        assert_eq!(WATER.temperature_domain(), 273.13..=647.3);
        assert_eq!(WATER.pressure_domain(), 0.00611..=221.2);
    }
}
