//! The property catalog and its resolution recipes.

use std::{fmt, str::FromStr};

use super::{error::UnknownProperty, table::Column};

/// A saturated-water property that [`SaturatedWater`](super::SaturatedWater)
/// can resolve.
///
/// Each property carries a short canonical symbol (`"muf"`, `"hfg"`, ...)
/// accepted by the string front and printed by `Display`. Subscript `f`
/// denotes the saturated liquid, `g` the saturated vapor. The unit listed
/// per variant is the unit of the resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// `temp`: saturation temperature, K, resolved from pressure in bar.
    SaturationTemperature,
    /// `pres`: saturation pressure, bar.
    SaturationPressure,
    /// `vf`: liquid specific volume, m³/kg.
    LiquidSpecificVolume,
    /// `vg`: vapor specific volume, m³/kg.
    VaporSpecificVolume,
    /// `rhof`: liquid density, kg/m³.
    LiquidDensity,
    /// `rhog`: vapor density, g/m³ (see the module docs on units).
    VaporDensity,
    /// `hfg`: latent heat of vaporization, J/kg.
    LatentHeat,
    /// `Cpf`: liquid specific heat, J/(kg·K).
    LiquidHeatCapacity,
    /// `Cpg`: vapor specific heat, J/(kg·K).
    VaporHeatCapacity,
    /// `muf`: liquid dynamic viscosity, N·s/m².
    LiquidViscosity,
    /// `mug`: vapor dynamic viscosity, N·s/m².
    VaporViscosity,
    /// `nuf`: liquid kinematic viscosity, m²/s.
    LiquidKinematicViscosity,
    /// `nug`: vapor kinematic viscosity, m²/s.
    VaporKinematicViscosity,
    /// `kf`: liquid thermal conductivity, W/(m·K).
    LiquidConductivity,
    /// `kg`: vapor thermal conductivity, W/(m·K).
    VaporConductivity,
    /// `alf`: liquid thermal diffusivity, m²/s.
    LiquidThermalDiffusivity,
    /// `alg`: vapor thermal diffusivity, m²/s.
    VaporThermalDiffusivity,
    /// `Prf`: liquid Prandtl number, dimensionless.
    LiquidPrandtl,
    /// `Prg`: vapor Prandtl number, dimensionless.
    VaporPrandtl,
    /// `st`: surface tension, N/m.
    SurfaceTension,
    /// `betaf`: liquid thermal expansion coefficient, 1/K.
    LiquidThermalExpansion,
}

impl Property {
    /// Every property, in catalog order.
    pub const ALL: [Self; 21] = [
        Self::SaturationTemperature,
        Self::SaturationPressure,
        Self::LiquidSpecificVolume,
        Self::VaporSpecificVolume,
        Self::LiquidDensity,
        Self::VaporDensity,
        Self::LatentHeat,
        Self::LiquidHeatCapacity,
        Self::VaporHeatCapacity,
        Self::LiquidViscosity,
        Self::VaporViscosity,
        Self::LiquidKinematicViscosity,
        Self::VaporKinematicViscosity,
        Self::LiquidConductivity,
        Self::VaporConductivity,
        Self::LiquidThermalDiffusivity,
        Self::VaporThermalDiffusivity,
        Self::LiquidPrandtl,
        Self::VaporPrandtl,
        Self::SurfaceTension,
        Self::LiquidThermalExpansion,
    ];

    /// The canonical short symbol, as accepted by the string front.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::SaturationTemperature => "temp",
            Self::SaturationPressure => "pres",
            Self::LiquidSpecificVolume => "vf",
            Self::VaporSpecificVolume => "vg",
            Self::LiquidDensity => "rhof",
            Self::VaporDensity => "rhog",
            Self::LatentHeat => "hfg",
            Self::LiquidHeatCapacity => "Cpf",
            Self::VaporHeatCapacity => "Cpg",
            Self::LiquidViscosity => "muf",
            Self::VaporViscosity => "mug",
            Self::LiquidKinematicViscosity => "nuf",
            Self::VaporKinematicViscosity => "nug",
            Self::LiquidConductivity => "kf",
            Self::VaporConductivity => "kg",
            Self::LiquidThermalDiffusivity => "alf",
            Self::VaporThermalDiffusivity => "alg",
            Self::LiquidPrandtl => "Prf",
            Self::VaporPrandtl => "Prg",
            Self::SurfaceTension => "st",
            Self::LiquidThermalExpansion => "betaf",
        }
    }

    /// The resolution descriptor: interpolation axis, derivation, and the
    /// factor from raw table units to the resolved unit.
    pub(super) const fn recipe(self) -> Recipe {
        use Column as C;

        let (axis, derivation, scale) = match self {
            Self::SaturationTemperature => (Axis::Pressure, Derivation::Column(C::Temp), 1.0),
            Self::SaturationPressure => (Axis::Temperature, Derivation::Column(C::Pres), 1.0),
            Self::LiquidSpecificVolume => (Axis::Temperature, Derivation::Column(C::Vf), 1e-3),
            Self::VaporSpecificVolume => (Axis::Temperature, Derivation::Column(C::Vg), 1.0),
            Self::LiquidDensity => (Axis::Temperature, Derivation::DensityOf(C::Vf), 1.0),
            Self::VaporDensity => (Axis::Temperature, Derivation::DensityOf(C::Vg), 1.0),
            Self::LatentHeat => (Axis::Temperature, Derivation::Column(C::Hfg), 1e3),
            Self::LiquidHeatCapacity => (Axis::Temperature, Derivation::Column(C::Cpf), 1e3),
            Self::VaporHeatCapacity => (Axis::Temperature, Derivation::Column(C::Cpg), 1e3),
            Self::LiquidViscosity => (Axis::Temperature, Derivation::Column(C::Muf), 1e-6),
            Self::VaporViscosity => (Axis::Temperature, Derivation::Column(C::Mug), 1e-6),
            Self::LiquidKinematicViscosity => {
                (Axis::Temperature, Derivation::Product(C::Muf, C::Vf), 1e-9)
            }
            Self::VaporKinematicViscosity => {
                (Axis::Temperature, Derivation::Product(C::Mug, C::Vg), 1e-6)
            }
            Self::LiquidConductivity => (Axis::Temperature, Derivation::Column(C::Kf), 1e-3),
            Self::VaporConductivity => (Axis::Temperature, Derivation::Column(C::Kg), 1e-3),
            Self::LiquidThermalDiffusivity => (
                Axis::Temperature,
                Derivation::Diffusivity {
                    k: C::Kf,
                    v: C::Vf,
                    cp: C::Cpf,
                },
                1e-9,
            ),
            Self::VaporThermalDiffusivity => (
                Axis::Temperature,
                Derivation::Diffusivity {
                    k: C::Kg,
                    v: C::Vg,
                    cp: C::Cpg,
                },
                1e-6,
            ),
            Self::LiquidPrandtl => (Axis::Temperature, Derivation::Column(C::Prf), 1.0),
            Self::VaporPrandtl => (Axis::Temperature, Derivation::Column(C::Prg), 1.0),
            Self::SurfaceTension => (Axis::Temperature, Derivation::Column(C::St), 1e-3),
            Self::LiquidThermalExpansion => (Axis::Temperature, Derivation::Column(C::Betaf), 1e-6),
        };

        Recipe {
            axis,
            derivation,
            scale,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Property {
    type Err = UnknownProperty;

    /// Parses a canonical symbol, ignoring surrounding whitespace and ASCII
    /// case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|property| property.symbol().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownProperty {
                name: name.to_owned(),
            })
    }
}

/// The independent variable a property interpolates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Axis {
    Temperature,
    Pressure,
}

impl Axis {
    pub(super) const fn column(self) -> Column {
        match self {
            Self::Temperature => Column::Temp,
            Self::Pressure => Column::Pres,
        }
    }
}

/// How a property's raw value is derived from table columns.
///
/// Multi-column derivations interpolate each operand column independently
/// at the same abscissa before combining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Derivation {
    /// A single interpolated column.
    Column(Column),
    /// The product of two interpolated columns.
    Product(Column, Column),
    /// `k·v/cp`: conductivity times specific volume over heat capacity.
    Diffusivity { k: Column, v: Column, cp: Column },
    /// `1000 / v`: density from a specific-volume column.
    DensityOf(Column),
}

/// A property's resolution descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Recipe {
    pub axis: Axis,
    pub derivation: Derivation,
    pub scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn symbols_are_unique() {
        let symbols: HashSet<&str> = Property::ALL.iter().map(|p| p.symbol()).collect();
        assert_eq!(symbols.len(), Property::ALL.len());
    }

    #[test]
    fn every_symbol_parses_back() {
        for property in Property::ALL {
            assert_eq!(property.symbol().parse::<Property>(), Ok(property));
        }
    }

    #[test]
    fn parsing_trims_and_ignores_ascii_case() {
        assert_eq!(" CPF ".parse::<Property>(), Ok(Property::LiquidHeatCapacity));
        assert_eq!("TEMP".parse::<Property>(), Ok(Property::SaturationTemperature));
        assert_eq!("betaF".parse::<Property>(), Ok(Property::LiquidThermalExpansion));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "enthalpy".parse::<Property>().unwrap_err();
        assert_eq!(err.name, "enthalpy");
    }

    #[test]
    fn display_prints_the_symbol() {
        assert_eq!(Property::LatentHeat.to_string(), "hfg");
        assert_eq!(Property::VaporPrandtl.to_string(), "Prg");
    }

    #[test]
    fn only_saturation_temperature_uses_the_pressure_axis() {
        for property in Property::ALL {
            let expected = if property == Property::SaturationTemperature {
                Axis::Pressure
            } else {
                Axis::Temperature
            };
            assert_eq!(property.recipe().axis, expected);
        }
    }
}
