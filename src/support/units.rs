//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for the typed property accessors (temperature,
//! pressure, density, and so on). This module defines the quantities those
//! accessors need that [`uom::si::f64`] doesn't name directly.
//!
//! Every alias shares dimensions with an existing [`uom`] quantity, so the
//! standard unit constructors still apply:
//!
//! ```
//! use uom::si::available_energy::kilojoule_per_kilogram;
//! use watersat::support::units::LatentHeat;
//!
//! let hfg = LatentHeat::new::<kilojoule_per_kilogram>(2257.0);
//! assert_eq!(hfg.value, 2.257e6);
//! ```

mod quantities;

pub use quantities::{
    KinematicViscosity, LatentHeat, SurfaceTension, ThermalDiffusivity, ThermalExpansion,
};
