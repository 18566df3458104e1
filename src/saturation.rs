//! Saturated-water properties from an embedded reference table.
//!
//! [`SaturatedWater`] resolves twenty-one liquid/vapor properties along the
//! saturation line by piecewise-linear interpolation over a fixed 55-row
//! table spanning the triple point (273.13 K) to the critical point
//! (647.3 K). Properties are addressed by [`Property`] variant, by
//! canonical symbol through the string front, or through typed accessors
//! returning [`uom`] quantities.
//!
//! # Units
//!
//! The untyped front resolves in SI except where noted:
//!
//! | symbol  | property                                | unit |
//! |---------|-----------------------------------------|------|
//! | `temp`  | saturation temperature (input in bar)   | K |
//! | `pres`  | saturation pressure                     | bar |
//! | `vf`    | liquid specific volume                  | m³/kg |
//! | `vg`    | vapor specific volume                   | m³/kg |
//! | `rhof`  | liquid density                          | kg/m³ |
//! | `rhog`  | vapor density                           | g/m³ |
//! | `hfg`   | latent heat of vaporization             | J/kg |
//! | `Cpf`   | liquid specific heat                    | J/(kg·K) |
//! | `Cpg`   | vapor specific heat                     | J/(kg·K) |
//! | `muf`   | liquid dynamic viscosity                | N·s/m² |
//! | `mug`   | vapor dynamic viscosity                 | N·s/m² |
//! | `nuf`   | liquid kinematic viscosity              | m²/s |
//! | `nug`   | vapor kinematic viscosity               | m²/s |
//! | `kf`    | liquid thermal conductivity             | W/(m·K) |
//! | `kg`    | vapor thermal conductivity              | W/(m·K) |
//! | `alf`   | liquid thermal diffusivity              | m²/s |
//! | `alg`   | vapor thermal diffusivity               | m²/s |
//! | `Prf`   | liquid Prandtl number                   | 1 |
//! | `Prg`   | vapor Prandtl number                    | 1 |
//! | `st`    | surface tension                         | N/m |
//! | `betaf` | liquid thermal expansion coefficient    | 1/K |
//!
//! `pres` stays in bar and `rhog` in g/m³, matching how the consuming
//! pumping models address the table; the typed accessors convert both, so
//! the [`uom`] surface is uniformly SI.
//!
//! # Out-of-range lookups
//!
//! Lookups outside the tabulated domain extend the boundary segment's line
//! and emit one `tracing` warning event per call; they never fail. Callers
//! that want strict validation instead can test against
//! [`SaturatedWater::temperature_domain`] or
//! [`SaturatedWater::pressure_domain`] first.
//!
//! # Example
//!
//! ```
//! use watersat::saturation::SaturatedWater;
//!
//! let water = SaturatedWater::new();
//!
//! // Everything resolves against temperature in kelvin...
//! let hfg = water.resolve_named("hfg", 373.15)?;
//! assert_eq!(hfg, 2.257e6);
//!
//! // ...except `temp`, which inverts the table by pressure in bar.
//! let t_sat = water.resolve_named("temp", 1.0133)?;
//! assert_eq!(t_sat, 373.15);
//! # Ok::<(), watersat::saturation::UnknownProperty>(())
//! ```

mod data;
mod error;
mod model;
mod property;
mod table;

pub use error::UnknownProperty;
pub use model::SaturatedWater;
pub use property::Property;
pub use table::{Column, SaturationRow, SaturationTable};
