//! Supporting utilities used by the property modules.
//!
//! These live outside [`crate::saturation`] because they are not specific
//! to water: [`interpolate`] works over any tabulated curve and [`units`]
//! extends [`uom`] with quantities any thermophysical model might need.

pub mod interpolate;
pub mod units;
