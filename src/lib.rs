//! # watersat
//!
//! Thermophysical properties of saturated water for pump and thermal
//! simulation models.
//!
//! ## Crate layout
//!
//! - [`saturation`]: Twenty-one liquid/vapor properties along the
//!   saturation line, interpolated from an embedded 55-row reference table
//!   (273.13 K triple point to 647.3 K critical point).
//! - [`vapor_pressure`]: The closed-form Tetens correlation for saturation
//!   vapor pressure, independent of the table.
//! - [`support`]: Supporting utilities (piecewise-linear interpolation and
//!   [`uom`] quantity extensions).
//!
//! ## Diagnostics
//!
//! Out-of-range lookups extrapolate and emit a [`tracing`] warning event
//! rather than failing; the embedding application routes the events by
//! installing a subscriber. With no subscriber installed the crate is
//! silent.

pub mod saturation;
pub mod support;
pub mod vapor_pressure;
