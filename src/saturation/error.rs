use thiserror::Error;

/// The requested property name is not in the catalog.
///
/// Returned by the string front ([`Property`](super::Property) parsing and
/// [`SaturatedWater::resolve_named`](super::SaturatedWater::resolve_named)).
/// There is no silent fallthrough for unrecognized names; the typed API
/// cannot fail this way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property name: {name:?}")]
pub struct UnknownProperty {
    /// The name as supplied by the caller, after trimming.
    pub name: String,
}
