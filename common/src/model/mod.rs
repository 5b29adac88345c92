pub mod learning_resource;
pub mod page;
pub mod recommendation;

use serde::{Deserialize, Deserializer};

/// Minute counts arrive as plain JSON numbers: fractional values are kept and
/// `null` reads as zero, so one odd record cannot fail a whole listing.
pub(crate) fn minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
