#![forbid(unsafe_code)]

//! Constructor options.
//!
//! JS passes an optional JSON object of [`FieldParams`] overrides, e.g.
//! `new DriftFieldWeb(canvas, JSON.stringify({ max_particles: 80 }))`.

use driftfield_core::FieldParams;

use crate::error::WebError;

/// Parse the constructor options. Missing, blank, or `null` options mean
/// defaults; anything else must be a valid (possibly partial) parameter object.
pub fn parse_options(options: Option<&str>) -> Result<FieldParams, WebError> {
    let Some(raw) = options.map(str::trim) else {
        return Ok(FieldParams::default());
    };
    if raw.is_empty() || raw == "null" {
        return Ok(FieldParams::default());
    }
    Ok(FieldParams::from_json_str(raw)?)
}
