// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Centers configuration.
//!
//! The centers file is a JSON array of centers, for example:
//!
//! ```json
//! [
//!   {
//!     "id": "bcn",
//!     "name": "Barcelona",
//!     "vacation_days": 22,
//!     "local_holidays": [{ "month": 8, "day": 24, "name": "La Mercè" }]
//!   }
//! ]
//! ```
//!
//! Local holiday months are zero-based (`8` is September).

use crate::error::CliError;
use gymdesk::find_center;
use gymdesk_domain::{Center, validate_centers};
use std::path::Path;
use tracing::{debug, info};

/// Reads and validates a centers file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON list of
/// centers, or the centers fail validation.
pub fn load_centers(path: &Path) -> Result<Vec<Center>, CliError> {
    let config_error = |message: String| CliError::Config {
        path: path.to_path_buf(),
        message,
    };

    let raw: String = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let centers: Vec<Center> =
        serde_json::from_str(&raw).map_err(|e| config_error(e.to_string()))?;
    validate_centers(&centers)?;

    info!(
        path = %path.display(),
        centers = centers.len(),
        "Loaded centers"
    );
    Ok(centers)
}

/// Reads the centers file if one was given.
///
/// # Errors
///
/// Same as [`load_centers`].
pub fn load_optional_centers(path: Option<&Path>) -> Result<Vec<Center>, CliError> {
    match path {
        Some(path) => load_centers(path),
        None => {
            debug!("No centers file, using national holidays only");
            Ok(Vec::new())
        }
    }
}

/// Looks up the vacation allotment of a center.
///
/// # Errors
///
/// Returns an error if a center id is given that is not in `centers`.
pub fn resolve_allotment(
    centers: &[Center],
    center_id: Option<&str>,
) -> Result<Option<u16>, CliError> {
    let Some(center_id) = center_id else {
        return Ok(None);
    };
    let center: &Center = find_center(centers, center_id)?;
    Ok(Some(center.vacation_days))
}
