//! Home directory expansion for configured paths.

use std::path::{Path, PathBuf};

use super::error::SourceError;

/// Expand a leading `~` in `raw`.
///
/// `~` maps to `home` and `~/rest` to `home/rest`. Every other form,
/// including `~user/...`, is returned unchanged and never consults `home`.
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> Result<PathBuf, SourceError> {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(raw));
    };

    let home = home.ok_or_else(|| SourceError::HomeDirUnavailable {
        raw: raw.to_string(),
    })?;

    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}
