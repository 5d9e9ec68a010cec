//! Persists rendered pages to uniquely named temporary files.

use crate::error::MdpError;
use log::debug;
use std::io::Write;
use tempfile::{Builder as TempFileBuilder, TempPath};

const PREFIX: &str = "mdp.";
const SUFFIX: &str = ".html";

/// Writes `data` to a new `mdp.<random>.html` file in the system temp directory.
///
/// The returned [`TempPath`] deletes the file when dropped; call
/// [`TempPath::keep`] to leave it on disk.
pub fn save_html(data: &[u8]) -> Result<TempPath, MdpError> {
    let mut temp_file = TempFileBuilder::new()
        .prefix(PREFIX)
        .suffix(SUFFIX)
        .tempfile()
        .map_err(MdpError::TempFile)?;

    let path = temp_file.path().to_path_buf();
    let write_error = |source| MdpError::WriteOutput {
        path: path.clone(),
        source,
    };

    // Set after creation so the mode does not depend on the umask.
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        temp_file
            .as_file()
            .set_permissions(Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }

    temp_file.write_all(data).map_err(write_error)?;
    temp_file.flush().map_err(write_error)?;

    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(temp_file.into_temp_path())
}
