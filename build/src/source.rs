use std::{
    ffi::{OsStr, OsString},
    fs::{metadata, read_dir},
    path::Path,
};

use crate::error::Error;

/// Name fragments that mark a file as a shader source.
pub const SHADER_MARKERS: [&str; 3] = ["vert", "frag", "geom"];

/// Containment check, not a suffix check: `frag_util.txt` carries a marker.
pub fn has_marker(name: impl AsRef<OsStr>) -> bool {
    let name = name.as_ref().to_string_lossy();
    SHADER_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Whether `name`, resolved against `source_dir`, should be compiled. Entries
/// that cannot be stat-ed, such as dangling symlinks, are not sources.
pub fn is_shader_source(source_dir: impl AsRef<Path>, name: impl AsRef<OsStr>) -> bool {
    has_marker(&name)
        && metadata(source_dir.as_ref().join(name.as_ref()))
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
}

/// Lists `source_dir` once and returns the names of all shader sources in
/// listing order.
pub fn scan(source_dir: impl AsRef<Path>) -> Result<Vec<OsString>, Error> {
    let source_dir = source_dir.as_ref();
    let entries =
        read_dir(source_dir).map_err(|error| Error::ReadSourceDir(source_dir.into(), error))?;
    let mut sources = Vec::new();
    for entry in entries {
        let name = entry
            .map_err(|error| Error::ReadSourceDir(source_dir.into(), error))?
            .file_name();
        if is_shader_source(source_dir, &name) {
            sources.push(name);
        }
    }
    Ok(sources)
}
