use std::{
    fs::{create_dir_all, read_dir, remove_file},
    path::Path,
};

use log::debug;

use crate::error::Error;

/// Deletes every entry of `output_dir` as a file and returns how many were
/// removed. A missing directory or a nested directory is an error.
pub fn clear_output(output_dir: impl AsRef<Path>) -> Result<usize, Error> {
    let output_dir = output_dir.as_ref();
    let entries =
        read_dir(output_dir).map_err(|error| Error::ReadOutputDir(output_dir.into(), error))?;
    let mut removed = 0;
    for entry in entries {
        let path = entry
            .map_err(|error| Error::ReadOutputDir(output_dir.into(), error))?
            .path();
        remove_file(&path).map_err(|error| Error::RemoveOutput(path.clone(), error))?;
        debug!("removed {}", path.display());
        removed += 1;
    }
    Ok(removed)
}

pub fn create_output(output_dir: impl AsRef<Path>) -> Result<(), Error> {
    let output_dir = output_dir.as_ref();
    create_dir_all(output_dir).map_err(|error| Error::CreateOutputDir(output_dir.into(), error))
}
