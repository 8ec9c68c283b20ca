use std::path::{Path, PathBuf};

use crate::error::{convert_io_error, CliError};

pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| convert_io_error(e, path.to_path_buf(), "reading"))
}

pub fn current_dir() -> Result<PathBuf, CliError> {
    std::env::current_dir()
        .map_err(|e| convert_io_error(e, PathBuf::from("."), "getting current directory for"))
}

pub fn create_dir(path: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(path).map_err(|e| convert_io_error(e, path.to_path_buf(), "creating"))
}
