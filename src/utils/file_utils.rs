/// File handling utilities
///
/// The only place the checker touches the file system.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::SanityError;

/// Read the whole file as UTF-8 text.
///
/// Missing files, permission problems and invalid UTF-8 all come back as
/// `SanityError::UnreadableFile` carrying the underlying `io::Error`.
pub fn read_file_content(file_path: &Path) -> Result<String, SanityError> {
    match fs::read_to_string(file_path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), file_path.display());
            Ok(content)
        }
        Err(source) => {
            if source.kind() == io::ErrorKind::InvalidData {
                debug!("{} is not valid UTF-8", file_path.display());
            }
            Err(SanityError::UnreadableFile {
                path: file_path.to_path_buf(),
                source,
            })
        }
    }
}
