use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Error;
use crate::Result;

fn display_path(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(display_path(file_path), e))
}

/// Reads a UTF-8 encoded text document into memory.
pub fn read_document(file_path: &Path) -> Result<String> {
    let input_file = open_input_file(file_path)?;
    let mut text = String::new();
    BufReader::new(input_file)
        .read_to_string(&mut text)
        .map_err(|e| Error::UnableToReadInputFile(display_path(file_path), e))?;
    log::info!("Read {} bytes from '{}'", text.len(), display_path(file_path));
    Ok(text)
}
