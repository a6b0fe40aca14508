use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead + Send>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let reader = open_maybe_gz(path)?;
    serde_json::from_reader(reader).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
