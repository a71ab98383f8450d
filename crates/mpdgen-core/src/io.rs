//! JSON dataset files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{GenError, Result};

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> GenError + '_ {
    move |source| GenError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `records` as a pretty-printed JSON array (two-space indent).
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    let file = File::create(path).map_err(io_err(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| GenError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err(path))?;
    Ok(())
}

/// Read a file that must hold a top-level JSON array.
///
/// Elements are returned untyped so callers can decode them one at a time and
/// skip the ones that do not fit.
pub fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path).map_err(io_err(path))?;
    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| GenError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(GenError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}
