//! Reading JSON documents from disk or stdin.
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// Read the raw text behind `path`; `-` means stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

pub fn parse_json(text: &str, origin: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| Error::Parse { origin: origin.to_owned(), source })
}

/// Narrow `value` to the node addressed by an RFC 6901 `pointer`.
pub fn select(mut value: Value, pointer: Option<&str>) -> Result<Value> {
    match pointer {
        None | Some("") => Ok(value),
        Some(pointer) => value
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| Error::Pointer(pointer.to_owned())),
    }
}

/// Read, parse and optionally narrow one document.
pub fn load(path: &Path, pointer: Option<&str>) -> Result<Value> {
    let source = read_source(path)?;
    let value = parse_json(&source, &path.display().to_string())?;
    select(value, pointer)
}
