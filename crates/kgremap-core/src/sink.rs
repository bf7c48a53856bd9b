//! Output serialization.
//!
//! The encoding follows the output file extension:
//!
//! | extension | format |
//! |---|---|
//! | `.json` (and anything unrecognised) | JSON |
//! | `.cbor` | CBOR |
//! | `.bin`, `.bincode` | bincode |
//!
//! Writes go to a sibling `*.tmp` file that is renamed into place, so a
//! failed run never leaves a half-written artifact at the target path.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::{RemapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Cbor,
    Bincode,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("cbor") => OutputFormat::Cbor,
            Some("bin") | Some("bincode") => OutputFormat::Bincode,
            _ => OutputFormat::Json,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Cbor => f.write_str("cbor"),
            OutputFormat::Bincode => f.write_str("bincode"),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn encode_error(path: &Path, format: OutputFormat, err: impl fmt::Display) -> RemapError {
    RemapError::Encode {
        path: path.to_path_buf(),
        format,
        message: err.to_string(),
    }
}

fn encode<W: Write>(dataset: &Dataset, format: OutputFormat, out: &mut W, path: &Path) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, dataset).map_err(|e| encode_error(path, format, e))
        }
        OutputFormat::Cbor => {
            ciborium::ser::into_writer(dataset, &mut *out).map_err(|e| encode_error(path, format, e))
        }
        OutputFormat::Bincode => {
            bincode::serialize_into(&mut *out, dataset).map_err(|e| encode_error(path, format, e))
        }
    }
}

/// Serialize `dataset` to `path` in the format implied by its extension.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RemapError::io(parent, e))?;
    }

    let tmp = tmp_path(path);
    let written = File::create(&tmp)
        .map_err(|e| RemapError::io(&tmp, e))
        .and_then(|file| {
            let mut out = BufWriter::new(file);
            encode(dataset, format, &mut out, path)?;
            out.flush().map_err(|e| RemapError::io(&tmp, e))
        });
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(RemapError::io(path, e));
    }

    tracing::info!(path = %path.display(), %format, "wrote dataset");
    Ok(format)
}

/// Decode an artifact previously written by [`write_dataset`].
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let format = OutputFormat::from_path(path);
    let file = File::open(path).map_err(|e| RemapError::io(path, e))?;
    let reader = BufReader::new(file);
    let decoded = match format {
        OutputFormat::Json => serde_json::from_reader(reader).map_err(|e| e.to_string()),
        OutputFormat::Cbor => ciborium::de::from_reader(reader).map_err(|e| e.to_string()),
        OutputFormat::Bincode => bincode::deserialize_from(reader).map_err(|e| e.to_string()),
    };
    decoded.map_err(|message| RemapError::Decode {
        path: path.to_path_buf(),
        format,
        message,
    })
}
