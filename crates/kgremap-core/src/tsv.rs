//! Line-oriented tab-separated record reading shared by the mapping and
//! triple loaders.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{RemapError, Result};

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| RemapError::io(path, e))?;
    Ok(BufReader::new(file))
}

/// Visit every line of `reader` with its 1-based line number.
///
/// Surrounding whitespace (including `\r`) is stripped before the callback
/// sees the line. The callback's first error stops the scan.
pub(crate) fn for_each_line<R, F>(reader: R, source: &Path, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| RemapError::io(source, e))?;
        f(idx + 1, line.trim())?;
    }
    Ok(())
}

/// Split a stripped line into exactly `N` tab-separated fields.
pub(crate) fn split_fields<'a, const N: usize>(
    line: &'a str,
    source: &Path,
    line_no: usize,
) -> Result<[&'a str; N]> {
    let mut out = [""; N];
    let mut found = 0usize;
    for field in line.split('\t') {
        if found < N {
            out[found] = field;
        }
        found += 1;
    }
    if found != N {
        return Err(RemapError::Format {
            path: source.to_path_buf(),
            line: line_no,
            expected: N,
            found,
        });
    }
    Ok(out)
}
