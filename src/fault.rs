//! Reading a file and computing with its contents, where some failures are
//! reported and swallowed and others are turned into a crate error.
//! Cleanup runs on every path through [`process_file`].

use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{error, info, warn};

use crate::Error;

const DIVIDEND: Decimal = Decimal::TEN;

/// Result of a successful [`process_file`].
#[derive(Debug, PartialEq)]
pub struct Processed {
    pub content: String,
    pub quotient: Decimal,
}

/// Runs on drop, closing the file if it was opened.
struct Cleanup {
    file: Option<File>,
}

impl Drop for Cleanup {
    fn drop(&mut self) {
        let closed = self.file.take().is_some();
        info!(closed, "cleanup always runs");
    }
}

/// Reads `path`, then divides 10 by `divisor`.
///
/// * A missing file is logged and yields `Ok(None)`.
/// * A zero divisor is logged and yields [`Error::CannotCompute`].
/// * Any other I/O error is returned as [`Error::Io`].
pub fn process_file<P: AsRef<Path>>(path: P, divisor: Decimal) -> Result<Option<Processed>, Error> {
    let path = path.as_ref();
    let mut cleanup = Cleanup { file: None };

    let file = match File::open(path) {
        Ok(file) => cleanup.file.insert(file),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), error = %err, "file not found");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    if divisor.is_zero() {
        error!(%divisor, "division by zero");
        return Err(Error::CannotCompute);
    }
    let quotient = match DIVIDEND.checked_div(divisor) {
        Some(quotient) => quotient,
        None => {
            error!(%divisor, "quotient overflows");
            return Err(Error::CannotCompute);
        }
    };

    Ok(Some(Processed { content, quotient }))
}
