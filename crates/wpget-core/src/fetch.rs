//! Archive download: single HTTP GET streamed to a local file.
//!
//! The destination file is created on the first body chunk of a 2xx
//! response, so a 404 or other error status never touches the filesystem.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::http;
use std::cell::Cell;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Downloads `url` into `dest`, truncating any existing file. Returns the number
/// of bytes written.
///
/// `version` is only used to report [`Error::VersionNotFound`] on a 404.
/// On a failure after the first chunk the partial file is left in place.
pub fn download(url: &str, dest: &Path, version: &str, settings: &Settings) -> Result<u64> {
    let transport = |source| Error::Transport {
        url: url.to_string(),
        source,
    };

    let status = Cell::new(0u32);
    let mut file: Option<File> = None;
    let mut written = 0u64;
    let mut write_err: Option<io::Error> = None;

    let mut easy = http::new_easy(url, settings).map_err(transport)?;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                // Each response in a redirect chain starts with a new status line.
                let line = std::str::from_utf8(data).ok();
                if let Some(code) = line.and_then(http::parse_status_line) {
                    status.set(code);
                }
                true
            })
            .map_err(transport)?;
        transfer
            .write_function(|data| {
                if !http::is_success(status.get()) {
                    // Error page body; discard.
                    return Ok(data.len());
                }
                if file.is_none() {
                    match File::create(dest) {
                        Ok(f) => file = Some(f),
                        Err(e) => {
                            write_err = Some(e);
                            return Ok(0); // abort transfer
                        }
                    }
                }
                let Some(out) = file.as_mut() else {
                    return Ok(0);
                };
                match out.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        write_err = Some(e);
                        Ok(0)
                    }
                }
            })
            .map_err(transport)?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        warn_partial(dest, file.is_some(), written);
        return Err(Error::io(dest, e));
    }
    if let Err(e) = performed {
        warn_partial(dest, file.is_some(), written);
        return Err(transport(e));
    }

    let code = easy.response_code().map_err(transport)?;
    if code == 404 {
        return Err(Error::VersionNotFound {
            version: version.to_string(),
        });
    }
    if !http::is_success(code) {
        return Err(Error::Download {
            url: url.to_string(),
            status: code,
        });
    }

    let mut out = match file {
        Some(f) => f,
        // 2xx with an empty body.
        None => File::create(dest).map_err(|e| Error::io(dest, e))?,
    };
    out.flush().map_err(|e| Error::io(dest, e))?;
    tracing::debug!("wrote {} bytes to {}", written, dest.display());
    Ok(written)
}

fn warn_partial(dest: &Path, created: bool, written: u64) {
    if created {
        tracing::warn!(
            "download aborted; incomplete file left at {} ({} bytes)",
            dest.display(),
            written
        );
    }
}
