//! libcurl handle setup shared by the version check and the archive download.

use crate::config::Settings;
use std::time::Duration;

/// Applies URL, redirects, user agent and timeouts to a fresh handle.
pub(crate) fn new_easy(url: &str, settings: &Settings) -> Result<curl::easy::Easy, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(&settings.user_agent)?;
    easy.connect_timeout(Duration::from_secs(settings.connect_timeout_secs))?;
    // Abort stalled transfers: below 1 KiB/s for a minute.
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;
    if let Some(secs) = settings.timeout_secs {
        easy.timeout(Duration::from_secs(secs))?;
    }
    Ok(easy)
}

/// GETs `url` and buffers the whole body. Returns the final status and body.
pub(crate) fn get_bytes(url: &str, settings: &Settings) -> Result<(u32, Vec<u8>), curl::Error> {
    let mut body = Vec::new();
    let mut easy = new_easy(url, settings)?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    let code = easy.response_code()?;
    Ok((code, body))
}

/// Status code from an HTTP status line (`HTTP/1.1 404 Not Found`, `HTTP/2 200`).
pub(crate) fn parse_status_line(line: &str) -> Option<u32> {
    let mut parts = line.split_whitespace();
    let proto = parts.next()?;
    if !proto.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse().ok()
}

pub(crate) fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}
