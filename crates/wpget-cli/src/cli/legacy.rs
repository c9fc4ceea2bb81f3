//! Go `flag`-style spellings: `-country es`, `-version=6.4.2`.

use std::ffi::OsString;

/// Long options that may be written with a single dash.
const LONG_FLAGS: &[&str] = &[
    "country",
    "lang",
    "version",
    "output-dir",
    "config",
    "version-url",
    "download-base",
    "url-scheme",
    "verbose",
    "help",
];

/// Rewrites `-name` / `-name=value` to `--name` / `--name=value` for known long
/// options. The program name, values, short flags and anything after `--` pass
/// through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        out.push(match arg.to_str().and_then(rewrite) {
            Some(fixed) => fixed.into(),
            None => arg,
        });
    }
    out
}

fn rewrite(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if LONG_FLAGS.contains(&name) {
        Some(format!("-{}", arg))
    } else {
        None
    }
}
