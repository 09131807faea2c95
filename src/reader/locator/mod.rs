use std::fmt;
use std::path::{Path, PathBuf};

/// Where an audio resource lives.
///
/// Plain paths and `file://` URLs resolve to [`ResourceLocator::File`]. Any
/// other `scheme://` reference is kept as [`ResourceLocator::Url`]; the reader
/// only opens local files, so those fail with `ResourceUnavailable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    File(PathBuf),
    Url(String),
}

impl ResourceLocator {
    pub fn parse(location: &str) -> Self {
        match split_scheme(location) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("file") => {
                match file_url_path(rest) {
                    Some(path) => ResourceLocator::File(path),
                    None => ResourceLocator::Url(location.to_string()),
                }
            }
            Some(_) => ResourceLocator::Url(location.to_string()),
            None => ResourceLocator::File(PathBuf::from(location)),
        }
    }

    /// Local path, if this locator names one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResourceLocator::File(path) => Some(path),
            ResourceLocator::Url(_) => None,
        }
    }

    /// Lower-cased file extension, used as a format hint.
    pub fn extension(&self) -> Option<String> {
        let path = match self {
            ResourceLocator::File(path) => path.as_path(),
            ResourceLocator::Url(url) => Path::new(url.split(['?', '#']).next().unwrap_or(url)),
        };
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocator::File(path) => write!(f, "{}", path.display()),
            ResourceLocator::Url(url) => f.write_str(url),
        }
    }
}

impl From<&str> for ResourceLocator {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

impl From<String> for ResourceLocator {
    fn from(location: String) -> Self {
        Self::parse(&location)
    }
}

impl From<&String> for ResourceLocator {
    fn from(location: &String) -> Self {
        Self::parse(location)
    }
}

impl From<&Path> for ResourceLocator {
    fn from(path: &Path) -> Self {
        ResourceLocator::File(path.to_path_buf())
    }
}

impl From<PathBuf> for ResourceLocator {
    fn from(path: PathBuf) -> Self {
        ResourceLocator::File(path)
    }
}

impl From<&PathBuf> for ResourceLocator {
    fn from(path: &PathBuf) -> Self {
        ResourceLocator::File(path.clone())
    }
}

impl From<&ResourceLocator> for ResourceLocator {
    fn from(locator: &ResourceLocator) -> Self {
        locator.clone()
    }
}

/// Splits `scheme://rest`. Single-letter schemes are treated as drive letters.
fn split_scheme(location: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = location.split_once("://")?;
    let valid = scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

/// Path part of a `file://` URL. Remote hosts are not local files.
fn file_url_path(rest: &str) -> Option<PathBuf> {
    let (host, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    if !(host.is_empty() || host.eq_ignore_ascii_case("localhost")) || path.is_empty() {
        return None;
    }
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let decoded = percent_decode(path);

    #[cfg(windows)]
    let decoded = match decoded.as_bytes() {
        [b'/', drive, b':', ..] if drive.is_ascii_alphabetic() => decoded[1..].to_string(),
        _ => decoded,
    };

    Some(PathBuf::from(decoded))
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
