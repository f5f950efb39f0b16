//! Dataset Download and Local Cache
//!
//! Thin collaborator around the two public geolite2-country CSV datasets.
//! The core never touches the network; this module only fills the local
//! cache the loader reads from. All failures surface as
//! [`GeoblockError::Io`](crate::error::GeoblockError).

use crate::error::{GeoblockError, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// IPv4 country dataset (@ip-location-db geolite2-country mirror)
pub const V4_URL: &str =
    "https://cdn.jsdelivr.net/npm/@ip-location-db/geolite2-country/geolite2-country-ipv4.csv";

/// IPv6 country dataset (@ip-location-db geolite2-country mirror)
pub const V6_URL: &str =
    "https://cdn.jsdelivr.net/npm/@ip-location-db/geolite2-country/geolite2-country-ipv6.csv";

/// Local cache filename for the IPv4 dataset
pub const V4_FILE: &str = "geolite2-country-ipv4.csv";

/// Local cache filename for the IPv6 dataset
pub const V6_FILE: &str = "geolite2-country-ipv6.csv";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Download one dataset file to `path`
pub fn download(url: &str, path: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|e| GeoblockError::Io(format!("Failed to build HTTP client: {}", e)))?;

    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map_err(|e| GeoblockError::Io(format!("Failed to download {}: {}", url, e)))?;

    fs::write(path, &body)
        .map_err(|e| GeoblockError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

/// Download whichever dataset files are missing from `dir`.
///
/// With `force` both files are re-downloaded regardless. Returns the two
/// cache paths (v4 first) for the loader.
pub fn ensure_cached(dir: &Path, force: bool) -> Result<(PathBuf, PathBuf)> {
    let v4 = dir.join(V4_FILE);
    let v6 = dir.join(V6_FILE);

    for (url, path) in [(V4_URL, &v4), (V6_URL, &v6)] {
        if force || !path.exists() {
            info!("downloading {}", url);
            download(url, path)?;
        } else {
            info!("using cached {}", path.display());
        }
    }

    Ok((v4, v6))
}
