//! Content hashing for static asset fingerprints.
//!
//! Files are hashed in chunks so large assets (videos, font bundles) do not
//! have to be held in memory.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Number of hex characters of the digest embedded in fingerprinted names.
pub const FINGERPRINT_LEN: usize = 12;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Short content fingerprint of a file: the first [`FINGERPRINT_LEN`] hex chars of its SHA-256.
pub fn fingerprint_path(path: &Path) -> Result<String> {
    let mut digest = sha256_path(path)?;
    digest.truncate(FINGERPRINT_LEN);
    Ok(digest)
}

/// Insert `fingerprint` before the extension of the last path segment.
///
/// `images/logo.png` + `abc` → `images/logo.abc.png`; names without an
/// extension get the fingerprint appended: `LICENSE` → `LICENSE.abc`.
pub fn fingerprinted_name(name: &str, fingerprint: &str) -> String {
    let (dir, file) = match name.rfind('/') {
        Some(i) => name.split_at(i + 1),
        None => ("", name),
    };
    match file.rfind('.') {
        Some(dot) if dot > 0 => format!("{dir}{}.{fingerprint}{}", &file[..dot], &file[dot..]),
        _ => format!("{dir}{file}.{fingerprint}"),
    }
}
