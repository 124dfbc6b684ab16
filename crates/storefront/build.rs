//! Build script for the catalog page storefront.
//!
//! Fingerprints the stylesheet so the page can reference an immutable,
//! content-addressed copy.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex digits of the SHA-256 kept in the file name.
const HASH_LEN: usize = 8;

fn main() -> io::Result<()> {
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let css_path = manifest_dir.join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:warning=Could not read {}", css_path.display());
        println!("cargo:rustc-env=CSS_HASH=");
        return Ok(());
    };

    let hash = short_hash(&content);
    println!("cargo:rustc-env=CSS_HASH={hash}");

    copy_fingerprinted(&manifest_dir, &css_path, &hash)
}

/// First [`HASH_LEN`] hex digits of the content's SHA-256.
fn short_hash(content: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(content));
    digest.chars().take(HASH_LEN).collect()
}

/// Copy `main.css` to `static/css/derived/main.<hash>.css`.
fn copy_fingerprinted(manifest_dir: &Path, css_path: &Path, hash: &str) -> io::Result<()> {
    let derived_dir = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived_dir)?;
    fs::copy(css_path, derived_dir.join(format!("main.{hash}.css")))?;
    Ok(())
}
