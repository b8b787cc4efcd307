use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn maint_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".homemaint"))
}

/// Default store location: ~/.homemaint/home.csv. The directory is
/// created lazily by the first save.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(maint_home()?.join("home.csv"))
}
