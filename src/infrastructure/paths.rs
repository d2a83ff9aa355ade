//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`,
//! which points to the cwd of the last focused terminal (or the folder Zellij
//! was started from). When Zellij runs from a home-directory terminal, paths
//! under `/host` resolve against `~`.

use std::path::PathBuf;

/// Returns the data directory for Zroster output (trace files).
///
/// The directory is `/host/.local/share/zellij/zroster` in the sandbox, which
/// typically resolves to `~/.local/share/zellij/zroster` on the host.
///
/// # Examples
///
/// ```
/// use zroster::infrastructure::data_dir;
///
/// let dir = data_dir();
/// assert_eq!(dir.to_str().unwrap(), "/host/.local/share/zellij/zroster");
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zroster")
}
