//! Utility helpers — data directory resolution.

use std::path::PathBuf;

/// Get the wasend data directory (e.g. `~/.wasend/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".wasend")
}

/// Helper to get home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_ends_with_wasend() {
        let path = get_data_path();
        assert!(path.ends_with(".wasend"));
    }
}
