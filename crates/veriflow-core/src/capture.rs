//! Capture destination preparation.
//!
//! Before presenting the chooser, the coordinator prepares a uniquely-named
//! image file in the public pictures directory for the capture app to write
//! into. Creation failure is tolerated by the caller: the chooser is then
//! presented without a capture alternative.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Fixed prefix of prepared capture file names.
pub const CAPTURE_PREFIX: &str = "JPEG_";

/// Fixed suffix of prepared capture file names.
pub const CAPTURE_SUFFIX: &str = ".jpg";

/// Name stem for a capture file prepared right now: `JPEG_<yyyyMMdd_HHmmss>_`.
pub fn capture_prefix_now() -> String {
    format!("{CAPTURE_PREFIX}{}_", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Create a uniquely-named file in `dir` and return its path.
///
/// The file persists after creation; a later capture writes into it. The
/// coordinator never deletes it, even when the chooser is cancelled (the
/// capture app may still hold the path).
pub fn create_unique_file(dir: &Path, prefix: &str, suffix: &str) -> io::Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(dir)?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// The platform's public pictures directory, unless overridden.
pub fn pictures_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    override_dir.map(Path::to_path_buf).or_else(dirs::picture_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = create_unique_file(dir.path(), "JPEG_20240101_000000_", ".jpg").unwrap();
        let b = create_unique_file(dir.path(), "JPEG_20240101_000000_", ".jpg").unwrap();
        assert_ne!(a, b);
        assert!(a.exists());
        assert!(b.exists());
    }

    #[test]
    fn prefix_and_suffix_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_unique_file(dir.path(), "JPEG_x_", ".jpg").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("JPEG_x_"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = create_unique_file(Path::new("/nonexistent/pictures"), "JPEG_", ".jpg");
        assert!(result.is_err());
    }

    #[test]
    fn timestamped_prefix_is_fixed_width() {
        let prefix = capture_prefix_now();
        // JPEG_ + yyyyMMdd + _ + HHmmss + _
        assert_eq!(prefix.len(), "JPEG_".len() + 8 + 1 + 6 + 1);
        assert!(prefix.starts_with("JPEG_"));
        assert!(prefix.ends_with('_'));
    }
}
