use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata describing an opened image file.
#[derive(Debug, Clone)]
pub struct ImageMeta {
    path: PathBuf,
    byte_len: Option<u64>,
    last_modified: Option<SystemTime>,
}

impl ImageMeta {
    /// Build metadata from a filesystem path (size and modified time when available).
    pub fn from_path(path: &Path) -> Self {
        let metadata = std::fs::metadata(path).ok();
        let (byte_len, last_modified) = metadata.map_or((None, None), |meta| {
            (Some(meta.len()), meta.modified().ok())
        });
        Self {
            path: path.to_owned(),
            byte_len,
            last_modified,
        }
    }

    /// File name, or the whole path when it has none.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .map_or_else(|| self.path.display().to_string(), ToOwned::to_owned)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Byte length of the file when known.
    pub const fn byte_len(&self) -> Option<u64> {
        self.byte_len
    }

    /// Last modification timestamp when known.
    pub const fn last_modified(&self) -> Option<SystemTime> {
        self.last_modified
    }
}

/// Format a byte count with binary units (KiB, MiB, ...).
pub fn human_readable_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.2} {}", UNITS[unit_idx])
    }
}

/// Format a `SystemTime` as a UTC timestamp string.
pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = DateTime::from(time);
    datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

/// Return a simplified aspect ratio plus an approximate decimal ratio string.
pub fn describe_aspect_ratio(size: [usize; 2]) -> Option<String> {
    let [w, h] = size;
    if w == 0 || h == 0 {
        return None;
    }
    let divisor = gcd_usize(w, h);
    let simple_w = w / divisor;
    let simple_h = h / divisor;
    #[allow(clippy::cast_precision_loss)]
    let approx = w as f64 / h as f64;
    Some(format!("{simple_w}:{simple_h} (~{approx:.3}:1)"))
}

/// Compute total pixel count with saturating multiplication.
pub fn total_pixel_count(size: [usize; 2]) -> u64 {
    let w = u64::try_from(size[0]).unwrap_or(u64::MAX);
    let h = u64::try_from(size[1]).unwrap_or(u64::MAX);
    w.saturating_mul(h)
}

const fn gcd_usize(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let tmp = a % b;
        a = b;
        b = tmp;
    }
    if a == 0 { 1 } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn bytes_use_binary_units() {
        assert_eq!(human_readable_bytes(512), "512 B");
        assert_eq!(human_readable_bytes(1536), "1.50 KiB");
        assert_eq!(human_readable_bytes(5 * 1024 * 1024), "5.00 MiB");
    }

    #[test]
    fn aspect_ratio_is_reduced() {
        assert_eq!(
            describe_aspect_ratio([1920, 1080]).as_deref(),
            Some("16:9 (~1.778:1)")
        );
        assert_eq!(describe_aspect_ratio([0, 10]), None);
    }

    #[test]
    fn timestamps_render_in_utc() {
        let t = UNIX_EPOCH + Duration::from_secs(86_400);
        assert_eq!(format_system_time(t), "1970-01-02 00:00:00 UTC");
    }

    #[test]
    fn meta_reads_file_size() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cat.png");
        std::fs::write(&path, [0u8; 42]).expect("write");
        let meta = ImageMeta::from_path(&path);
        assert_eq!(meta.display_name(), "cat.png");
        assert_eq!(meta.byte_len(), Some(42));
        assert!(meta.last_modified().is_some());
        assert_eq!(total_pixel_count([3, 4]), 12);
    }
}
