//! Year-month buckets for date-mode organization.
//!
//! "Creation time" is whatever the platform reports through [`std::fs::Metadata::created`].
//! Some filesystems only expose a metadata-change or modification time there, and some
//! expose nothing at all, in which case the modification time is used. The value is
//! taken as-is and never normalized across platforms.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// `strftime` pattern for bucket labels.
pub const BUCKET_FORMAT: &str = "%Y-%m";

/// Formats a timestamp as a `YYYY-MM` bucket in its own time zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use dirsort::date_bucket::format_bucket;
///
/// let time = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
/// assert_eq!(format_bucket(&time), "2024-03");
/// ```
pub fn format_bucket<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(BUCKET_FORMAT).to_string()
}

/// Returns the local-time `YYYY-MM` bucket for a filesystem timestamp.
pub fn month_bucket(time: SystemTime) -> String {
    format_bucket(&DateTime::<Local>::from(time))
}

/// Reads the creation timestamp of a file, falling back to its modification time
/// where the platform does not record one.
pub fn creation_time(path: &Path) -> io::Result<SystemTime> {
    let metadata = fs::metadata(path)?;
    metadata.created().or_else(|_| metadata.modified())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_month_is_zero_padded() {
        assert_eq!(format_bucket(&utc(2023, 1, 15, 0, 0, 0)), "2023-01");
        assert_eq!(format_bucket(&utc(2023, 11, 15, 0, 0, 0)), "2023-11");
    }

    #[test]
    fn test_same_month_maps_to_same_bucket() {
        let early = utc(2024, 2, 1, 0, 0, 0);
        let late = utc(2024, 2, 29, 23, 59, 59);
        assert!(late > early);
        assert_eq!(format_bucket(&early), format_bucket(&late));
    }

    #[test]
    fn test_crossing_month_boundary_changes_bucket() {
        let last_second = utc(2024, 2, 29, 23, 59, 59);
        let next = last_second + Duration::seconds(1);
        assert_eq!(format_bucket(&last_second), "2024-02");
        assert_eq!(format_bucket(&next), "2024-03");
    }

    #[test]
    fn test_year_boundary() {
        let new_year = utc(2024, 1, 1, 0, 0, 0);
        let before = new_year - Duration::seconds(1);
        assert_eq!(format_bucket(&before), "2023-12");
        assert_eq!(format_bucket(&new_year), "2024-01");
    }

    #[test]
    fn test_buckets_never_go_backwards() {
        let start = utc(2022, 6, 1, 0, 0, 0);
        let mut previous = format_bucket(&start);
        for day in 1..800 {
            let bucket = format_bucket(&(start + Duration::days(day)));
            assert!(bucket >= previous, "{bucket} came after {previous}");
            previous = bucket;
        }
    }

    #[test]
    fn test_month_bucket_uses_local_time() {
        let now = SystemTime::now();
        let expected = DateTime::<Local>::from(now).format("%Y-%m").to_string();
        assert_eq!(month_bucket(now), expected);
    }

    #[test]
    fn test_creation_time_of_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("note.txt");
        fs::write(&file_path, "content").expect("Failed to write test file");

        let created = creation_time(&file_path).expect("Failed to read timestamp");
        assert!(created <= SystemTime::now());
    }

    #[test]
    fn test_creation_time_of_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert!(creation_time(&temp_dir.path().join("missing")).is_err());
    }
}
