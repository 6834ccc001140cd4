//! Append-only password log.
//!
//! Each entry looks like:
//!
//! ```text
//!
//! [2024-05-01 09:30:00]
//! 备注: wifi
//! 密码: Xk3!pQ9a
//! ----------------------------------------
//! ```
//!
//! Entries start with a newline and carry no trailing newline, so
//! consecutive appends stay separated by exactly one line break.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use zeroize::Zeroize;

use crate::error::RecordError;
use crate::pass::Password;

pub const DEFAULT_LOG_PATH: &str = "passwords.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const EMPTY_NOTE: &str = "无";
const RULE_WIDTH: usize = 40;

pub struct PasswordRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub note: &'a str,
    pub password: &'a Password,
}

impl<'a> PasswordRecord<'a> {
    /// Record stamped with the current local time.
    pub fn now(password: &'a Password, note: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            note,
            password,
        }
    }

    pub fn render(&self) -> String {
        let note = match self.note.trim() {
            "" => EMPTY_NOTE,
            n => n,
        };
        format!(
            "\n[{}]\n备注: {}\n密码: {}\n{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            note,
            self.password.as_str(),
            "-".repeat(RULE_WIDTH)
        )
    }
}

/// Append `password` with `note` to the log at `path`, creating it (and its
/// parent directory) if needed.
pub fn save(path: &Path, password: Option<&Password>, note: &str) -> Result<(), RecordError> {
    let password = password.ok_or(RecordError::NothingToSave)?;
    append(path, &PasswordRecord::now(password, note))
}

pub fn append(path: &Path, record: &PasswordRecord<'_>) -> Result<(), RecordError> {
    let fail = |source| RecordError::PersistenceWriteFailure {
        path: PathBuf::from(path),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(fail)?;

    let mut entry = record.render();
    let result = file.write_all(entry.as_bytes()).map_err(fail);
    entry.zeroize();
    result?;

    log::info!("appended password record to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_record<'a>(password: &'a Password, note: &'a str) -> PasswordRecord<'a> {
        PasswordRecord {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            note,
            password,
        }
    }

    #[test]
    fn render_format() {
        let pass = Password::new("Xk3!pQ9a".into());
        assert_eq!(
            fixed_record(&pass, "  wifi ").render(),
            "\n[2024-05-01 09:30:00]\n备注: wifi\n密码: Xk3!pQ9a\n----------------------------------------"
        );
    }

    #[test]
    fn blank_note_renders_placeholder() {
        let pass = Password::new("abcd".into());
        assert!(fixed_record(&pass, "   ").render().contains("\n备注: 无\n"));
    }

    #[test]
    fn append_creates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("passwords.txt");
        let first = Password::new("first111".into());
        let second = Password::new("second22".into());

        append(&path, &fixed_record(&first, "one")).unwrap();
        append(&path, &fixed_record(&second, "")).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            format!(
                "{}{}",
                fixed_record(&first, "one").render(),
                fixed_record(&second, "").render()
            )
        );
        assert_eq!(text.matches(&"-".repeat(40)).count(), 2);
    }

    #[test]
    fn save_without_password() {
        let dir = tempfile::tempdir().unwrap();
        let err = save(&dir.path().join("p.txt"), None, "note").unwrap_err();
        assert!(matches!(err, RecordError::NothingToSave));
        assert!(!dir.path().join("p.txt").exists());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let pass = Password::new("abcd".into());
        let err = save(dir.path(), Some(&pass), "").unwrap_err();
        match err {
            RecordError::PersistenceWriteFailure { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("unexpected {other:?}"),
        }
    }
}
