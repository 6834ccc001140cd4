//! Settings file persistence.
//!
//! One line of comma-separated fields. Free-text fields escape `,` as `|,`
//! and `|` as `||`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::entropy::Source;

const FIELDS: usize = 12;

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passnote/settings")
}

pub fn save_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    save(settings, path)
}

/// Load settings from `path`, creating the file with defaults if missing.
pub fn load_from(path: &Path) -> std::io::Result<Settings> {
    let mut settings = Settings::default();
    load(&mut settings, path)?;
    Ok(settings)
}

fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let entropy = match settings.entropy {
        Source::Os => "os",
        Source::Hardware => "hardware",
    };

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.include_lower,
        settings.include_upper,
        settings.include_digits,
        settings.include_special,
        settings.special_mode.as_str(),
        escape(settings.preset.alias()),
        escape(&settings.custom_special),
        escape(&settings.log_path),
        entropy,
        settings.lang.as_str(),
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists()
        && let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        log::warn!("failed to create settings directory {}: {e}", parent.display());
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() != FIELDS {
        log::warn!(
            "settings file {} has {} fields, expected {FIELDS}; rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.include_lower = parts[2].parse().unwrap_or(settings.include_lower);
    settings.include_upper = parts[3].parse().unwrap_or(settings.include_upper);
    settings.include_digits = parts[4].parse().unwrap_or(settings.include_digits);
    settings.include_special = parts[5].parse().unwrap_or(settings.include_special);
    settings.special_mode = parts[6].parse().unwrap_or(settings.special_mode);
    settings.preset = parts[7].parse().unwrap_or(settings.preset);
    settings.custom_special = parts[8].clone();
    settings.log_path = parts[9].clone();
    settings.entropy = match parts[10].as_str() {
        "hardware" => Source::Hardware,
        "os" => Source::Os,
        _ => settings.entropy,
    };
    settings.lang = parts[11].parse().unwrap_or(settings.lang);

    log::debug!("settings loaded from {}", path.display());
    Ok(())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Lang;
    use crate::pass::{Preset, SpecialMode};

    #[test]
    fn round_trip_with_escaped_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("settings");

        let settings = Settings {
            pass_length: 20,
            number_of_passwords: 3,
            include_upper: false,
            special_mode: SpecialMode::Custom,
            preset: Preset::Full,
            custom_special: " ,|;, ".into(),
            log_path: "/tmp/a,b/log.txt".into(),
            entropy: Source::Hardware,
            lang: Lang::Zh,
            ..Default::default()
        };
        save_to(&settings, &path).unwrap();

        assert_eq!(load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        assert_eq!(load_from(&path).unwrap(), Settings::default());
        assert!(path.exists());
        assert_eq!(load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "74,19,false\n").unwrap();

        assert_eq!(load_from(&path).unwrap(), Settings::default());
        let rewritten = fs::read_to_string(&path).unwrap();
        assert_eq!(split_escaped(rewritten.trim_end(), ',').len(), FIELDS);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "abc,2,yes,true,true,true,nope,bogus,,log.txt,quantum,xx\n").unwrap();

        let settings = load_from(&path).unwrap();
        assert_eq!(settings.pass_length, 12);
        assert_eq!(settings.number_of_passwords, 2);
        assert!(settings.include_lower);
        assert_eq!(settings.special_mode, SpecialMode::Preset);
        assert_eq!(settings.preset, Preset::Common);
        assert_eq!(settings.log_path, "log.txt");
        assert_eq!(settings.entropy, Source::Os);
        assert_eq!(settings.lang, Lang::En);
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_escaped("a,,b,", ','), vec!["a", "", "b", ""]);
        assert_eq!(split_escaped("x|,y,z||", ','), vec!["x,y", "z|"]);
    }
}
