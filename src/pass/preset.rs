//! Named special-character presets.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Common,
    Safe,
    Full,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Common, Preset::Safe, Preset::Full];

    /// Display name, also the key stored in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Common => "常用符号",
            Preset::Safe => "安全符号",
            Preset::Full => "全符号",
        }
    }

    /// ASCII alias accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            Preset::Common => "common",
            Preset::Safe => "safe",
            Preset::Full => "full",
        }
    }

    pub fn chars(self) -> &'static str {
        match self {
            Preset::Common => "!@#$%^&*",
            Preset::Safe => "!$%&*?@",
            Preset::Full => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Next preset in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Preset::Common => Preset::Safe,
            Preset::Safe => Preset::Full,
            Preset::Full => Preset::Common,
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s || p.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.chars())
    }
}

/// Which special source is effective when special characters are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialMode {
    #[default]
    Preset,
    Custom,
}

impl SpecialMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialMode::Preset => "preset",
            SpecialMode::Custom => "custom",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SpecialMode::Preset => SpecialMode::Custom,
            SpecialMode::Custom => SpecialMode::Preset,
        }
    }
}

impl FromStr for SpecialMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "preset" => Ok(SpecialMode::Preset),
            "custom" => Ok(SpecialMode::Custom),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_or_alias() {
        assert_eq!("安全符号".parse::<Preset>(), Ok(Preset::Safe));
        assert_eq!("FULL".parse::<Preset>(), Ok(Preset::Full));
        assert_eq!(" common ".parse::<Preset>(), Ok(Preset::Common));
        assert_eq!(
            "symbols".parse::<Preset>(),
            Err(ConfigError::UnknownPreset("symbols".into()))
        );
    }

    #[test]
    fn registry_contents() {
        assert_eq!(Preset::default().chars(), "!@#$%^&*");
        assert_eq!(Preset::Safe.chars(), "!$%&*?@");
        assert_eq!(Preset::Full.chars().chars().count(), 26);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut p = Preset::Common;
        for _ in 0..Preset::ALL.len() {
            p = p.next();
        }
        assert_eq!(p, Preset::Common);
    }
}
