//! User-facing message language.

use std::str::FromStr;

use crate::error::{ClipboardError, ConfigError, Error, RecordError};
use crate::pass::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Zh,
            Lang::Zh => Lang::En,
        }
    }
}

impl FromStr for Lang {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" | "cn" => Ok(Lang::Zh),
            _ => Err(()),
        }
    }
}

/// A message that can be shown to the user in either language.
pub trait Localized {
    fn localized(&self, lang: Lang) -> String;
}

impl Localized for ConfigError {
    fn localized(&self, lang: Lang) -> String {
        match lang {
            Lang::En => self.to_string(),
            Lang::Zh => match self {
                ConfigError::InvalidLength(_) => {
                    format!("密码长度应为{MIN_LENGTH}到{MAX_LENGTH}之间的整数")
                }
                ConfigError::NoCharacterClassSelected => "至少需要选择一种字符类型".into(),
                ConfigError::EmptySpecialCharset => "特殊字符集不能为空".into(),
                ConfigError::LengthTooShortForSelectedClasses { length, classes } => {
                    format!("密码长度 {length} 不足以包含已选的 {classes} 种字符类型")
                }
                ConfigError::UnknownPreset(name) => format!("未知的预设集合: {name}"),
            },
        }
    }
}

impl Localized for ClipboardError {
    fn localized(&self, lang: Lang) -> String {
        match lang {
            Lang::En => self.to_string(),
            Lang::Zh => match self {
                ClipboardError::Empty => "请先生成密码".into(),
                ClipboardError::Unavailable(e) => format!("剪贴板不可用: {e}"),
                ClipboardError::Write(e) => format!("复制失败: {e}"),
            },
        }
    }
}

impl Localized for RecordError {
    fn localized(&self, lang: Lang) -> String {
        match lang {
            Lang::En => self.to_string(),
            Lang::Zh => match self {
                RecordError::NothingToSave => "没有可保存的密码".into(),
                RecordError::PersistenceWriteFailure { source, .. } => {
                    format!("保存失败: {source}")
                }
            },
        }
    }
}

impl Localized for Error {
    fn localized(&self, lang: Lang) -> String {
        match self {
            Error::Config(e) => e.localized(lang),
            Error::Clipboard(e) => e.localized(lang),
            Error::Record(e) => e.localized(lang),
            Error::Parse(e) => e.to_string(),
        }
    }
}

/// Confirmation after a clipboard copy.
pub fn copied(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Password copied to clipboard",
        Lang::Zh => "密码已复制到剪贴板",
    }
}

/// Confirmation after a log append.
pub fn saved(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Password saved",
        Lang::Zh => "密码保存成功",
    }
}
