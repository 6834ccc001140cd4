use crate::clipboard;
use crate::error::{ClipboardError, RecordError};
use crate::locale::{self, Localized};
use crate::pass::{self, GenerationConfig, Password, SpecialMode, parse_length};
use crate::record;
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{
    Status, enter_prompt, get_editable_input, print_help, print_main_menu, print_settings_menu,
};

/// A password together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub password: Password,
    pub config: GenerationConfig,
}

/// State carried across menu iterations.
pub struct Session {
    pub settings: Settings,
    pub last: Option<Generated>,
    pub status: Status,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            last: None,
            status: Status::None,
        }
    }

    /// Generate with the current settings. A rejected config leaves the
    /// previous password in place.
    pub fn generate(&mut self) {
        let config = self.settings.to_config();
        let mut rng = self.settings.entropy.rng();
        match pass::generate(&config, &mut rng) {
            Ok(password) => {
                self.last = Some(Generated { password, config });
                self.status = Status::None;
            }
            Err(e) => self.status = Status::Error(e.localized(self.settings.lang)),
        }
    }

    pub fn copy(&mut self) {
        let lang = self.settings.lang;
        let result = match self.last.as_ref() {
            None => Err(ClipboardError::Empty),
            Some(g) => clipboard::system()
                .and_then(|mut ctx| clipboard::copy(&mut ctx, Some(g.password.as_str()))),
        };
        self.status = match result {
            Ok(()) => Status::Info(locale::copied(lang).to_string()),
            Err(e) => Status::Error(e.localized(lang)),
        };
    }

    /// Append the last password with `note` to the log.
    pub fn save(&mut self, note: &str) {
        let lang = self.settings.lang;
        self.status = match record::save(
            &self.settings.log_path(),
            self.last.as_ref().map(|g| &g.password),
            note,
        ) {
            Ok(()) => Status::Info(format!(
                "{} \u{2192} {}",
                locale::saved(lang),
                self.settings.log_path
            )),
            Err(e) => Status::Error(e.localized(lang)),
        };
    }
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });
    let mut session = Session::new(settings);

    loop {
        print_main_menu(&session.settings, session.last.as_ref(), &session.status);
        session.status = Status::None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };

        match input.trim() {
            "" => session.generate(),
            "1" => {
                if update_settings(&mut session.settings) {
                    session.generate();
                }
            }
            "2" => session.copy(),
            "3" => {
                if session.last.is_none() {
                    let lang = session.settings.lang;
                    session.status = Status::Error(RecordError::NothingToSave.localized(lang));
                    continue;
                }
                if let Some(note) = get_editable_input("Note", "") {
                    session.save(&note);
                }
            }
            "4" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            "5" | "q" => {
                clear();
                break;
            }
            _ => session.status = Status::Error("Invalid option.".to_string()),
        }
    }
}

/// Settings loop. Returns true when the user pressed Enter to generate.
pub fn update_settings(settings: &mut Settings) -> bool {
    let mut status = Status::None;

    loop {
        print_settings_menu(settings, &status);
        status = Status::None;

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => return false,
        };

        match choice.trim() {
            "" => return true,
            "r" => *settings = Settings::default(),
            "f" => match Settings::load_from_file() {
                Ok(s) => *settings = s,
                Err(e) => status = Status::Error(format!("Error loading settings: {}", e)),
            },
            "s" => {
                status = match settings.save_to_file() {
                    Ok(()) => Status::Info("Settings saved".to_string()),
                    Err(e) => Status::Error(format!("Error saving settings: {}", e)),
                }
            }
            other => match other.parse::<u32>() {
                Ok(n) => status = menu_option(n, settings),
                Err(_) => status = Status::Error("Invalid selection".to_string()),
            },
        }
    }
}

fn menu_option(choice: u32, settings: &mut Settings) -> Status {
    match choice {
        1 => {
            let current = settings.pass_length.to_string();
            if let Some(input) = get_editable_input("Enter password length (4-50)", &current) {
                match parse_length(&input) {
                    Ok(len) => settings.pass_length = len,
                    Err(e) => return Status::Error(e.localized(settings.lang)),
                }
            }
        }
        2 => settings.include_lower = !settings.include_lower,
        3 => settings.include_upper = !settings.include_upper,
        4 => settings.include_digits = !settings.include_digits,
        5 => settings.include_special = !settings.include_special,
        6 => settings.special_mode = settings.special_mode.toggled(),
        7 => {
            settings.preset = settings.preset.next();
            settings.special_mode = SpecialMode::Preset;
        }
        8 => {
            if let Some(chars) =
                get_editable_input("Enter custom special characters", &settings.custom_special)
            {
                settings.custom_special = chars.trim().to_string();
                settings.special_mode = SpecialMode::Custom;
            }
        }
        9 => {
            if let Some(path) = get_editable_input("Enter password log path", &settings.log_path) {
                let path = path.trim();
                if path.is_empty() {
                    return Status::Error("Log path cannot be empty".to_string());
                }
                settings.log_path = path.to_string();
            }
        }
        10 => settings.entropy = settings.entropy.toggled(),
        11 => settings.lang = settings.lang.toggled(),
        _ => return Status::Error("Invalid input, please enter a valid menu option...".to_string()),
    }
    Status::None
}
