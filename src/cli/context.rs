//! CLI context - bundles settings and flags for one run.

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard;
use crate::entropy::Source;
use crate::error::Error;
use crate::pass::{self, Password, Preset, SpecialMode, parse_length};
use crate::record;
use crate::settings::Settings;
use crate::tui::print_help;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments and pick the base settings.
    pub fn new(args: &[String]) -> Result<Self, Error> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self { settings, flags })
    }

    pub fn run(&mut self) -> Result<(), Error> {
        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("passnote {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        self.apply_flags()?;

        if self.flags.save {
            match self.settings.save_to_file() {
                Ok(()) => log::info!("saved current flags as settings"),
                Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
            }
        }

        let passwords = self.generate()?;
        self.output(&passwords)?;

        if self.flags.write {
            self.write_log(&passwords)?;
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Error> {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(ref raw) = flags.length {
            settings.pass_length = parse_length(raw)?;
        }
        if let Some(n) = flags.number {
            settings.number_of_passwords = n;
        }

        if flags.no_lower {
            settings.include_lower = false;
        }
        if flags.no_upper {
            settings.include_upper = false;
        }
        if flags.no_digits {
            settings.include_digits = false;
        }

        if let Some(ref name) = flags.preset {
            settings.preset = name.parse::<Preset>()?;
            settings.special_mode = SpecialMode::Preset;
            settings.include_special = true;
        }
        if let Some(ref chars) = flags.special {
            settings.custom_special = chars.clone();
            settings.special_mode = SpecialMode::Custom;
            settings.include_special = true;
        }
        // Last so it wins over --preset / --special.
        if flags.no_special {
            settings.include_special = false;
        }

        if let Some(ref path) = flags.log {
            settings.log_path = path.clone();
        }
        if let Some(lang) = flags.lang {
            settings.lang = lang;
        }
        if flags.hardware {
            settings.entropy = Source::Hardware;
        }
        Ok(())
    }

    fn generate(&self) -> Result<Vec<Password>, Error> {
        let config = self.settings.to_config();
        let count = self.settings.number_of_passwords.max(1);

        let mut rng = self.settings.entropy.rng();
        let passwords = pass::generate_batch(&config, count, &mut rng)?;

        prompts::strength(&config);
        Ok(passwords)
    }

    fn output(&self, passwords: &[Password]) -> Result<(), Error> {
        if self.flags.clipboard {
            match clipboard::system() {
                Ok(mut ctx) => {
                    let mut joined = passwords
                        .iter()
                        .map(Password::as_str)
                        .collect::<Vec<_>>()
                        .join("\n");
                    let result = clipboard::copy(&mut ctx, passwords.first().map(|_| joined.as_str()));
                    joined.zeroize();
                    result?;
                    prompts::clipboard_copied(self.settings.lang);
                    return Ok(());
                }
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(e.into());
                    }
                    log::warn!("{e}; printing instead");
                }
            }
        }

        for password in passwords {
            println!("{password}");
        }
        Ok(())
    }

    fn write_log(&self, passwords: &[Password]) -> Result<(), Error> {
        let path = self.settings.log_path();
        let note = self.flags.note.as_deref().unwrap_or_default();
        for password in passwords {
            record::save(&path, Some(password), note)?;
        }
        prompts::passwords_saved(passwords.len(), &path.display().to_string(), self.settings.lang);
        Ok(())
    }
}
