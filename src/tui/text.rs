use crate::entropy::Source;
use crate::pass::{GenerationConfig, SpecialMode};
use crate::settings::Settings;
use crate::terminal::{
    BOLD, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    clear, config_entropy, entropy_strength, flush, print_error, print_rule, print_success,
};

use super::{Generated, Status};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

fn print_status(status: &Status) {
    match status {
        Status::None => println!(),
        Status::Info(msg) => print_success(msg),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}

/// One-line summary of the classes a config draws from.
fn classes_summary(config: &GenerationConfig) -> String {
    let mut parts = Vec::new();
    if config.include_lower {
        parts.push("a-z".to_string());
    }
    if config.include_upper {
        parts.push("A-Z".to_string());
    }
    if config.include_digits {
        parts.push("0-9".to_string());
    }
    if config.include_special {
        let chars = config.special_charset.clone();
        parts.push(if chars.is_empty() { "(empty special set)".to_string() } else { chars });
    }
    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(" ")
    }
}

pub fn print_help() {
    box_top("passnote");
    box_line_center("Character-class password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to pick");
    box_line("     length and character classes, generate, copy and save.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -p safe) to");
    box_line("     generate without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passnote [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 4 to 50 (default: 12)");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --no-special", "Exclude special characters");
    box_opt("  -p, --preset <NAME>", "Special preset: common, safe, full (or 常用符号, 安全符号, 全符号)");
    box_opt("      --special <CHARS>", "Custom special character set");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -w, --write", "Append to the password log");
    box_opt("      --note <TEXT>", "Note stored with logged passwords");
    box_opt("      --log <FILE>", "Password log path (default: passwords.txt)");
    box_opt("  -q, --quiet", "Only print passwords and errors");
    box_opt("      --lang <en|zh>", "Language of messages");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the resulting settings");
    box_opt("      --hw", "Use the CPU cycle-counter generator");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passnote                      Interactive menu");
    box_line("  passnote -l 16                One password, 16 characters");
    box_line("  passnote -l 8 --no-special    Alphanumeric, 8 characters");
    box_line("  passnote -p full -b           Copy a password with all symbols");
    box_line("  passnote -w --note wifi       Print and log with a note");
    box_line("");
    box_bottom();
    println!();
}

/// Main menu. Length and classes describe the shown password when there is
/// one, otherwise the current settings.
pub fn print_main_menu(settings: &Settings, last: Option<&Generated>, status: &Status) {
    let current = settings.to_config();
    let config = last.map_or(&current, |g| &g.config);

    clear();
    box_top("passnote");
    box_line("");
    box_line(&format!("  Length: {}", config.length));
    box_line(&format!("  Classes: {}", classes_summary(config)));
    box_line("");
    match last {
        Some(g) => {
            box_line(&format!("  Password: {BOLD}{}{RESET}", g.password.as_str()));
            let bits = config_entropy(&g.config);
            box_line(&format!("  Entropy: {:.1} bits ({})", bits, entropy_strength(bits)));
        }
        None => {
            box_line("  Password: (none yet)");
            box_line("");
        }
    }
    box_line("");
    print_rule();
    box_line("  1) settings  |  2) copy  |  3) save  |  4) help  |  5) quit");
    box_bottom();
    print_status(status);
}

pub fn print_settings_menu(settings: &Settings, status: &Status) {
    clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Password Length: {}", settings.pass_length));

    box_line("");
    box_line(&format!("{UNDERLINE}Character Classes{RESET}:"));
    box_line(&format!("  2) Lowercase (a-z): {}", on_off(settings.include_lower)));
    box_line(&format!("  3) Uppercase (A-Z): {}", on_off(settings.include_upper)));
    box_line(&format!("  4) Digits (0-9): {}", on_off(settings.include_digits)));
    box_line(&format!("  5) Special: {}", on_off(settings.include_special)));

    box_line("");
    box_line(&format!("{UNDERLINE}Special Characters{RESET}:"));
    box_line(&format!("  6) Mode: {}", settings.special_mode.as_str()));
    let marker = |mode: SpecialMode| if settings.special_mode == mode { "*" } else { " " };
    box_line(&format!("  7) Preset:{} {}", marker(SpecialMode::Preset), settings.preset));
    box_line(&format!("  8) Custom:{} {}", marker(SpecialMode::Custom), settings.custom_special));

    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_line(&format!("  9) Password log: {}", settings.log_path));
    let source = match settings.entropy {
        Source::Os => "os",
        Source::Hardware => "hardware",
    };
    box_line(&format!("  10) Entropy source: {} ({})", source, settings.entropy.name()));
    box_line(&format!("  11) Language: {}", settings.lang.as_str()));

    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  Esc) back");
    box_bottom();

    print_status(status);
}
