use crate::locale::Lang;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub write: bool,
    pub saved: bool,
    pub save: bool,
    pub hardware: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    /// Kept as typed so a bad value surfaces as an invalid length.
    pub length: Option<String>,
    pub number: Option<usize>,
    pub preset: Option<String>,
    pub special: Option<String>,
    pub note: Option<String>,
    pub log: Option<String>,
    pub lang: Option<Lang>,
}
