use thiserror::Error;

use super::CliFlags;
use crate::locale::Lang;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-w" | "--write" => flags.write = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--hw" => flags.hardware = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => flags.length = Some(value(args, &mut i)?),
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                flags.number = Some(raw.parse().map_err(|_| ParseError::InvalidNumber(raw))?);
            }
            "-p" | "--preset" => flags.preset = Some(value(args, &mut i)?),
            "--special" => flags.special = Some(value(args, &mut i)?),
            "--note" => flags.note = Some(value(args, &mut i)?),
            "--log" => flags.log = Some(value(args, &mut i)?),
            "--lang" => {
                let raw = value(args, &mut i)?;
                flags.lang = Some(raw.parse::<Lang>().map_err(|_| ParseError::InvalidValue {
                    flag: arg.to_string(),
                    value: raw,
                })?);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Take the argument following the flag at `i`. Values may start with `-`
/// (special sets like `-_=` are common), so anything present is accepted.
fn value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}
