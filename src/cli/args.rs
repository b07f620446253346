//! `--long value`, `--long=value` and `-s value` options for shell commands.

use std::str::FromStr;

use crate::cli::core::CommandError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct FlagSpec {
    pub long: &'static str,
    pub short: char,
}

impl FlagSpec {
    pub const fn new(long: &'static str, short: char) -> Self {
        Self { long, short }
    }
}

/// Option values of one command line, keyed by long name. A repeated option keeps the
/// last value.
#[derive(Debug, Default)]
pub(crate) struct Flags<'a> {
    values: Vec<(&'static str, &'a str)>,
}

impl<'a> Flags<'a> {
    pub fn parse(args: &[&'a str], specs: &[FlagSpec]) -> Result<Self, CommandError> {
        let mut flags = Flags::default();
        let mut idx = 0;
        while idx < args.len() {
            let token = args[idx];
            let (spec, inline) = if let Some(rest) = token.strip_prefix("--") {
                let (name, inline) = match rest.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (rest, None),
                };
                let spec = specs
                    .iter()
                    .find(|spec| spec.long.eq_ignore_ascii_case(name))
                    .ok_or_else(|| unknown_option(token))?;
                (spec, inline)
            } else if let Some(rest) = token.strip_prefix('-').filter(|rest| rest.len() == 1) {
                let spec = specs
                    .iter()
                    .find(|spec| rest.starts_with(spec.short))
                    .ok_or_else(|| unknown_option(token))?;
                (spec, None)
            } else {
                return Err(CommandError::InvalidArguments(format!(
                    "unexpected argument `{}`",
                    token
                )));
            };

            let value = match inline {
                Some(value) => value,
                None => {
                    idx += 1;
                    *args.get(idx).ok_or_else(|| {
                        CommandError::InvalidArguments(format!("missing value for --{}", spec.long))
                    })?
                }
            };
            flags.values.retain(|(name, _)| *name != spec.long);
            flags.values.push((spec.long, value));
            idx += 1;
        }
        Ok(flags)
    }

    pub fn get(&self, long: &str) -> Option<&'a str> {
        self.values
            .iter()
            .find(|(name, _)| *name == long)
            .map(|(_, value)| *value)
    }

    pub fn require(&self, long: &str) -> Result<&'a str, CommandError> {
        self.get(long)
            .ok_or_else(|| CommandError::InvalidArguments(format!("missing required option --{}", long)))
    }

    pub fn parsed<T: FromStr>(&self, long: &str) -> Result<Option<T>, CommandError> {
        self.get(long).map(|raw| parse_value(long, raw)).transpose()
    }

    pub fn require_parsed<T: FromStr>(&self, long: &str) -> Result<T, CommandError> {
        parse_value(long, self.require(long)?)
    }
}

fn parse_value<T: FromStr>(long: &str, raw: &str) -> Result<T, CommandError> {
    raw.trim().parse().map_err(|_| {
        CommandError::InvalidArguments(format!("invalid value `{}` for --{}", raw, long))
    })
}

fn unknown_option(token: &str) -> CommandError {
    CommandError::InvalidArguments(format!("unknown option `{}`", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[FlagSpec] = &[FlagSpec::new("amount", 'a'), FlagSpec::new("month", 'm')];

    #[test]
    fn accepts_long_short_and_inline_forms() {
        let flags = Flags::parse(&["-a", "12.5", "--month=6"], SPECS).unwrap();
        assert_eq!(flags.parsed::<f64>("amount").unwrap(), Some(12.5));
        assert_eq!(flags.require_parsed::<u32>("month").unwrap(), 6);

        let flags = Flags::parse(&["--MONTH", "3", "--month", "4"], SPECS).unwrap();
        assert_eq!(flags.get("month"), Some("4"));
        assert_eq!(flags.get("amount"), None);
    }

    #[test]
    fn negative_numbers_are_values() {
        let flags = Flags::parse(&["--amount", "-5"], SPECS).unwrap();
        assert_eq!(flags.parsed::<f64>("amount").unwrap(), Some(-5.0));
    }

    #[test]
    fn rejects_unknown_missing_and_malformed() {
        let err = Flags::parse(&["--year", "2025"], SPECS).unwrap_err();
        assert_eq!(err.to_string(), "unknown option `--year`");

        let err = Flags::parse(&["--amount"], SPECS).unwrap_err();
        assert_eq!(err.to_string(), "missing value for --amount");

        let err = Flags::parse(&["lunch"], SPECS).unwrap_err();
        assert_eq!(err.to_string(), "unexpected argument `lunch`");

        let flags = Flags::parse(&["-m", "june"], SPECS).unwrap();
        let err = flags.parsed::<u32>("month").unwrap_err();
        assert_eq!(err.to_string(), "invalid value `june` for --month");
        let err = flags.require("amount").unwrap_err();
        assert_eq!(err.to_string(), "missing required option --amount");
    }
}
