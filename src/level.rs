use std::fmt;
use std::str::FromStr;

/// GELF severity, following the syslog numbering: lower codes are more
/// severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GelfLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

impl GelfLevel {
    /// All levels, most severe first.
    pub const ALL: [GelfLevel; 8] = [
        GelfLevel::Emergency,
        GelfLevel::Alert,
        GelfLevel::Critical,
        GelfLevel::Error,
        GelfLevel::Warning,
        GelfLevel::Notice,
        GelfLevel::Informational,
        GelfLevel::Debug,
    ];

    /// Numeric severity code written to the wire.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for GelfLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GelfLevel::Emergency => "EMERGENCY",
            GelfLevel::Alert => "ALERT",
            GelfLevel::Critical => "CRITICAL",
            GelfLevel::Error => "ERROR",
            GelfLevel::Warning => "WARNING",
            GelfLevel::Notice => "NOTICE",
            GelfLevel::Informational => "INFO",
            GelfLevel::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}

impl FromStr for GelfLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EMERG" | "EMERGENCY" | "PANIC" => Ok(Self::Emergency),
            "ALERT" => Ok(Self::Alert),
            "CRIT" | "CRITICAL" => Ok(Self::Critical),
            "ERR" | "ERROR" => Ok(Self::Error),
            "WARN" | "WARNING" => Ok(Self::Warning),
            "NOTICE" => Ok(Self::Notice),
            "INFO" | "INFORMATIONAL" => Ok(Self::Informational),
            "DEBUG" => Ok(Self::Debug),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn ordering_follows_severity_codes() {
        assert!(GelfLevel::Emergency < GelfLevel::Debug);
        assert!(GelfLevel::Error < GelfLevel::Warning);
        assert_eq!(GelfLevel::Emergency.code(), 0);
        assert_eq!(GelfLevel::Debug.code(), 7);
    }

    #[test]
    fn all_is_ordered_most_severe_first() {
        let codes: Vec<u8> = GelfLevel::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    #[case("warning", GelfLevel::Warning)]
    #[case("WARN", GelfLevel::Warning)]
    #[case("err", GelfLevel::Error)]
    #[case("panic", GelfLevel::Emergency)]
    #[case("info", GelfLevel::Informational)]
    fn parses_common_spellings(#[case] input: &str, #[case] expected: GelfLevel) {
        assert_eq!(input.parse::<GelfLevel>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!("verbose".parse::<GelfLevel>().is_err());
    }
}
