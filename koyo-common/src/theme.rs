use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Local storage key holding the theme name
pub const THEME_STORAGE_KEY: &str = "site-theme";

/// Site color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Autumn,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Autumn => "autumn",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Default => Self::Autumn,
            Self::Autumn => Self::Default,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "autumn" => Ok(Self::Autumn),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Default.toggled(), Theme::Autumn);
        assert_eq!(Theme::Autumn.toggled(), Theme::Default);
    }

    #[test]
    fn test_parse_stored_names() {
        assert_eq!("autumn".parse::<Theme>(), Ok(Theme::Autumn));
        assert_eq!(Theme::Autumn.to_string().parse::<Theme>(), Ok(Theme::Autumn));
        assert_eq!(
            "neon".parse::<Theme>(),
            Err(ParseThemeError("neon".to_string()))
        );
    }
}
