use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three writing systems the engine converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
    Runic,
}

/// A non-runic script: the source of `to_runic` and the target of `from_runic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orthography {
    Latin,
    Cyrillic,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::Latin, Script::Cyrillic, Script::Runic];

    /// Next script in the keyboard cycle: Latin → Cyrillic → Runic → Latin.
    pub fn cycle_next(self) -> Script {
        match self {
            Script::Latin => Script::Cyrillic,
            Script::Cyrillic => Script::Runic,
            Script::Runic => Script::Latin,
        }
    }

    pub fn orthography(self) -> Option<Orthography> {
        match self {
            Script::Latin => Some(Orthography::Latin),
            Script::Cyrillic => Some(Orthography::Cyrillic),
            Script::Runic => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
            Script::Runic => "runic",
        }
    }
}

impl Orthography {
    pub const ALL: [Orthography; 2] = [Orthography::Latin, Orthography::Cyrillic];

    pub fn as_str(self) -> &'static str {
        Script::from(self).as_str()
    }
}

impl From<Orthography> for Script {
    fn from(o: Orthography) -> Self {
        match o {
            Orthography::Latin => Script::Latin,
            Orthography::Cyrillic => Script::Cyrillic,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseScriptError {
    #[error("unknown script: {0} (expected latin, cyrillic or runic)")]
    Unknown(String),
    #[error("runic is not an orthography (expected latin or cyrillic)")]
    NotAnOrthography,
}

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" | "lat" => Ok(Script::Latin),
            "cyrillic" | "cyr" => Ok(Script::Cyrillic),
            "runic" | "rune" | "runes" => Ok(Script::Runic),
            _ => Err(ParseScriptError::Unknown(s.to_string())),
        }
    }
}

impl FromStr for Orthography {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Script>()?
            .orthography()
            .ok_or(ParseScriptError::NotAnOrthography)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_script() {
        let mut s = Script::Latin;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(s);
            s = s.cycle_next();
        }
        assert_eq!(seen, Script::ALL);
        assert_eq!(s, Script::Latin);
    }

    #[test]
    fn orthography_roundtrip() {
        for o in Orthography::ALL {
            assert_eq!(Script::from(o).orthography(), Some(o));
        }
        assert_eq!(Script::Runic.orthography(), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Latin".parse::<Script>().unwrap(), Script::Latin);
        assert_eq!("cyr".parse::<Orthography>().unwrap(), Orthography::Cyrillic);
        assert_eq!("runes".parse::<Script>().unwrap(), Script::Runic);
        assert_eq!(
            "runic".parse::<Orthography>().unwrap_err(),
            ParseScriptError::NotAnOrthography
        );
        assert!(matches!(
            "greek".parse::<Script>().unwrap_err(),
            ParseScriptError::Unknown(_)
        ));
    }

    #[test]
    fn display_matches_serde_name() {
        assert_eq!(Script::Cyrillic.to_string(), "cyrillic");
        assert_eq!(Orthography::Latin.to_string(), "latin");
    }
}
