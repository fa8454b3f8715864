use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::Error;

/// The part a color plays in a palette.  Each role owns one scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    /// The brand base: backgrounds, text.  Derived from the base color.
    Primary,
    /// Badges, cards.  Derived from the harmony.
    Secondary,
    /// Buttons, calls to action.  Derived from the harmony.
    Accent,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 3] =
        [PaletteRole::Primary, PaletteRole::Secondary, PaletteRole::Accent];

    pub const fn name(self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Accent => "accent",
        }
    }
}

impl FromStr for PaletteRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.trim().to_ascii_lowercase();
        PaletteRole::ALL.into_iter().find(|r| r.name() == lower)
            .ok_or_else(|| Error::UnrecognizedRole(s.to_string()))
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per role lock flags.  A locked role keeps its scale when the base
/// color or the harmony changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locks {
    pub primary: bool,
    pub secondary: bool,
    pub accent: bool,
}

impl Locks {
    #[inline]
    pub fn get(&self, role: PaletteRole) -> bool {
        match role {
            PaletteRole::Primary => self.primary,
            PaletteRole::Secondary => self.secondary,
            PaletteRole::Accent => self.accent,
        }
    }

    #[inline]
    pub fn set(&mut self, role: PaletteRole, locked: bool) {
        match role {
            PaletteRole::Primary => self.primary = locked,
            PaletteRole::Secondary => self.secondary = locked,
            PaletteRole::Accent => self.accent = locked,
        }
    }
}
