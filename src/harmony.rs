//! Color wheel harmonies.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::trace;
use crate::{Color, Error, Hsl};

/// Rule selecting the secondary and accent colors from the base color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyMode {
    /// The two next neighbours on the wheel, 30° and 60° away.
    /// Calm, natural palettes.
    #[default]
    Analogous,
    /// The opposite hue.  There is a single complementary partner, so
    /// the secondary and accent colors coincide.
    Complementary,
    /// The two hues flanking the complement (±30° around it).
    SplitComplementary,
    /// An equilateral triangle on the wheel (120° and 240°).
    Triadic,
    /// No hue change: a lighter, less saturated secondary and a darker
    /// accent.
    Monochromatic,
}

impl HarmonyMode {
    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// All harmony modes.
    pub const fn all() -> &'static [Self] {
        &[Self::Analogous, Self::Complementary, Self::SplitComplementary,
          Self::Triadic, Self::Monochromatic]
    }

    /// Hue rotations of the secondary and accent colors relative to the
    /// base, or `None` for [`Monochromatic`](Self::Monochromatic) which
    /// does not move along the wheel.
    pub const fn offsets(self) -> Option<(f64, f64)> {
        match self {
            Self::Analogous => Some((30., 60.)),
            Self::Complementary => Some((180., 180.)),
            Self::SplitComplementary => Some((150., 210.)),
            Self::Triadic => Some((120., 240.)),
            Self::Monochromatic => None,
        }
    }
}

impl FromStr for HarmonyMode {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|m| m.name() == lower)
            .ok_or_else(|| Error::UnrecognizedHarmonyMode(s.to_string()))
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two colors derived from a base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Harmony {
    pub secondary: Color,
    pub accent: Color,
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "secondary {} accent {}", self.secondary, self.accent)
    }
}

/// Monochromatic secondary: lighter and less saturated.
const MONO_LIGHTEN: f64 = 10.;
const MONO_DESATURATE: f64 = 10.;
/// Monochromatic accent: darker.
const MONO_DARKEN: f64 = 20.;

/// Derive the secondary and accent colors of `base` for `mode`.
///
/// ```
/// use color_harmony::{Color, HarmonyMode, resolve_harmony};
/// let red = Color::new(255, 0, 0);
/// let h = resolve_harmony(red, HarmonyMode::Triadic);
/// assert_eq!(h.secondary, Color::new(0, 255, 0));
/// assert_eq!(h.accent, Color::new(0, 0, 255));
/// ```
pub fn resolve_harmony(base: Color, mode: HarmonyMode) -> Harmony {
    let harmony = match mode.offsets() {
        Some((s, a)) => Harmony { secondary: base.rotate(s),
                                  accent: base.rotate(a) },
        None => {
            let hsl = base.to_hsl();
            // One HSL step to avoid rounding twice.
            let secondary = Color::from_hsl(Hsl::new(
                hsl.h, hsl.s - MONO_DESATURATE, hsl.l + MONO_LIGHTEN));
            Harmony { secondary, accent: base.darken(MONO_DARKEN) }
        }
    };
    trace!(%base, %mode, %harmony, "resolved harmony");
    harmony
}

/// Hues of the primary, secondary and accent colors, for placing them
/// on a color wheel.  Achromatic colors sit at 0°.
pub fn wheel_hues(base: Color, mode: HarmonyMode) -> [f64; 3] {
    let Harmony { secondary, accent } = resolve_harmony(base, mode);
    [base.to_hsl().h, secondary.to_hsl().h, accent.to_hsl().h]
}
