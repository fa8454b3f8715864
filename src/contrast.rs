//! WCAG 2.x contrast checks.
//!
//! - [`contrast_ratio`] between two colors, in \[1, 21\].
//! - [`is_readable`] against the AA / AAA thresholds.
//! - [`AccessibilityReport`] for a whole [`PaletteState`]: legibility of
//!   white and black text on each role, and how distinct the roles are
//!   from one another.

use std::fmt;
use serde::Serialize;
use crate::{Color, PaletteRole, PaletteState};

/// Minimal ratio for normal text at level AA.
pub const TEXT_TARGET: f64 = 4.5;
/// Minimal ratio for large text at level AA and for UI components
/// (borders, icons) placed next to each other.
pub const COMPONENT_TARGET: f64 = 3.0;

/// Conformance level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    Aa,
    Aaa,
}

/// Text size category.  Large text is at least 18pt, or 14pt bold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSize {
    Normal,
    Large,
}

/// Minimal contrast ratio required by `level` for text of `size`.
pub const fn min_ratio(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::Aa, TextSize::Normal) => 4.5,
        (WcagLevel::Aa, TextSize::Large) => 3.0,
        (WcagLevel::Aaa, TextSize::Normal) => 7.0,
        (WcagLevel::Aaa, TextSize::Large) => 4.5,
    }
}

#[inline]
fn linearize(c: u8) -> f64 {
    let c = c as f64 / 255.;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Relative luminance, in \[0, 1\] (0 for black, 1 for white).
pub fn relative_luminance(color: Color) -> f64 {
    let c = color.rgb();
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g) + 0.0722 * linearize(c.b)
}

/// Contrast ratio `(L1 + 0.05) / (L2 + 0.05)` where `L1` is the
/// luminance of the lighter color.  Symmetric; in \[1, 21\].
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Whether text `fg` on `bg` meets `level` for text of `size`.
pub fn is_readable(fg: Color, bg: Color, level: WcagLevel, size: TextSize) -> bool {
    contrast_ratio(fg, bg) >= min_ratio(level, size)
}

/// White or black, whichever contrasts more with `bg`.
pub fn best_text_color(bg: Color) -> Color {
    if contrast_ratio(bg, Color::WHITE) >= contrast_ratio(bg, Color::BLACK) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Verdict for text legibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    /// AA for normal text (≥ 4.5).
    Pass,
    /// Only AA for large text (≥ 3.0).
    LargeOnly,
    Fail,
}

impl Rating {
    pub fn of(ratio: f64) -> Self {
        if ratio >= TEXT_TARGET { Rating::Pass }
        else if ratio >= COMPONENT_TARGET { Rating::LargeOnly }
        else { Rating::Fail }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Rating::Pass => "pass",
            Rating::LargeOnly => "large only",
            Rating::Fail => "fail",
        })
    }
}

/// Legibility of white and black text on the 500 step of a role.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextCheck {
    pub role: PaletteRole,
    pub color: Color,
    pub on_white: f64,
    pub on_black: f64,
}

impl TextCheck {
    pub fn new(role: PaletteRole, color: Color) -> Self {
        TextCheck { role, color,
                    on_white: contrast_ratio(color, Color::WHITE),
                    on_black: contrast_ratio(color, Color::BLACK) }
    }

    #[inline]
    pub fn white_rating(&self) -> Rating { Rating::of(self.on_white) }

    #[inline]
    pub fn black_rating(&self) -> Rating { Rating::of(self.on_black) }
}

/// Contrast between the 500 steps of two roles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PairCheck {
    pub roles: (PaletteRole, PaletteRole),
    pub ratio: f64,
}

impl PairCheck {
    /// Whether the two colors can sit next to each other as UI
    /// components.
    #[inline]
    pub fn passes(&self) -> bool { self.ratio >= COMPONENT_TARGET }
}

/// Accessibility matrix of a palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessibilityReport {
    /// One entry per role, primary first.
    pub text: [TextCheck; 3],
    /// Primary/secondary, primary/accent, secondary/accent.
    pub pairs: [PairCheck; 3],
}

impl AccessibilityReport {
    pub fn of(palette: &PaletteState) -> Self {
        use PaletteRole::*;
        let color = |r: PaletteRole| palette.scale(r).base();
        let pair = |a: PaletteRole, b: PaletteRole| {
            PairCheck { roles: (a, b), ratio: contrast_ratio(color(a), color(b)) } };
        AccessibilityReport {
            text: PaletteRole::ALL.map(|r| TextCheck::new(r, color(r))),
            pairs: [pair(Primary, Secondary), pair(Primary, Accent),
                    pair(Secondary, Accent)],
        }
    }

    /// Whether every role is readable with white or black text and every
    /// pair of roles is distinct enough.
    pub fn all_pass(&self) -> bool {
        self.text.iter().all(|t| t.on_white.max(t.on_black) >= TEXT_TARGET)
            && self.pairs.iter().all(PairCheck::passes)
    }
}

impl fmt::Display for AccessibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text legibility (target {TEXT_TARGET:.1}:1)")?;
        for t in &self.text {
            writeln!(f, "  {:<9} {}  white {:>4.1} {:<10}  black {:>4.1} {}",
                     t.role.name(), t.color, t.on_white, t.white_rating(),
                     t.on_black, t.black_rating())?;
        }
        writeln!(f, "Component contrast (target {COMPONENT_TARGET:.1}:1)")?;
        for p in &self.pairs {
            let pair = format!("{}/{}", p.roles.0, p.roles.1);
            writeln!(f, "  {pair:<19} {:>4.1} {}", p.ratio,
                     if p.passes() { "pass" } else { "fail" })?;
        }
        Ok(())
    }
}
