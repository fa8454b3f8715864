//! Color harmonies and lightness scales.
//!
//! - [`resolve_harmony`] derives a secondary and an accent color from a
//!   base [`Color`] according to a [`HarmonyMode`].
//! - [`generate_scale`] expands a single color into an eleven step
//!   [`Scale`] (50, 100, …, 900, 950).
//!
//! [`PaletteState`] ties both together for an application: a base
//! color, a harmony mode and one lockable scale per [`PaletteRole`].
//! The [`contrast`] module checks the result against WCAG and
//! [`export`] renders it as Tailwind, CSS or SCSS code.
//!
//! ```
//! use color_harmony::{Color, HarmonyMode, generate_scale, resolve_harmony};
//! let base: Color = "#3b82f6".parse()?;
//! let harmony = resolve_harmony(base, HarmonyMode::Triadic);
//! let scale = generate_scale(harmony.secondary);
//! assert_eq!(scale[500], harmony.secondary);
//! # Ok::<(), color_harmony::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use rgb::{RGB, RGB8};
use serde::{Deserialize, Serialize};

mod error;
mod harmony;
mod scale;
mod palette;
pub mod contrast;
pub mod export;

pub use error::{Error, Result};
pub use harmony::{Harmony, HarmonyMode, resolve_harmony, wheel_hues};
pub use scale::{Scale, ScaleIter, STEPS, generate_scale};
pub use palette::{HslChannel, PaletteState, DEFAULT_BASE};
pub use palette::ty::{Locks, PaletteRole};

/// An opaque sRGB color with 8 bits per channel.
///
/// Colors are immutable: every operation returns a new color.  The
/// canonical textual form is the lowercase hex string `#rrggbb`, which
/// is also what [`Display`](fmt::Display) and serde produce.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(RGB8);

/// A color in the HSL cylinder.
///
/// The hue `h` is in degrees in \[0, 360), the saturation `s` and the
/// lightness `l` are percentages in \[0, 100\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a HSL triple, wrapping the hue into \[0, 360) and
    /// clamping saturation and lightness into \[0, 100\].
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.) } else { 0. };
        Hsl { h, s: s.clamp(0., 100.), l: l.clamp(0., 100.) }
    }
}

#[inline]
fn channel(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

impl Color {
    pub const WHITE: Color = Color(RGB8 { r: 255, g: 255, b: 255 });
    pub const BLACK: Color = Color(RGB8 { r: 0, g: 0, b: 0 });

    /// Create a color from its red, green and blue components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Color(RGB8 { r, g, b }) }

    /// Return the underlying RGB components.
    #[inline]
    pub fn rgb(&self) -> RGB8 { self.0 }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive, surrounding
    /// whitespace ignored).
    ///
    /// ```
    /// use color_harmony::Color;
    /// assert_eq!(Color::from_hex("#F00")?, Color::new(255, 0, 0));
    /// assert!(Color::from_hex("3b82f6").is_err());
    /// # Ok::<(), color_harmony::Error>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor { input: s.to_string() };
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid())
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i .. i + 1], 16);
        let byte = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16);
        let rgb = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2)),
            6 => (byte(0), byte(2), byte(4)),
            _ => return Err(invalid()),
        };
        match rgb {
            (Ok(r), Ok(g), Ok(b)) if digits.len() == 3 =>
                Ok(Color::new(r * 17, g * 17, b * 17)),
            (Ok(r), Ok(g), Ok(b)) => Ok(Color::new(r, g, b)),
            _ => Err(invalid()),
        }
    }

    /// Return the lowercase `#rrggbb` form of the color.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }

    /// Convert to HSL.  Achromatic colors have hue and saturation 0.
    pub fn to_hsl(&self) -> Hsl {
        let RGB { r, g, b } = self.to_f64();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        let d = max - min;
        if d == 0. { return Hsl { h: 0., s: 0., l: 100. * l } }
        let s = d / (1. - (2. * l - 1.).abs());
        let h = {
            if max == r { 60. * ((g - b) / d).rem_euclid(6.) }
            else if max == g { 60. * ((b - r) / d + 2.) }
            else { 60. * ((r - g) / d + 4.) } };
        Hsl::new(h, 100. * s, 100. * l)
    }

    /// Create a color from HSL, rounding each channel to the nearest
    /// 8 bit value.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = Hsl::new(hsl.h, hsl.s, hsl.l);
        let (s, l) = (s / 100., l / 100.);
        let c = (1. - (2. * l - 1.).abs()) * s;
        let hp = h / 60.;
        let x = c * (1. - (hp.rem_euclid(2.) - 1.).abs());
        let m = l - c / 2.;
        let (r, g, b) = {
            if hp < 1.      { (c, x, 0.) }
            else if hp < 2. { (x, c, 0.) }
            else if hp < 3. { (0., c, x) }
            else if hp < 4. { (0., x, c) }
            else if hp < 5. { (x, 0., c) }
            else            { (c, 0., x) } };
        Color::new(channel(255. * (r + m)), channel(255. * (g + m)),
                   channel(255. * (b + m)))
    }

    /// Components in \[0, 1\].
    #[inline]
    fn to_f64(&self) -> RGB<f64> {
        RGB { r: self.0.r as f64 / 255., g: self.0.g as f64 / 255.,
              b: self.0.b as f64 / 255. }
    }

    /// Linear interpolation in RGB channel space: `t == 0.` returns
    /// `self` and `t == 1.` returns `other`.  `t` is clamped to
    /// \[0, 1\].
    ///
    /// ```
    /// use color_harmony::Color;
    /// let red = Color::new(255, 0, 0);
    /// assert_eq!(red.mix(&Color::WHITE, 0.5), Color::new(255, 128, 128));
    /// ```
    pub fn mix(&self, other: &Color, t: f64) -> Self {
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
        let lerp = |a: u8, b: u8| {
            let a = a as f64;
            channel(a + (b as f64 - a) * t) };
        Color::new(lerp(self.0.r, other.0.r), lerp(self.0.g, other.0.g),
                   lerp(self.0.b, other.0.b))
    }

    /// Increase the HSL lightness by `amount` percentage points.
    pub fn lighten(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        Color::from_hsl(Hsl::new(hsl.h, hsl.s, hsl.l + amount))
    }

    /// Decrease the HSL lightness by `amount` percentage points.
    #[inline]
    pub fn darken(&self, amount: f64) -> Self { self.lighten(-amount) }

    /// Increase the HSL saturation by `amount` percentage points.
    pub fn saturate(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        Color::from_hsl(Hsl::new(hsl.h, hsl.s + amount, hsl.l))
    }

    /// Decrease the HSL saturation by `amount` percentage points.
    #[inline]
    pub fn desaturate(&self, amount: f64) -> Self { self.saturate(-amount) }

    /// Rotate the hue by `degrees` (may be negative) keeping saturation
    /// and lightness.
    pub fn rotate(&self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        Color::from_hsl(Hsl::new(hsl.h + degrees, hsl.s, hsl.l))
    }

    /// Convert the color to grayscale.
    pub fn to_gray(&self) -> Self {
        let RGB8 { r, g, b } = self.0;
        let x = channel(0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64);
        Color::new(x, x, x)
    }
}

impl From<RGB8> for Color {
    #[inline]
    fn from(c: RGB8) -> Self { Color(c) }
}

impl From<Color> for RGB8 {
    #[inline]
    fn from(c: Color) -> Self { c.0 }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Color::from_hex(s) }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> { Color::from_hex(&s) }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_hex() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

/// Expand a hex color into its eleven step scale, keyed by step.
///
/// ```
/// let scale = color_harmony::generate_scale_hex("#3b82f6")?;
/// assert_eq!(scale[&500], "#3b82f6");
/// assert_eq!(scale.len(), 11);
/// # Ok::<(), color_harmony::Error>(())
/// ```
pub fn generate_scale_hex(base: &str) -> Result<BTreeMap<u16, String>> {
    let base = Color::from_hex(base)?;
    Ok(generate_scale(base).iter().map(|(k, c)| (k, c.to_hex())).collect())
}

/// Derive the secondary and accent colors of a hex `base` for the
/// harmony mode named `mode` (e.g. `"split-complementary"`).
///
/// The base color is validated before the mode.
pub fn resolve_harmony_hex(base: &str, mode: &str) -> Result<Harmony> {
    let base = Color::from_hex(base)?;
    let mode: HarmonyMode = mode.parse()?;
    Ok(resolve_harmony(base, mode))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn hue_dist(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.);
        d.min(360. - d)
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#3b82f6").unwrap(), Color::new(59, 130, 246));
        assert_eq!(Color::from_hex("  #3B82F6\n").unwrap(),
                   Color::new(59, 130, 246));
        assert_eq!(Color::from_hex("#fa0").unwrap(), Color::new(255, 170, 0));
        for bad in ["", "#", "3b82f6", "#3b82f", "#3b82f6ff", "#gggggg",
                    "#+1+1+1", "blue", "#é12"] {
            assert_eq!(Color::from_hex(bad),
                       Err(Error::InvalidColor { input: bad.to_string() }),
                       "{bad:?} should be rejected");
        }
    }

    #[test]
    fn hex_output_is_lowercase() {
        let c: Color = "#ABCDEF".parse().unwrap();
        assert_eq!(c.to_hex(), "#abcdef");
        assert_eq!(c.to_string(), "#abcdef");
        assert_eq!(format!("{c:?}"), "Color(#abcdef)");
    }

    #[test]
    fn hsl_reference_values() {
        let hsl = Color::new(255, 0, 0).to_hsl();
        assert_eq!((hsl.h, hsl.s, hsl.l), (0., 100., 50.));
        let hsl = Color::new(59, 130, 246).to_hsl();
        assert!((hsl.h - 217.219).abs() < 1e-3, "{hsl:?}");
        assert!((hsl.s - 91.220).abs() < 1e-3, "{hsl:?}");
        assert!((hsl.l - 59.804).abs() < 1e-3, "{hsl:?}");
        let gray = Color::new(128, 128, 128).to_hsl();
        assert_eq!((gray.h, gray.s), (0., 0.));
    }

    #[test]
    fn hsl_round_trip_is_exact_on_8_bits() {
        for c in [Color::new(59, 130, 246), Color::new(255, 0, 0),
                  Color::new(1, 2, 3), Color::new(250, 250, 251),
                  Color::WHITE, Color::BLACK] {
            assert_eq!(Color::from_hsl(c.to_hsl()), c);
        }
    }

    #[test]
    fn hsl_normalization() {
        let hsl = Hsl::new(-30., 120., -5.);
        assert_eq!((hsl.h, hsl.s, hsl.l), (330., 100., 0.));
        assert_eq!(Hsl::new(720., 50., 50.).h, 0.);
        assert_eq!(Hsl::new(f64::NAN, 50., 50.).h, 0.);
    }

    #[test]
    fn mix_bounds() {
        let c = Color::new(59, 130, 246);
        assert_eq!(c.mix(&Color::WHITE, 0.), c);
        assert_eq!(c.mix(&Color::WHITE, 1.), Color::WHITE);
        assert_eq!(c.mix(&Color::BLACK, 2.), Color::BLACK);
        assert_eq!(c.mix(&Color::BLACK, -1.), c);
        assert_eq!(c.mix(&Color::BLACK, f64::NAN), c);
    }

    #[test]
    fn rotate_keeps_saturation_and_lightness() {
        let c = Color::new(255, 0, 0);
        assert_eq!(c.rotate(120.), Color::new(0, 255, 0));
        assert_eq!(c.rotate(-120.), Color::new(0, 0, 255));
        assert_eq!(c.rotate(360.), c);
        let base = Color::new(59, 130, 246);
        let r = base.rotate(90.).to_hsl();
        assert!(hue_dist(r.h, base.to_hsl().h + 90.) < 1.);
        assert!((r.l - base.to_hsl().l).abs() < 1.);
    }

    #[test]
    fn lighten_darken_clamp() {
        assert_eq!(Color::new(255, 0, 0).lighten(100.), Color::WHITE);
        assert_eq!(Color::new(255, 0, 0).darken(100.), Color::BLACK);
        assert_eq!(Color::new(255, 0, 0).darken(20.), Color::new(153, 0, 0));
        assert_eq!(Color::new(255, 0, 0).desaturate(100.),
                   Color::new(128, 128, 128));
    }

    #[test]
    fn gray() {
        assert_eq!(Color::WHITE.to_gray(), Color::WHITE);
        let g = Color::new(59, 130, 246).to_gray().rgb();
        assert!(g.r == g.g && g.g == g.b);
    }

    #[test]
    fn serde_as_hex() {
        let c = Color::new(59, 130, 246);
        let s: String = c.into();
        assert_eq!(s, "#3b82f6");
        assert_eq!(Color::try_from(s).unwrap(), c);
        assert!(Color::try_from("nope".to_string()).is_err());
    }

    #[test]
    fn hex_boundary() {
        let h = resolve_harmony_hex("#ff0000", "triadic").unwrap();
        assert_eq!(h.secondary.to_hex(), "#00ff00");
        assert_eq!(h.accent.to_hex(), "#0000ff");
        assert!(matches!(resolve_harmony_hex("#ff0000", "tetradic"),
                         Err(Error::UnrecognizedHarmonyMode(_))));
        assert!(matches!(resolve_harmony_hex("red", "bogus"),
                         Err(Error::InvalidColor { .. })));
        assert!(generate_scale_hex("#12345").is_err());
    }
}
