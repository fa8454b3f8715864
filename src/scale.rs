//! Eleven step lightness scales.

use std::ops::Index;
use serde::ser::{Serialize, SerializeMap, Serializer};
use crate::Color;

/// The step keys of a [`Scale`], from lightest to darkest.
pub const STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800,
                              900, 950];

/// Position of the untouched base color in [`STEPS`].
const BASE: usize = 5;

/// Mixing ratios are `|500 - step| / DIVISOR` so that the extreme steps
/// stop at 0.75 and keep a tint of the base color.
const DIVISOR: f64 = 600.;

/// An eleven step lightness scale derived from one base color.
///
/// Step 500 is the base color itself; lower steps are mixed toward
/// white and higher steps toward black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scale {
    colors: [Color; 11], // Invariant: colors[i] is the step STEPS[i]
}

/// Expand `base` into its [`Scale`].
///
/// ```
/// use color_harmony::{Color, generate_scale};
/// let base = Color::new(255, 0, 0);
/// let scale = generate_scale(base);
/// assert_eq!(scale[500], base);
/// assert_eq!(scale[200], Color::new(255, 128, 128));
/// assert_eq!(scale[800], Color::new(128, 0, 0));
/// ```
pub fn generate_scale(base: Color) -> Scale {
    let colors = STEPS.map(|step| {
        if step == 500 { base }
        else if step < 500 {
            base.mix(&Color::WHITE, f64::from(500 - step) / DIVISOR)
        } else {
            base.mix(&Color::BLACK, f64::from(step - 500) / DIVISOR)
        }
    });
    Scale { colors }
}

impl Scale {
    /// The color the scale was generated from (step 500).
    #[inline]
    pub fn base(&self) -> Color { self.colors[BASE] }

    /// Returns the color of `step`, or `None` if `step` is not one of
    /// [`STEPS`].
    pub fn get(&self, step: u16) -> Option<Color> {
        STEPS.iter().position(|&s| s == step).map(|i| self.colors[i])
    }

    /// Return an iterator on the `(step, color)` pairs, lightest first.
    pub fn iter(&self) -> ScaleIter<'_> {
        ScaleIter { scale: self, i: 0, j: STEPS.len() }
    }

    /// Returns the colors of the scale, lightest first.
    #[inline]
    pub fn colors(&self) -> [Color; 11] { self.colors }
}

impl Index<u16> for Scale {
    type Output = Color;

    /// # Panics
    ///
    /// If `step` is not one of [`STEPS`].
    fn index(&self, step: u16) -> &Color {
        match STEPS.iter().position(|&s| s == step) {
            Some(i) => &self.colors[i],
            None => panic!("color-harmony: {step} is not a scale step"),
        }
    }
}

/// An exact size iterator over the steps of a [`Scale`].
#[derive(Clone)]
pub struct ScaleIter<'a> {
    scale: &'a Scale,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // position after the last one to be consumed
}

impl Iterator for ScaleIter<'_> {
    type Item = (u16, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        let item = (STEPS[self.i], self.scale.colors[self.i]);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl ExactSizeIterator for ScaleIter<'_> {}

impl DoubleEndedIterator for ScaleIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i >= self.j { return None }
        self.j -= 1;
        Some((STEPS[self.j], self.scale.colors[self.j]))
    }
}

impl<'a> IntoIterator for &'a Scale {
    type Item = (u16, Color);
    type IntoIter = ScaleIter<'a>;

    fn into_iter(self) -> ScaleIter<'a> { self.iter() }
}

impl Serialize for Scale {
    /// A map from the step (as a string key) to the hex color.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STEPS.len()))?;
        for (step, color) in self {
            map.serialize_entry(&step.to_string(), &color)?;
        }
        map.end()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Color> {
        ["#3b82f6", "#ff0000", "#808080", "#000000", "#ffffff", "#0f0",
         "#f59e0b", "#010203", "#fefefe", "#7c3aed"]
            .iter().map(|s| s.parse().unwrap()).collect()
    }

    // Twice the HSL lightness, in 8 bit units, to compare without
    // floating point noise.
    fn lightness2(c: Color) -> u16 {
        let c = c.rgb();
        u16::from(c.r.max(c.g).max(c.b)) + u16::from(c.r.min(c.g).min(c.b))
    }

    #[test]
    fn anchor_is_identity() {
        for c in samples() {
            let scale = generate_scale(c);
            assert_eq!(scale[500], c);
            assert_eq!(scale.base(), c);
            assert_eq!(scale.get(500), Some(c));
        }
    }

    #[test]
    fn lightness_is_monotone() {
        for c in samples() {
            let scale = generate_scale(c);
            let l: Vec<_> = scale.iter().map(|(_, c)| lightness2(c)).collect();
            assert!(l.windows(2).all(|w| w[0] >= w[1]),
                    "{c}: lightness not decreasing {l:?}");
        }
    }

    #[test]
    fn reference_scale() {
        let scale = generate_scale("#3b82f6".parse().unwrap());
        let hex: Vec<_> = scale.iter().map(|(_, c)| c.to_hex()).collect();
        assert_eq!(hex, ["#cee0fd", "#bed5fc", "#9dc1fb", "#7cacf9", "#5c97f8",
                         "#3b82f6", "#316ccd", "#2757a4", "#1e417b", "#142b52",
                         "#0f213e"]);
    }

    #[test]
    fn extremes_stay_tinted() {
        let scale = generate_scale(Color::new(255, 0, 0));
        assert_eq!(scale[50], Color::new(255, 191, 191));
        assert_eq!(scale[950], Color::new(64, 0, 0));
        let white = generate_scale(Color::WHITE);
        assert!(white.iter().take(6).all(|(_, c)| c == Color::WHITE));
        assert_eq!(white[950], Color::new(64, 64, 64));
    }

    #[test]
    fn keys_and_lookup() {
        let scale = generate_scale(Color::new(1, 2, 3));
        let keys: Vec<_> = scale.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, STEPS);
        assert_eq!(scale.get(450), None);
        assert_eq!(scale.iter().len(), 11);
        let back: Vec<_> = scale.iter().rev().map(|(k, _)| k).collect();
        assert_eq!(back.first(), Some(&950));
        assert_eq!(back.last(), Some(&50));
    }

    #[test]
    fn iterator_from_both_ends() {
        let scale = generate_scale(Color::new(10, 20, 30));
        let mut it = scale.iter();
        assert_eq!(it.next().map(|(k, _)| k), Some(50));
        assert_eq!(it.next_back().map(|(k, _)| k), Some(950));
        assert_eq!(it.len(), 9);
        assert_eq!(it.count(), 9);
    }

    #[test]
    #[should_panic]
    fn unknown_step_panics() {
        let _ = generate_scale(Color::BLACK)[550];
    }
}
