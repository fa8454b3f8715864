//! Palette state: a base color, a harmony mode and one lockable scale
//! per role.

use lazy_static::lazy_static;
use serde::Serialize;
use tracing::{debug, warn};
use crate::{Color, Harmony, HarmonyMode, Hsl, Result, Scale,
            generate_scale, resolve_harmony};

pub(crate) mod ty;
use ty::{Locks, PaletteRole};

/// Base color of [`PaletteState::default`].
pub const DEFAULT_BASE: Color = Color::new(0x3b, 0x82, 0xf6);

lazy_static! {
    static ref DEFAULT_STATE: PaletteState =
        PaletteState::new(DEFAULT_BASE, HarmonyMode::default());
}

/// One channel of the HSL representation, for slider style edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HslChannel {
    /// Degrees in \[0, 360).
    Hue,
    /// Percentage in \[0, 100\].
    Saturation,
    /// Percentage in \[0, 100\].
    Lightness,
}

/// The full palette of an application, owned by the caller.
///
/// Changing the base color or the harmony recomputes every role that is
/// not locked.  A manual edit of a role ([`set_color`]) locks that role
/// so that later base or harmony changes leave it alone.
///
/// ```
/// use color_harmony::{Color, HarmonyMode, PaletteRole, PaletteState};
/// let mut palette = PaletteState::default();
/// palette.set_color(PaletteRole::Accent, Color::new(255, 0, 0));
/// let accent = *palette.scale(PaletteRole::Accent);
/// palette.set_harmony(HarmonyMode::Triadic);
/// assert_eq!(*palette.scale(PaletteRole::Accent), accent);
/// ```
///
/// [`set_color`]: PaletteState::set_color
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteState {
    base_color: Color,
    harmony: HarmonyMode,
    primary: Scale,
    secondary: Scale,
    accent: Scale,
    locked: Locks,
}

impl Default for PaletteState {
    fn default() -> Self { DEFAULT_STATE.clone() }
}

impl PaletteState {
    /// Compute the palette of `base` for `harmony`, nothing locked.
    pub fn new(base: Color, harmony: HarmonyMode) -> Self {
        let Harmony { secondary, accent } = resolve_harmony(base, harmony);
        PaletteState {
            base_color: base,
            harmony,
            primary: generate_scale(base),
            secondary: generate_scale(secondary),
            accent: generate_scale(accent),
            locked: Locks::default(),
        }
    }

    #[inline]
    pub fn base_color(&self) -> Color { self.base_color }

    #[inline]
    pub fn harmony(&self) -> HarmonyMode { self.harmony }

    #[inline]
    pub fn locks(&self) -> Locks { self.locked }

    #[inline]
    pub fn is_locked(&self, role: PaletteRole) -> bool { self.locked.get(role) }

    /// The scale of `role`.
    pub fn scale(&self, role: PaletteRole) -> &Scale {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Accent => &self.accent,
        }
    }

    /// Return an iterator on the roles and their scales, primary first.
    pub fn scales(&self) -> impl Iterator<Item = (PaletteRole, &Scale)> {
        PaletteRole::ALL.into_iter().map(move |r| (r, self.scale(r)))
    }

    fn scale_mut(&mut self, role: PaletteRole) -> &mut Scale {
        match role {
            PaletteRole::Primary => &mut self.primary,
            PaletteRole::Secondary => &mut self.secondary,
            PaletteRole::Accent => &mut self.accent,
        }
    }

    /// Replace the scale of `role` unless it is locked.
    fn refresh(&mut self, role: PaletteRole, color: Color) {
        if self.locked.get(role) {
            debug!(%role, "role locked, scale kept");
        } else {
            *self.scale_mut(role) = generate_scale(color);
        }
    }

    fn refresh_harmony(&mut self) {
        let Harmony { secondary, accent } =
            resolve_harmony(self.base_color, self.harmony);
        self.refresh(PaletteRole::Secondary, secondary);
        self.refresh(PaletteRole::Accent, accent);
    }

    /// Change the base color and recompute every unlocked role.
    pub fn set_base_color(&mut self, color: Color) {
        debug!(from = %self.base_color, to = %color, "base color changed");
        self.base_color = color;
        self.refresh(PaletteRole::Primary, color);
        self.refresh_harmony();
    }

    /// Parse `hex` and make it the base color.
    ///
    /// On error the palette is left untouched, so it keeps the last
    /// valid base color.
    pub fn set_base_hex(&mut self, hex: &str) -> Result<()> {
        match Color::from_hex(hex) {
            Ok(color) => {
                self.set_base_color(color);
                Ok(())
            }
            Err(e) => {
                warn!(input = hex, base = %self.base_color,
                      "rejected base color, keeping the previous one");
                Err(e)
            }
        }
    }

    /// Change the harmony mode and recompute the unlocked secondary and
    /// accent roles.  The primary scale does not depend on the harmony.
    pub fn set_harmony(&mut self, harmony: HarmonyMode) {
        debug!(from = %self.harmony, to = %harmony, "harmony changed");
        self.harmony = harmony;
        self.refresh_harmony();
    }

    /// Manually set the color of `role`.  The role is locked afterwards.
    pub fn set_color(&mut self, role: PaletteRole, color: Color) {
        debug!(%role, %color, "manual edit, role locked");
        *self.scale_mut(role) = generate_scale(color);
        self.locked.set(role, true);
    }

    /// Parse `hex` and [`set_color`](Self::set_color) it.
    pub fn set_role_hex(&mut self, role: PaletteRole, hex: &str) -> Result<()> {
        let color = Color::from_hex(hex)?;
        self.set_color(role, color);
        Ok(())
    }

    /// Replace one HSL channel of the color of `role` (its step 500)
    /// and apply the result as a manual edit.
    pub fn adjust_role(&mut self, role: PaletteRole, channel: HslChannel,
                       value: f64) {
        let Hsl { h, s, l } = self.scale(role).base().to_hsl();
        let hsl = match channel {
            HslChannel::Hue => Hsl::new(value, s, l),
            HslChannel::Saturation => Hsl::new(h, value, l),
            HslChannel::Lightness => Hsl::new(h, s, value),
        };
        self.set_color(role, Color::from_hsl(hsl));
    }

    /// Lock or unlock `role`.  Unlocking does not recompute the role;
    /// the next base color or harmony change does.
    pub fn set_locked(&mut self, role: PaletteRole, locked: bool) {
        debug!(%role, locked, "lock changed");
        self.locked.set(role, locked);
    }

    /// Flip the lock of `role` and return its new state.
    pub fn toggle_lock(&mut self, role: PaletteRole) -> bool {
        let locked = !self.locked.get(role);
        self.set_locked(role, locked);
        locked
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use PaletteRole::*;

    fn blue() -> Color { "#3b82f6".parse().unwrap() }

    #[test]
    fn default_palette() {
        let p = PaletteState::default();
        assert_eq!(p.base_color(), blue());
        assert_eq!(p.harmony(), HarmonyMode::Analogous);
        assert_eq!(p.locks(), Locks::default());
        assert_eq!(p.scale(Primary)[500], blue());
        assert_eq!(p.scale(Secondary)[500].to_hex(), "#523bf6");
        assert_eq!(p.scale(Accent)[500].to_hex(), "#af3bf6");
    }

    #[test]
    fn manual_edit_survives_harmony_change() {
        let mut p = PaletteState::default();
        let red = Color::new(255, 0, 0);
        p.set_color(Accent, red);
        assert!(p.is_locked(Accent));
        let primary = *p.scale(Primary);
        let secondary = *p.scale(Secondary);
        p.set_harmony(HarmonyMode::Triadic);
        assert_eq!(*p.scale(Accent), generate_scale(red));
        assert_eq!(*p.scale(Primary), primary);
        assert_ne!(*p.scale(Secondary), secondary);
        assert_eq!(p.scale(Secondary)[500],
                   resolve_harmony(blue(), HarmonyMode::Triadic).secondary);
    }

    #[test]
    fn manual_edit_survives_base_change() {
        let mut p = PaletteState::default();
        p.set_color(Accent, Color::new(255, 0, 0));
        let accent = *p.scale(Accent);
        let green = Color::new(16, 185, 129);
        p.set_base_color(green);
        assert_eq!(*p.scale(Accent), accent);
        assert_eq!(p.scale(Primary)[500], green);
        assert_eq!(p.scale(Secondary)[500],
                   resolve_harmony(green, HarmonyMode::Analogous).secondary);
    }

    #[test]
    fn locked_primary_ignores_base_change() {
        let mut p = PaletteState::default();
        assert!(p.toggle_lock(Primary));
        p.set_base_color(Color::new(255, 0, 0));
        assert_eq!(p.base_color(), Color::new(255, 0, 0));
        assert_eq!(p.scale(Primary)[500], blue());
        assert_eq!(p.scale(Secondary)[500], Color::new(255, 0, 0).rotate(30.));
    }

    #[test]
    fn unlock_takes_effect_on_next_change() {
        let mut p = PaletteState::default();
        p.set_color(Secondary, Color::BLACK);
        p.set_locked(Secondary, false);
        assert_eq!(p.scale(Secondary)[500], Color::BLACK);
        p.set_harmony(HarmonyMode::Complementary);
        assert_eq!(p.scale(Secondary)[500], blue().rotate(180.));
        assert_eq!(p.scale(Secondary), p.scale(Accent));
    }

    #[test]
    fn invalid_base_keeps_last_good_state() {
        let mut p = PaletteState::default();
        let before = p.clone();
        assert!(p.set_base_hex("#12").is_err());
        assert_eq!(p, before);
        p.set_base_hex("#ff0000").unwrap();
        assert_eq!(p.base_color(), Color::new(255, 0, 0));
        assert!(p.set_role_hex(Accent, "oops").is_err());
        assert!(!p.is_locked(Accent));
    }

    #[test]
    fn hsl_slider_edits() {
        let mut p = PaletteState::new(Color::new(255, 0, 0),
                                      HarmonyMode::Complementary);
        p.adjust_role(Primary, HslChannel::Hue, 120.);
        assert_eq!(p.scale(Primary)[500], Color::new(0, 255, 0));
        assert!(p.is_locked(Primary));
        p.adjust_role(Primary, HslChannel::Lightness, 100.);
        assert_eq!(p.scale(Primary)[500], Color::WHITE);
        p.adjust_role(Secondary, HslChannel::Saturation, 0.);
        assert_eq!(p.scale(Secondary)[500], Color::new(128, 128, 128));
        // The base color itself is not a manual edit target.
        assert_eq!(p.base_color(), Color::new(255, 0, 0));
    }

    #[test]
    fn serializes_to_json() {
        let p = PaletteState::new(Color::new(255, 0, 0), HarmonyMode::Triadic);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["baseColor"], "#ff0000");
        assert_eq!(json["harmony"], "triadic");
        assert_eq!(json["secondary"]["500"], "#00ff00");
        assert_eq!(json["accent"]["950"], "#000040");
        assert_eq!(json["locked"]["primary"], false);
    }
}
