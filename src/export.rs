//! Palette export as code snippets.

use std::fmt::{self, Write};
use std::str::FromStr;
use crate::{Error, PaletteRole, PaletteState};

/// Target of [`export`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `tailwind.config.js` color extension.
    #[default]
    Tailwind,
    /// CSS custom properties on `:root`.
    Css,
    /// SCSS variables and a `$theme-colors` map.
    Scss,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] =
        [ExportFormat::Tailwind, ExportFormat::Css, ExportFormat::Scss];

    pub const fn name(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.trim().to_ascii_lowercase();
        ExportFormat::ALL.into_iter().find(|f| f.name() == lower)
            .ok_or_else(|| Error::UnrecognizedExportFormat(s.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `palette` as `format` source code.
///
/// ```
/// use color_harmony::PaletteState;
/// use color_harmony::export::{export, ExportFormat};
/// let css = export(&PaletteState::default(), ExportFormat::Css);
/// assert!(css.contains("--primary-500: #3b82f6;"));
/// ```
pub fn export(palette: &PaletteState, format: ExportFormat) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = match format {
        ExportFormat::Tailwind => tailwind(&mut out, palette),
        ExportFormat::Css => css(&mut out, palette),
        ExportFormat::Scss => scss(&mut out, palette),
    };
    out
}

/// CSS custom properties `(--<role>-<step>, #hex)` for every role and
/// step, to be set on the document root.
pub fn css_variables(palette: &PaletteState) -> Vec<(String, String)> {
    palette.scales()
        .flat_map(|(role, scale)| scale.iter().map(move |(step, c)| {
            (format!("--{role}-{step}"), c.to_hex()) }))
        .collect()
}

fn tailwind(out: &mut String, palette: &PaletteState) -> fmt::Result {
    writeln!(out, "// tailwind.config.js\n\
                   module.exports = {{\n  \
                   theme: {{\n    \
                   extend: {{\n      \
                   colors: {{")?;
    for (role, scale) in palette.scales() {
        writeln!(out, "        {role}: {{")?;
        for (step, c) in scale {
            writeln!(out, "          {step}: '{c}',")?;
        }
        writeln!(out, "        }},")?;
    }
    write!(out, "      }}\n    }}\n  }}\n}}\n")
}

fn css(out: &mut String, palette: &PaletteState) -> fmt::Result {
    writeln!(out, ":root {{")?;
    for (i, (role, scale)) in palette.scales().enumerate() {
        if i > 0 { writeln!(out)? }
        writeln!(out, "  /* {} */", title(role))?;
        for (step, c) in scale {
            writeln!(out, "  --{role}-{step}: {c};")?;
        }
    }
    writeln!(out, "}}")
}

fn scss(out: &mut String, palette: &PaletteState) -> fmt::Result {
    writeln!(out, "// _variables.scss")?;
    for (role, scale) in palette.scales() {
        writeln!(out, "${role}-500: {};", scale.base())?;
    }
    writeln!(out, "\n// Maps\n$theme-colors: (")?;
    let entries: Vec<_> = PaletteRole::ALL.iter()
        .map(|r| format!("  \"{r}\": ${r}-500")).collect();
    writeln!(out, "{}\n);", entries.join(",\n"))
}

fn title(role: PaletteRole) -> &'static str {
    match role {
        PaletteRole::Primary => "Primary",
        PaletteRole::Secondary => "Secondary",
        PaletteRole::Accent => "Accent",
    }
}
