// Palette configuration files, written in Hjson, e.g.
//
//     {
//       base: "#3b82f6"
//       harmony: split-complementary
//       format: css
//       overrides: { accent: "#f59e0b" }
//     }
//
// Every key is optional.

use std::{error::Error,
          fs,
          path::Path,
          str::FromStr};
use serde_hjson::Value::{self, *};
use color_harmony::{Color, HarmonyMode, PaletteRole};
use color_harmony::export::ExportFormat;

pub type Err = Box<dyn Error>;

/// What the `export` command writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Code(ExportFormat),
    Json,
}

impl Default for Format {
    fn default() -> Self { Format::Code(ExportFormat::default()) }
}

impl FromStr for Format {
    type Err = color_harmony::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("json") { return Ok(Format::Json) }
        s.parse().map(Format::Code)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Config {
    pub base: Option<Color>,
    pub harmony: Option<HarmonyMode>,
    pub format: Option<Format>,
    /// Manual edits, applied in order (each one locks its role).
    pub overrides: Vec<(PaletteRole, Color)>,
}

fn string<'a>(key: &str, v: &'a Value) -> Result<&'a str, Err> {
    match v {
        String(s) => Ok(s.as_str()),
        _ => Err(format!("config: `{key}` must be a string, got {v:?}").into()),
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Err> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("config: cannot read {}: {e}", path.display()))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, Err> {
        let json: Value = serde_hjson::from_str(text)?;
        let mut config = Config::default();
        let m = match json {
            Object(m) => m,
            _ => return Err("config: the top level must be an object".into()),
        };
        for (key, v) in m.iter() {
            match key.as_str() {
                "base" => config.base = Some(string(key, v)?.parse()?),
                "harmony" => config.harmony = Some(string(key, v)?.parse()?),
                "format" => config.format = Some(string(key, v)?.parse()?),
                "overrides" => {
                    let Object(roles) = v else {
                        return Err("config: `overrides` must be an object".into())
                    };
                    for (role, hex) in roles.iter() {
                        config.overrides.push((role.parse()?,
                                               string(role, hex)?.parse()?));
                    }
                }
                _ => return Err(format!("config: unknown key `{key}`").into()),
            }
        }
        Ok(config)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn full_config() {
        let c = Config::parse("{\n  base: \"#ff0000\"\n  harmony: triadic\n  \
                               format: json\n  \
                               overrides: {\n    accent: \"#00f\"\n  }\n}")
            .unwrap();
        assert_eq!(c.base, Some(Color::new(255, 0, 0)));
        assert_eq!(c.harmony, Some(HarmonyMode::Triadic));
        assert_eq!(c.format, Some(Format::Json));
        assert_eq!(c.overrides, vec![(PaletteRole::Accent, Color::new(0, 0, 255))]);
    }

    #[test]
    fn empty_config() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn rejects_bad_values() {
        for text in ["{\n  base: \"red\"\n}",
                     "{\n  harmony: tetradic\n}",
                     "{\n  format: less\n}",
                     "{\n  overrides: {\n    tertiary: \"#fff\"\n  }\n}",
                     "{\n  base: 12\n}",
                     "{\n  colour: \"#fff\"\n}",
                     "[\"#fff\"]"] {
            assert!(Config::parse(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{{\n  # quoteless strings run to the end of the line\n  \
                     harmony: monochromatic\n}}").unwrap();
        let c = Config::load(f.path()).unwrap();
        assert_eq!(c.harmony, Some(HarmonyMode::Monochromatic));
        assert!(Config::load(Path::new("/nonexistent/palette.hjson")).is_err());
    }

    #[test]
    fn formats() {
        assert_eq!("css".parse(), Ok(Format::Code(ExportFormat::Css)));
        assert_eq!("JSON".parse(), Ok(Format::Json));
        assert_eq!(Format::default(), Format::Code(ExportFormat::Tailwind));
    }
}
