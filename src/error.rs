use thiserror::Error;

/// Result alias for palette operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised at the string boundary of the crate.
///
/// Color derivation itself cannot fail; only parsing user or
/// configuration input can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is not a `#rgb` or `#rrggbb` hex color.
    #[error("invalid color `{input}`: expected `#rgb` or `#rrggbb`")]
    InvalidColor { input: String },
    /// The harmony mode name matches none of the supported modes.
    #[error("unrecognized harmony mode `{0}` (expected one of: analogous, \
             complementary, split-complementary, triadic, monochromatic)")]
    UnrecognizedHarmonyMode(String),
    #[error("unrecognized export format `{0}` (expected tailwind, css or scss)")]
    UnrecognizedExportFormat(String),
    #[error("unrecognized palette role `{0}` (expected primary, secondary or accent)")]
    UnrecognizedRole(String),
}
