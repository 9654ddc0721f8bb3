use crate::error::ParseColorErr;
use crate::shade::ShadePalette;

/// Built-in base colors, in report order.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("Deep Navy Blue", "#0B1F3B"),
    ("Misty Indigo", "#3B3A82"),
    ("Cool Ink Green", "#0F6B61"),
    ("Sage Green", "#7A8F86"),
    ("Champagne Gold", "#C6A15B"),
    ("Terracotta Orange", "#B85C4A"),
    ("Graphite Gray", "#1F2933"),
];

/// Palettes for any name/base list, in the given order.
///
/// Stops at the first malformed color.
pub fn palettes_for<'a>(
    colors: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Vec<ShadePalette>, ParseColorErr> {
    colors
        .into_iter()
        .map(|(name, hex)| ShadePalette::named(name, hex))
        .collect()
}

/// Palettes for the built-in [NAMED_COLORS].
pub fn named_palettes() -> Result<Vec<ShadePalette>, ParseColorErr> {
    palettes_for(NAMED_COLORS.iter().copied())
}
