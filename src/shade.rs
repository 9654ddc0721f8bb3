use crate::color::{BLACK, WHITE, hex_to_rgb, mix, rgb_to_f64, rgb_to_hex};
use crate::error::ParseColorErr;
use log::debug;
#[cfg(feature = "serde")]
use serde::de::{Error, MapAccess, SeqAccess, Visitor};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

/// The tonal steps of a palette.
///
/// Uses the usual design-system numbering, 500 is the base color.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50 = 0,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

/// How a shade is derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mixing {
    /// `white * weight + base * (1 - weight)`
    White(f64),
    /// The base color itself.
    Base,
    /// `base * weight + black * (1 - weight)`
    Black(f64),
}

impl Display for Shade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Shade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Ok(key) = s.trim().parse::<u16>() else {
            return Err(());
        };
        Shade::from_key(key).ok_or(())
    }
}

impl Shade {
    pub const LEN: usize = 11;

    /// All shades in ascending order.
    pub const fn array() -> [Shade; Shade::LEN] {
        use Shade::*;
        [S50, S100, S200, S300, S400, S500, S600, S700, S800, S900, S950]
    }

    pub const fn from_key(key: u16) -> Option<Self> {
        match key {
            50 => Some(Shade::S50),
            100 => Some(Shade::S100),
            200 => Some(Shade::S200),
            300 => Some(Shade::S300),
            400 => Some(Shade::S400),
            500 => Some(Shade::S500),
            600 => Some(Shade::S600),
            700 => Some(Shade::S700),
            800 => Some(Shade::S800),
            900 => Some(Shade::S900),
            950 => Some(Shade::S950),
            _ => None,
        }
    }

    pub const fn key(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Fixed mixing weights.
    ///
    /// Lighter shades take the weight as the contribution of
    /// white, darker shades as the contribution of the base.
    pub const fn mixing(self) -> Mixing {
        match self {
            Shade::S50 => Mixing::White(0.95),
            Shade::S100 => Mixing::White(0.9),
            Shade::S200 => Mixing::White(0.75),
            Shade::S300 => Mixing::White(0.6),
            Shade::S400 => Mixing::White(0.3),
            Shade::S500 => Mixing::Base,
            Shade::S600 => Mixing::Black(0.9),
            Shade::S700 => Mixing::Black(0.75),
            Shade::S800 => Mixing::Black(0.6),
            Shade::S900 => Mixing::Black(0.45),
            Shade::S950 => Mixing::Black(0.3),
        }
    }
}

/// Shade palette.
///
/// Holds the hex value for each [Shade] of one base color.
/// The 500 entry is the base color exactly as it was given,
/// all others are lowercase `#rrggbb`.
///
/// Deserializing runs [ShadePalette::check].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShadePalette {
    /// Display name.
    pub name: String,
    /// Hex values. Use [Shade] for indexing.
    pub shade: [String; Shade::LEN],
}

impl Index<Shade> for ShadePalette {
    type Output = str;

    fn index(&self, index: Shade) -> &Self::Output {
        self.shade[index as usize].as_str()
    }
}

impl ShadePalette {
    /// Generate the palette and give it a name.
    pub fn named(name: impl Into<String>, base_hex: &str) -> Result<Self, ParseColorErr> {
        let mut pal = generate_palette(base_hex)?;
        pal.name = name.into();
        Ok(pal)
    }

    /// The base color as given.
    pub fn base(&self) -> &str {
        &self[Shade::S500]
    }

    /// Same as indexing with the shade.
    pub fn get(&self, shade: Shade) -> &str {
        &self[shade]
    }

    /// Lookup with the numeric key. 50, 100, ... 950
    pub fn get_key(&self, key: u16) -> Option<&str> {
        Shade::from_key(key).map(|v| &self[v])
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        Shade::array().into_iter().map(|v| (v, &self[v]))
    }

    /// Every shade must be a valid hex color.
    ///
    /// Doesn't check that the shades are derived from the base,
    /// a hand-edited palette is fine.
    pub fn check(&self) -> Result<(), ParseColorErr> {
        for (_, hex) in self.iter() {
            hex_to_rgb(hex)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
struct ShadePaletteVisitor;

#[cfg(feature = "serde")]
impl<'de> Visitor<'de> for ShadePaletteVisitor {
    type Value = ShadePalette;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "struct ShadePalette")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let name = seq
            .next_element::<String>()?
            .ok_or(A::Error::invalid_length(0, &"ShadePalette.name"))?;
        let shade = seq
            .next_element::<[String; Shade::LEN]>()?
            .ok_or(A::Error::invalid_length(1, &"ShadePalette.shade"))?;
        let pal = ShadePalette { name, shade };
        pal.check().map_err(A::Error::custom)?;
        Ok(pal)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name = None;
        let mut shade = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => name = Some(map.next_value::<String>()?),
                "shade" => shade = Some(map.next_value::<[String; Shade::LEN]>()?),
                _ => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }
        let name = name.ok_or(A::Error::missing_field("name"))?;
        let shade = shade.ok_or(A::Error::missing_field("shade"))?;

        let pal = ShadePalette { name, shade };
        pal.check().map_err(A::Error::custom)?;
        Ok(pal)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ShadePalette {
    fn deserialize<D>(des: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        const FIELDS: &[&str] = &["name", "shade"];
        des.deserialize_struct("ShadePalette", FIELDS, ShadePaletteVisitor)
    }
}

/// Derives all shades from the base color.
///
/// The base is parsed once, lighter shades are mixed with white,
/// darker shades with black. The result is deterministic.
pub fn generate_palette(base_hex: &str) -> Result<ShadePalette, ParseColorErr> {
    let base = rgb_to_f64(hex_to_rgb(base_hex)?);

    let shade = Shade::array().map(|v| match v.mixing() {
        Mixing::White(weight) => rgb_to_hex(mix(WHITE, base, weight)),
        Mixing::Base => base_hex.to_string(),
        Mixing::Black(weight) => rgb_to_hex(mix(base, BLACK, weight)),
    });
    debug!("generate_palette {} -> {:?}", base_hex, shade);

    Ok(ShadePalette {
        name: String::new(),
        shade,
    })
}
