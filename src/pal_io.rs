//!
//! Allows load/store to an ini-style format.
//! Serde for ShadePalette is supported as well.
//!
//! ```ini
//! [palette]
//! name=Deep Navy Blue
//! base=#0B1F3B
//!
//! [shades]
//! 50=#f2f3f5
//! ...
//! 950=#030911
//! ```
//!
//! A file can contain any number of palettes.
//!

use crate::error::LoadPaletteErr;
use crate::shade::{Shade, ShadePalette};
use log::debug;
use std::io;

/// Store a ShadePalette as a .pal file.
pub fn store_palette(pal: &ShadePalette, mut buf: impl io::Write) -> Result<(), io::Error> {
    writeln!(buf, "[palette]")?;
    writeln!(buf, "name={}", pal.name)?;
    writeln!(buf, "base={}", pal.base())?;
    writeln!(buf)?;
    writeln!(buf, "[shades]")?;
    for (shade, hex) in pal.iter() {
        writeln!(buf, "{}={}", shade, hex)?;
    }
    writeln!(buf)?;
    Ok(())
}

/// Store several palettes in one .pal file.
pub fn store_palettes(pal: &[ShadePalette], mut buf: impl io::Write) -> Result<(), io::Error> {
    for p in pal {
        store_palette(p, &mut buf)?;
    }
    Ok(())
}

/// Palette while loading.
#[derive(Debug, Default)]
struct Partial {
    name: String,
    base: Option<String>,
    shade: [Option<String>; Shade::LEN],
}

impl Partial {
    fn finish(self) -> Result<ShadePalette, String> {
        let Some(base) = self.base else {
            return Err(format!("Missing base for {:?}", self.name));
        };
        let mut shade: [String; Shade::LEN] = Default::default();
        for (v, hex) in Shade::array().into_iter().zip(self.shade) {
            let Some(hex) = hex else {
                return Err(format!("Missing shade {} for {:?}", v, self.name));
            };
            shade[v as usize] = hex;
        }
        if shade[Shade::S500 as usize] != base {
            return Err(format!(
                "Shade 500 {:?} differs from base {:?} for {:?}",
                shade[Shade::S500 as usize],
                base,
                self.name
            ));
        }
        let pal = ShadePalette {
            name: self.name,
            shade,
        };
        pal.check()
            .map_err(|e| format!("{} in {:?}", e, pal.name))?;
        Ok(pal)
    }
}

/// Load all palettes from a .pal file.
pub fn load_palettes(mut r: impl io::Read) -> Result<Vec<ShadePalette>, io::Error> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)?;

    enum S {
        Start,
        Palette,
        Shades,
        Fail(String),
    }

    let mut result = Vec::new();
    let mut pal = Partial::default();

    let mut state = S::Start;
    'm: for l in buf.lines() {
        let l = l.trim();
        match state {
            S::Start => {
                if l.is_empty() || l.starts_with("#") {
                    // ok
                } else if l == "[palette]" {
                    state = S::Palette;
                } else {
                    state = S::Fail("Not a valid pal-file".to_string());
                    break 'm;
                }
            }
            S::Palette => {
                if l == "[shades]" {
                    state = S::Shades;
                } else if l.is_empty() || l.starts_with("#") {
                    // ok
                } else if let Some((k, v)) = l.split_once('=') {
                    match k.trim() {
                        "name" => pal.name = v.trim().to_string(),
                        "base" => pal.base = Some(v.trim().to_string()),
                        _ => {
                            state = S::Fail(format!("Invalid palette property {:?}", l));
                            break 'm;
                        }
                    }
                } else {
                    state = S::Fail(format!("Invalid property format {:?}", l));
                    break 'm;
                }
            }
            S::Shades => {
                if l == "[palette]" {
                    match std::mem::take(&mut pal).finish() {
                        Ok(p) => result.push(p),
                        Err(e) => {
                            state = S::Fail(e);
                            break 'm;
                        }
                    }
                    state = S::Palette;
                } else if l.is_empty() || l.starts_with("#") {
                    // ok
                } else if let Some((k, v)) = l.split_once('=') {
                    let Ok(shade) = k.parse::<Shade>() else {
                        state = S::Fail(format!("Invalid shade {:?}", l));
                        break 'm;
                    };
                    pal.shade[shade as usize] = Some(v.trim().to_string());
                } else {
                    state = S::Fail(format!("Invalid property format {:?}", l));
                    break 'm;
                }
            }
            S::Fail(_) => {
                unreachable!()
            }
        }
    }

    match state {
        S::Fail(n) => Err(io::Error::other(LoadPaletteErr(n))),
        S::Start => Err(io::Error::other(LoadPaletteErr(
            "Missing [palette]. Invalid format or truncated.".to_string(),
        ))),
        S::Palette => Err(io::Error::other(LoadPaletteErr(
            "Missing [shades]. Invalid format or truncated.".to_string(),
        ))),
        S::Shades => match pal.finish() {
            Ok(p) => {
                result.push(p);
                debug!("load_palettes {} palettes", result.len());
                Ok(result)
            }
            Err(e) => Err(io::Error::other(LoadPaletteErr(e))),
        },
    }
}
