//!
//! Derives a tonal shade palette from a single base color.
//!
//! Each palette has the eleven steps 50, 100, 200 ... 900, 950.
//! Step 500 is the base color itself, the lighter steps are
//! mixed with white and the darker steps with black, using
//! plain linear interpolation on the rgb channels.
//!
//! ```rust
//! use rat_shade::{Shade, generate_palette};
//!
//! let pal = generate_palette("#0B1F3B").expect("color");
//! assert_eq!(&pal[Shade::S500], "#0B1F3B");
//! assert_eq!(&pal[Shade::S600], "#091b35");
//! assert_eq!(pal.get_key(50), Some("#f2f3f5"));
//! ```
//!
//! There is no gamma correction and no perceptual color space
//! involved. Mixed channels are truncated, not rounded.
//!

mod color;
mod error;
mod named;
mod pal_io;
mod shade;

pub use color::{BLACK, Channels, WHITE, hex_to_rgb, mix, rgb_to_f64, rgb_to_hex};
pub use error::{LoadPaletteErr, ParseColorErr};
pub use named::{NAMED_COLORS, named_palettes, palettes_for};
pub use pal_io::{load_palettes, store_palette, store_palettes};
pub use shade::{Mixing, Shade, ShadePalette, generate_palette};
