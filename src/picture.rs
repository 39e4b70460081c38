//! The fully parsed picture and its pixel/CLUT decoding.

use alloc::{string::String, vec::Vec};

use bitfrob::u8_replicate_bits;
use bytemuck::cast_slice;
use pixel_formats::r8g8b8a8_Srgb;

use crate::{ExtendedHeader, MipMapHeader, PictureHeader, PixelFormat};

/// One picture out of a TIM2 file, with all of its regions materialized.
///
/// A `Picture` is built in a single parser pass and not touched again: the
/// image and CLUT regions are kept as the raw bytes from the file, and
/// decoding to RGBA happens on demand through [Picture::decode_image] and
/// [Picture::clut_colors].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Picture {
  /// The fixed 48 byte header.
  pub header: PictureHeader,

  /// The mipmap header, present iff `header.mip_map_textures > 1`.
  pub mip_map_header: Option<MipMapHeader>,

  /// The extended header, present iff the user space opened with `eXt\0`.
  pub ext_header: Option<ExtendedHeader>,

  /// The comment string from the user space, if there was one.
  pub comment: Option<String>,

  /// The raw user-space bytes (including any extended header bytes).
  pub user_data: Vec<u8>,

  /// The raw image data for every mipmap level, level 0 first.
  pub image_data: Vec<u8>,

  /// The raw CLUT data, still in its on-disk entry layout.
  pub clut_data: Vec<u8>,
}

/// Expands one 16-bit direct color value to RGBA.
///
/// The three 5-bit channels are bit-replicated up to 8 bits, and the single
/// alpha bit selects fully transparent or fully opaque.
#[inline]
#[must_use]
fn color_from_rgb16(v: u16) -> r8g8b8a8_Srgb {
  let r = u8_replicate_bits(5, (v & 0x1F) as u8);
  let g = u8_replicate_bits(5, ((v >> 5) & 0x1F) as u8);
  let b = u8_replicate_bits(5, ((v >> 10) & 0x1F) as u8);
  let a = if (v & 0x8000) != 0 { 0xFF } else { 0x00 };
  r8g8b8a8_Srgb { r, g, b, a }
}

/// Applies the CSM1 compound-mode index shuffle.
///
/// Within each 32-entry block, entries 8..=15 and 16..=23 trade places;
/// everything else stays put. Applying this twice gets back the original
/// index.
#[inline]
#[must_use]
const fn compound_index(i: usize) -> usize {
  let block = i / 32;
  let local = i % 32;
  let local = match local {
    8..=15 => local + 8,
    16..=23 => local - 8,
    _ => local,
  };
  block * 32 + local
}

impl Picture {
  /// Pixel width of a mipmap level: the level-0 width halved per level,
  /// never below 1.
  #[inline]
  #[must_use]
  pub const fn mip_width(&self, level: usize) -> usize {
    let w = (self.header.image_width as usize) >> level;
    if w > 0 {
      w
    } else {
      1
    }
  }

  /// Pixel height of a mipmap level, clamped like [Picture::mip_width].
  #[inline]
  #[must_use]
  pub const fn mip_height(&self, level: usize) -> usize {
    let h = (self.header.image_height as usize) >> level;
    if h > 0 {
      h
    } else {
      1
    }
  }

  /// Byte offset of a mipmap level within [Picture::image_data].
  ///
  /// Level 0 always starts at offset 0, whether or not a mipmap header
  /// exists. Later levels start where the declared sizes of the levels
  /// before them end.
  #[inline]
  #[must_use]
  pub fn mip_offset(&self, level: usize) -> usize {
    match &self.mip_map_header {
      Some(mip) if level > 0 => mip.sizes.iter().take(level).map(|&s| s as usize).sum(),
      _ => 0,
    }
  }

  /// Decodes one mipmap level of the image to a flat RGBA buffer.
  ///
  /// The buffer is `mip_width * mip_height` pixels, rows top to bottom with
  /// no padding. A `mip_level` at or past `header.mip_map_textures` gives
  /// an empty vec; that's "nothing to show", not an error.
  ///
  /// Decoding never fails outright: an unknown pixel format code, a palette
  /// index past the CLUT's end, or image data shorter than the pixel count
  /// all produce transparent black pixels instead.
  #[must_use]
  pub fn decode_image(&self, mip_level: usize) -> Vec<r8g8b8a8_Srgb> {
    if mip_level >= self.header.mip_map_textures as usize {
      return Vec::new();
    }
    let width = self.mip_width(mip_level);
    let height = self.mip_height(mip_level);
    let px_count = width * height;
    let offset = self.mip_offset(mip_level);
    let data: &[u8] = self.image_data.get(offset..).unwrap_or(&[]);

    let mut out: Vec<r8g8b8a8_Srgb> = Vec::with_capacity(px_count);
    match self.header.image_format() {
      Some(PixelFormat::Rgb32) => {
        let whole = data.len() - (data.len() % 4);
        for [r, g, b, a] in cast_slice::<u8, [u8; 4]>(&data[..whole]).iter().copied().take(px_count)
        {
          out.push(r8g8b8a8_Srgb { r, g, b, a });
        }
      }
      Some(PixelFormat::Rgb24) => {
        let whole = data.len() - (data.len() % 3);
        for [r, g, b] in cast_slice::<u8, [u8; 3]>(&data[..whole]).iter().copied().take(px_count) {
          out.push(r8g8b8a8_Srgb { r, g, b, a: 0xFF });
        }
      }
      Some(PixelFormat::Rgb16) => {
        let whole = data.len() - (data.len() % 2);
        for pair in cast_slice::<u8, [u8; 2]>(&data[..whole]).iter().copied().take(px_count) {
          out.push(color_from_rgb16(u16::from_le_bytes(pair)));
        }
      }
      Some(PixelFormat::Indexed8) => {
        let palette = self.clut_colors();
        for &index in data.iter().take(px_count) {
          out.push(palette.get(index as usize).copied().unwrap_or_default());
        }
      }
      Some(PixelFormat::Indexed4) => {
        let palette = self.clut_colors();
        for px in 0..px_count {
          let Some(&packed) = data.get(px / 2) else { break };
          // even pixel takes the low nibble, odd pixel the high nibble
          let index = if (px & 1) != 0 { packed >> 4 } else { packed & 0x0F };
          out.push(palette.get(index as usize).copied().unwrap_or_default());
        }
      }
      Some(PixelFormat::None) | None => (),
    }
    out.resize(px_count, r8g8b8a8_Srgb::default());
    out
  }

  /// Decodes the CLUT into RGBA colors, one per declared CLUT entry.
  ///
  /// Gives an empty vec when the picture has no CLUT. In CSM1 compound
  /// mode the entry indexes pass through the 32-entry block shuffle before
  /// the byte lookup. Entries in an unknown format, or whose bytes fall
  /// past the end of the CLUT data, come out as transparent black.
  #[must_use]
  pub fn clut_colors(&self) -> Vec<r8g8b8a8_Srgb> {
    if !self.header.has_clut() {
      return Vec::new();
    }
    let format = self.header.clut_format();
    let shuffled = !self.header.is_clut_csm2() && self.header.is_clut_compound();
    let data: &[u8] = &self.clut_data;

    let count = self.header.clut_colors as usize;
    let mut colors: Vec<r8g8b8a8_Srgb> = Vec::with_capacity(count);
    for i in 0..count {
      let index = if shuffled { compound_index(i) } else { i };
      let color = match format {
        Some(PixelFormat::Rgb16) => match data.get(index * 2..index * 2 + 2) {
          Some(pair) => color_from_rgb16(u16::from_le_bytes(pair.try_into().unwrap())),
          None => r8g8b8a8_Srgb::default(),
        },
        Some(PixelFormat::Rgb24) => match data.get(index * 3..index * 3 + 3) {
          Some(&[r, g, b]) => r8g8b8a8_Srgb { r, g, b, a: 0xFF },
          _ => r8g8b8a8_Srgb::default(),
        },
        Some(PixelFormat::Rgb32) => match data.get(index * 4..index * 4 + 4) {
          Some(&[r, g, b, a]) => r8g8b8a8_Srgb { r, g, b, a },
          _ => r8g8b8a8_Srgb::default(),
        },
        // CLUT entries are never themselves indexed; treat those codes like
        // an unknown format.
        Some(PixelFormat::None)
        | Some(PixelFormat::Indexed4)
        | Some(PixelFormat::Indexed8)
        | None => r8g8b8a8_Srgb::default(),
      };
      colors.push(color);
    }
    colors
  }
}
