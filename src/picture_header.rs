//! The fixed-size header that opens every picture block.

use crate::{u16_le, u32_le, u64_le};

/// The ways TIM2 stores pixels, both for image data and CLUT entries.
///
/// The wire value lives in the low 6 bits of the `image_type` and
/// `clut_type` header bytes. Codes outside this enum have never been
/// defined; [PictureHeader] keeps the raw byte around and hands out
/// `Option<PixelFormat>` so an unknown code shows up as `None` instead of
/// being mistaken for one of the real formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
  /// No data at all (a CLUT-less picture declares its CLUT this way).
  None = 0x00,
  /// 16-bit direct color: 5 bits each of R/G/B plus 1 alpha bit.
  Rgb16 = 0x01,
  /// 24-bit direct color: 3 bytes of R/G/B, always opaque.
  Rgb24 = 0x02,
  /// 32-bit direct color: 4 bytes of R/G/B/A.
  Rgb32 = 0x03,
  /// 4-bit indexed color, two pixels per byte.
  Indexed4 = 0x04,
  /// 8-bit indexed color, one pixel per byte.
  Indexed8 = 0x05,
}

impl PixelFormat {
  /// The format for a wire code, or `None` for codes never defined.
  #[inline]
  #[must_use]
  pub const fn from_u8(code: u8) -> Option<Self> {
    match code {
      0x00 => Some(Self::None),
      0x01 => Some(Self::Rgb16),
      0x02 => Some(Self::Rgb24),
      0x03 => Some(Self::Rgb32),
      0x04 => Some(Self::Indexed4),
      0x05 => Some(Self::Indexed8),
      _ => None,
    }
  }

  /// Bits of storage per pixel, 0 for [PixelFormat::None].
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(self) -> usize {
    match self {
      Self::None => 0,
      Self::Rgb16 => 16,
      Self::Rgb24 => 24,
      Self::Rgb32 => 32,
      Self::Indexed4 => 4,
      Self::Indexed8 => 8,
    }
  }
}

impl core::fmt::Display for PixelFormat {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let s = match self {
      Self::None => "None",
      Self::Rgb16 => "RGB16",
      Self::Rgb24 => "RGB24",
      Self::Rgb32 => "RGB32",
      Self::Indexed4 => "IDTEX4 (4-bit indexed)",
      Self::Indexed8 => "IDTEX8 (8-bit indexed)",
    };
    f.write_str(s)
  }
}

/// Bit flag within `clut_type` for the CSM2 (direct GS layout) storage mode.
pub const CLUT_CSM2_BIT: u8 = 0x80;
/// Bit flag within `clut_type` for the compound-block layout.
pub const CLUT_COMPOUND_BIT: u8 = 0x40;

/// The fixed 48 byte header of one picture block.
///
/// The four `gs_*` fields are raw register words for the PS2's Graphics
/// Synthesizer. Parsing keeps them byte-for-byte; [crate::GsTex0] and
/// [crate::GsTex1] give a field-by-field view when a caller wants one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PictureHeader {
  /// Total bytes of this picture block (headers + image + CLUT).
  pub total_size: u32,

  /// Bytes of CLUT data (0 when there's no CLUT).
  pub clut_size: u32,

  /// Bytes of image data, summed across every mipmap level.
  pub image_size: u32,

  /// Bytes of header data (picture header + mipmap header + user space).
  pub header_size: u16,

  /// Number of colors actually stored in the CLUT.
  pub clut_colors: u16,

  /// Picture format byte; 0 in every known file. Kept, not validated.
  pub pict_format: u8,

  /// Number of mipmap levels, 1 for a plain single-level picture.
  pub mip_map_textures: u8,

  /// CLUT pixel format (low 6 bits) plus the CSM2 and compound mode flags.
  pub clut_type: u8,

  /// Image pixel format code.
  pub image_type: u8,

  /// Width in pixels of mip level 0.
  pub image_width: u16,

  /// Height in pixels of mip level 0.
  pub image_height: u16,

  /// Raw GS TEX0 register word.
  pub gs_tex0: u64,

  /// Raw GS TEX1 register word.
  pub gs_tex1: u64,

  /// Packed TEXA, FBA, and PABE register bits.
  pub gs_texa_fba_pabe: u32,

  /// TEXCLUT register word, only meaningful in CSM2 mode.
  pub gs_tex_clut: u32,
}

impl From<[u8; 48]> for PictureHeader {
  #[inline]
  #[must_use]
  fn from(a: [u8; 48]) -> Self {
    Self {
      total_size: u32_le(&a[0..4]),
      clut_size: u32_le(&a[4..8]),
      image_size: u32_le(&a[8..12]),
      header_size: u16_le(&a[12..14]),
      clut_colors: u16_le(&a[14..16]),
      pict_format: a[16],
      mip_map_textures: a[17],
      clut_type: a[18],
      image_type: a[19],
      image_width: u16_le(&a[20..22]),
      image_height: u16_le(&a[22..24]),
      gs_tex0: u64_le(&a[24..32]),
      gs_tex1: u64_le(&a[32..40]),
      gs_texa_fba_pabe: u32_le(&a[40..44]),
      gs_tex_clut: u32_le(&a[44..48]),
    }
  }
}

impl PictureHeader {
  /// The pixel format of the image data, `None` for unknown codes.
  #[inline]
  #[must_use]
  pub const fn image_format(&self) -> Option<PixelFormat> {
    PixelFormat::from_u8(self.image_type)
  }

  /// The pixel format of the CLUT entries, `None` for unknown codes.
  #[inline]
  #[must_use]
  pub const fn clut_format(&self) -> Option<PixelFormat> {
    PixelFormat::from_u8(self.clut_type & 0x3F)
  }

  /// If the CLUT uses the CSM2 (direct GS layout) storage mode.
  #[inline]
  #[must_use]
  pub const fn is_clut_csm2(&self) -> bool {
    (self.clut_type & CLUT_CSM2_BIT) != 0
  }

  /// If the CLUT uses the compound-block layout.
  #[inline]
  #[must_use]
  pub const fn is_clut_compound(&self) -> bool {
    (self.clut_type & CLUT_COMPOUND_BIT) != 0
  }

  /// If the picture carries a usable CLUT.
  ///
  /// There has to be CLUT data *and* the CLUT format has to be something
  /// other than [PixelFormat::None].
  #[inline]
  #[must_use]
  pub fn has_clut(&self) -> bool {
    self.clut_size > 0 && !matches!(self.clut_format(), Some(PixelFormat::None))
  }

  /// If the picture carries more than one mipmap level.
  #[inline]
  #[must_use]
  pub const fn has_mip_maps(&self) -> bool {
    self.mip_map_textures > 1
  }
}
