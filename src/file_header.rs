//! The header at the start of every TIM2 file.

use crate::{u16_le, AsciiArray, Tim2Error};

/// The four bytes that open every TIM2 file.
pub const TIM2_TAG: AsciiArray<4> = AsciiArray(*b"TIM2");

/// The version byte official TIM2 files carry.
///
/// Files with other version bytes exist in the wild and many tools emit
/// them, so a mismatch is only worth a warning, never a parse failure.
pub const TIM2_VERSION: u8 = 0x04;

/// Alignment mode byte for 16 byte units.
pub const TIM2_ALIGN_16: u8 = 0x00;
/// Alignment mode byte for 128 byte units.
pub const TIM2_ALIGN_128: u8 = 0x01;

/// The header at the start of all TIM2 files.
///
/// This is always 16 bytes. The eight reserved bytes at the end are
/// supposed to be zero but nothing checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FileHeader {
  /// This is expected to be `TIM2`.
  pub tag: AsciiArray<4>,

  /// Format version, officially [TIM2_VERSION].
  pub version: u8,

  /// Alignment mode: 0 for 16 byte units, 1 for 128 byte units.
  ///
  /// Everything after the file header (picture blocks, image data, CLUT
  /// data) starts on a multiple of the unit this selects.
  pub align_mode: u8,

  /// Number of picture blocks in the file.
  pub pictures: u16,
}

impl From<[u8; 16]> for FileHeader {
  #[inline]
  #[must_use]
  fn from(a: [u8; 16]) -> Self {
    Self {
      tag: AsciiArray(a[0..4].try_into().unwrap()),
      version: a[4],
      align_mode: a[5],
      pictures: u16_le(&a[6..8]),
      // 8 reserved bytes skipped
    }
  }
}

impl FileHeader {
  /// If the tag bytes say this is a TIM2 file.
  ///
  /// This looks at the tag *only*. Every other field can hold any value and
  /// the header still counts as valid.
  #[inline]
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.tag == TIM2_TAG
  }

  /// The alignment unit, in bytes, that the rest of the file uses.
  #[inline]
  #[must_use]
  pub const fn alignment(&self) -> usize {
    if self.align_mode == TIM2_ALIGN_128 {
      128
    } else {
      16
    }
  }

  /// Tries to get the file header and remaining bytes from the bytes of a
  /// TIM2 file.
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Tim2Error> {
    let (a, rest) =
      crate::try_split_off_byte_array::<16>(bytes).ok_or(Tim2Error::TruncatedHeader)?;
    Ok((Self::from(a), rest))
  }
}
