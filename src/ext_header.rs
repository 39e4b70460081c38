//! The optional extended header at the start of a picture's user space.

use crate::AsciiArray;

/// The four bytes that open an extended header.
pub const EXT_TAG: AsciiArray<4> = AsciiArray(*b"eXt\0");

/// The optional 16 byte record at the start of a picture's user space.
///
/// User space is whatever lies between the fixed headers and the (aligned)
/// image data. When its first 16 bytes carry the `eXt\0` tag they form this
/// record, and the region can then also hold free-form user data and a
/// null-terminated comment string. When the tag doesn't match, the region
/// is just opaque bytes and this record is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExtendedHeader {
  /// This is expected to be `eXt\0`.
  pub tag: AsciiArray<4>,

  /// Valid bytes of user space, *excluding* any trailing alignment padding
  /// (but including this header).
  pub user_space_size: u32,

  /// Bytes of free-form user data between this header and the comment.
  pub user_data_size: u32,
}

impl From<[u8; 16]> for ExtendedHeader {
  #[inline]
  #[must_use]
  fn from(a: [u8; 16]) -> Self {
    Self {
      tag: AsciiArray(a[0..4].try_into().unwrap()),
      user_space_size: crate::u32_le(&a[4..8]),
      user_data_size: crate::u32_le(&a[8..12]),
      // 4 reserved bytes skipped
    }
  }
}

impl ExtendedHeader {
  /// If the tag bytes say this is an extended header.
  #[inline]
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.tag == EXT_TAG
  }

  /// Probes a user-space region for an extended header.
  ///
  /// Returns `None` when the region is too short or the tag doesn't match.
  #[inline]
  #[must_use]
  pub fn try_from_user_space(user_space: &[u8]) -> Option<Self> {
    let (a, _) = crate::try_split_off_byte_array::<16>(user_space)?;
    let ext = Self::from(a);
    ext.is_valid().then_some(ext)
  }

  /// The bytes of the comment string within `user_space`, if one exists.
  ///
  /// The comment starts right after the user data and runs to its null
  /// terminator. Its length is bounded by whichever is smaller of the raw
  /// region size and this header's declared valid size; a comment with no
  /// terminator inside that bound fills the whole bound.
  #[inline]
  #[must_use]
  pub fn comment_bytes<'b>(&self, user_space: &'b [u8]) -> Option<&'b [u8]> {
    let start = 16_usize.checked_add(self.user_data_size as usize)?;
    let limit = user_space.len().min(self.user_space_size as usize);
    if start >= limit {
      return None;
    }
    let region = &user_space[start..limit];
    let len = region.iter().position(|&b| b == 0).unwrap_or(region.len());
    Some(&region[..len])
  }
}
