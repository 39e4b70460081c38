//! The sequential walk that turns TIM2 bytes into [Picture] values.

use alloc::{string::String, vec::Vec};

use crate::{
  align_up, ExtendedHeader, FileHeader, MipMapHeader, Picture, PictureHeader, Tim2Error,
  TIM2_VERSION,
};

/// Reads `count` bytes at the cursor and moves the cursor past them.
///
/// `None` is a short read; the caller turns that into the right error.
#[inline]
#[must_use]
fn read_exact<'b>(bytes: &'b [u8], cursor: &mut usize, count: usize) -> Option<&'b [u8]> {
  let end = cursor.checked_add(count)?;
  let out = bytes.get(*cursor..end)?;
  *cursor = end;
  Some(out)
}

/// A fully parsed TIM2 file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tim2 {
  /// The 16 byte file header.
  pub header: FileHeader,

  /// Every picture in the file, in file order.
  pub pictures: Vec<Picture>,
}

impl Tim2 {
  /// Tries to parse a complete TIM2 file out of `bytes`.
  ///
  /// The walk is strictly sequential with no backtracking: file header,
  /// alignment gap, then exactly as many picture blocks as the header
  /// declares. Either every declared picture parses and you get them all,
  /// or the first failure aborts the whole parse; there's no partial
  /// picture list.
  ///
  /// A version byte other than [TIM2_VERSION] logs a warning and parsing
  /// continues, since files with unofficial version bytes are common and
  /// parse fine.
  pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, Tim2Error> {
    let (header, _) = FileHeader::try_from_bytes(bytes)?;
    let mut cursor = 16_usize;
    if !header.is_valid() {
      return Err(Tim2Error::InvalidSignature);
    }
    if header.version != TIM2_VERSION {
      log::warn!("unknown TIM2 format version: {:#04x}", header.version);
    }
    let unit = header.alignment();
    cursor = align_up(cursor, unit);

    let mut pictures = Vec::with_capacity(header.pictures as usize);
    for picture in 0..(header.pictures as usize) {
      let pic = parse_picture(bytes, &mut cursor, unit)
        .ok_or(Tim2Error::TruncatedPicture { picture })?;
      pictures.push(pic);
    }
    Ok(Self { header, pictures })
  }

  /// The picture at `index`, or `None` when the index is out of range.
  #[inline]
  #[must_use]
  pub fn picture(&self, index: usize) -> Option<&Picture> {
    self.pictures.get(index)
  }
}

/// Parses one picture block at the cursor; `None` means a short read.
fn parse_picture(bytes: &[u8], cursor: &mut usize, unit: usize) -> Option<Picture> {
  let head = read_exact(bytes, cursor, 48)?;
  let header = PictureHeader::from(<[u8; 48]>::try_from(head).unwrap());

  // Consumed header bytes so far; whatever the declared header size holds
  // beyond this is the user-space region.
  let mut consumed = 48_usize;

  let mip_map_header = if header.has_mip_maps() {
    let levels = header.mip_map_textures as usize;
    let padded = MipMapHeader::padded_byte_size(levels);
    let raw = read_exact(bytes, cursor, padded)?;
    let (mip, _) = MipMapHeader::try_from_bytes(raw, levels)?;
    consumed += padded;
    Some(mip)
  } else {
    None
  };

  let mut ext_header = None;
  let mut comment = None;
  let mut user_data = Vec::new();
  let header_size = header.header_size as usize;
  if header_size > consumed {
    let user_space = read_exact(bytes, cursor, header_size - consumed)?;
    if let Some(ext) = ExtendedHeader::try_from_user_space(user_space) {
      if let Some(comment_bytes) = ext.comment_bytes(user_space) {
        if let Ok(s) = core::str::from_utf8(comment_bytes) {
          comment = Some(String::from(s));
        }
      }
      ext_header = Some(ext);
    }
    user_data = Vec::from(user_space);
  }

  // Image data start is aligned. A declared size of 0 skips the read
  // entirely (reading 0 bytes is distinct from "absent").
  *cursor = align_up(*cursor, unit);
  let image_data = if header.image_size > 0 {
    Vec::from(read_exact(bytes, cursor, header.image_size as usize)?)
  } else {
    Vec::new()
  };

  // Same for the CLUT data.
  *cursor = align_up(*cursor, unit);
  let clut_data = if header.clut_size > 0 {
    Vec::from(read_exact(bytes, cursor, header.clut_size as usize)?)
  } else {
    Vec::new()
  };

  Some(Picture { header, mip_map_header, ext_header, comment, user_data, image_data, clut_data })
}
