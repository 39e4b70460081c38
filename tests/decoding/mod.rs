use tim2::{r8g8b8a8_Srgb, Tim2};

use super::{file_header, pad_to, picture_header, simple_file, PicParams};

fn rgba(r: u8, g: u8, b: u8, a: u8) -> r8g8b8a8_Srgb {
  r8g8b8a8_Srgb { r, g, b, a }
}

/// A single-level indexed picture with a CLUT, 16 byte alignment.
fn indexed_file(
  image_type: u8, clut_type: u8, clut_colors: u16, width: u16, height: u16, image: &[u8],
  clut: &[u8],
) -> Vec<u8> {
  let mut v = file_header(0x04, 0x00, 1);
  pad_to(&mut v, 16);
  v.extend_from_slice(&picture_header(&PicParams {
    clut_size: clut.len() as u32,
    image_size: image.len() as u32,
    header_size: 48,
    clut_colors,
    mip_map_textures: 1,
    clut_type,
    image_type,
    width,
    height,
    ..Default::default()
  }));
  pad_to(&mut v, 16);
  v.extend_from_slice(image);
  pad_to(&mut v, 16);
  v.extend_from_slice(clut);
  v
}

#[test]
fn rgb32_2x2_round_trip() {
  #[rustfmt::skip]
  let v = simple_file(0x03, 2, 2, &[
    0xFF, 0x00, 0x00, 0xFF,
    0x00, 0xFF, 0x00, 0xFF,
    0x00, 0x00, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF,
  ]);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(
    px,
    vec![
      rgba(0xFF, 0, 0, 0xFF),
      rgba(0, 0xFF, 0, 0xFF),
      rgba(0, 0, 0xFF, 0xFF),
      rgba(0xFF, 0xFF, 0xFF, 0xFF),
    ]
  );
}

#[test]
fn rgb24_is_always_opaque() {
  let v = simple_file(0x02, 2, 1, &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60]);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(px, vec![rgba(0x10, 0x20, 0x30, 0xFF), rgba(0x40, 0x50, 0x60, 0xFF)]);
}

#[test]
fn rgb16_channels_and_alpha_bit() {
  // 0x801F: full red, alpha bit set. 0x03E0: full green, alpha bit clear.
  let v = simple_file(0x01, 2, 1, &[0x1F, 0x80, 0xE0, 0x03]);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(px, vec![rgba(0xFF, 0, 0, 0xFF), rgba(0, 0xFF, 0, 0x00)]);
}

#[test]
fn out_of_range_mip_level_is_empty_not_an_error() {
  let v = simple_file(0x03, 1, 1, &[1, 2, 3, 4]);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let pic = t.picture(0).unwrap();
  assert_eq!(pic.header.mip_map_textures, 1);
  assert!(pic.decode_image(1).is_empty());
  assert_eq!(pic.decode_image(0).len(), 1);
}

#[test]
fn unknown_pixel_format_degrades_to_transparent_black() {
  let v = simple_file(0x3F, 2, 1, &[0xAB, 0xCD]);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(px, vec![rgba(0, 0, 0, 0); 2]);
}

#[test]
fn idtex8_looks_up_the_clut() {
  // 4 RGB32 entries; image selects them back to front.
  let clut = [
    0x11, 0x11, 0x11, 0xFF, //
    0x22, 0x22, 0x22, 0xFF, //
    0x33, 0x33, 0x33, 0xFF, //
    0x44, 0x44, 0x44, 0xFF,
  ];
  let v = indexed_file(0x05, 0x03, 4, 4, 1, &[3, 2, 1, 0], &clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(
    px,
    vec![
      rgba(0x44, 0x44, 0x44, 0xFF),
      rgba(0x33, 0x33, 0x33, 0xFF),
      rgba(0x22, 0x22, 0x22, 0xFF),
      rgba(0x11, 0x11, 0x11, 0xFF),
    ]
  );
}

#[test]
fn idtex8_out_of_range_index_is_transparent_black() {
  // palette holds 4 entries, the single pixel asks for entry 5.
  let clut = [0xFF_u8; 16];
  let v = indexed_file(0x05, 0x03, 4, 1, 1, &[5], &clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(px, vec![rgba(0, 0, 0, 0)]);
}

#[test]
fn idtex4_even_pixel_takes_the_low_nibble() {
  let clut = [
    0x0A, 0x00, 0x00, 0xFF, //
    0x0B, 0x00, 0x00, 0xFF, //
    0x0C, 0x00, 0x00, 0xFF,
  ];
  // one byte, two pixels: 0x21 is index 1 (even, low nibble) then index 2.
  let v = indexed_file(0x04, 0x03, 3, 2, 1, &[0x21], &clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let px = t.picture(0).unwrap().decode_image(0);
  assert_eq!(px, vec![rgba(0x0B, 0, 0, 0xFF), rgba(0x0C, 0, 0, 0xFF)]);
}

#[test]
fn clut_colors_match_declared_count() {
  let clut = [
    0x10, 0x11, 0x12, 0x13, //
    0x20, 0x21, 0x22, 0x23,
  ];
  let v = indexed_file(0x05, 0x03, 2, 1, 1, &[0], &clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let colors = t.picture(0).unwrap().clut_colors();
  assert_eq!(colors, vec![rgba(0x10, 0x11, 0x12, 0x13), rgba(0x20, 0x21, 0x22, 0x23)]);
}

#[test]
fn no_clut_means_no_colors() {
  let v = simple_file(0x03, 1, 1, &[1, 2, 3, 4]);
  let t = Tim2::try_from_bytes(&v).unwrap();
  assert!(t.picture(0).unwrap().clut_colors().is_empty());
}

#[test]
fn csm1_compound_mode_shuffles_entry_blocks() {
  // 32 RGB32 entries whose red channel records their storage position.
  let mut clut = Vec::new();
  for i in 0..32_u8 {
    clut.extend_from_slice(&[i, 0, 0, 0xFF]);
  }
  // CSM1 + compound flag + RGB32 entries.
  let v = indexed_file(0x05, 0x40 | 0x03, 32, 1, 1, &[0], &clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let colors = t.picture(0).unwrap().clut_colors();
  // entries 8..16 come from storage 16..24 and vice versa.
  for i in 0..32_usize {
    let expect = match i {
      8..=15 => i + 8,
      16..=23 => i - 8,
      _ => i,
    };
    assert_eq!(colors[i].r as usize, expect, "entry {i}");
  }
}

#[test]
fn csm2_mode_never_shuffles() {
  let mut clut = Vec::new();
  for i in 0..32_u8 {
    clut.extend_from_slice(&[i, 0, 0, 0xFF]);
  }
  // CSM2 bit set; the compound flag is ignored in this mode.
  let v = indexed_file(0x05, 0x80 | 0x40 | 0x03, 32, 1, 1, &[0], &clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let colors = t.picture(0).unwrap().clut_colors();
  for (i, c) in colors.iter().enumerate() {
    assert_eq!(c.r as usize, i, "entry {i}");
  }
}

#[test]
fn clut_only_picture_decodes_its_palette() {
  // imageSize of 0 is legal: the picture is just a carrier for its CLUT.
  let clut = [0xAA, 0xBB, 0xCC, 0xDD];
  let mut v = file_header(0x04, 0x00, 1);
  pad_to(&mut v, 16);
  v.extend_from_slice(&picture_header(&PicParams {
    clut_size: 4,
    header_size: 48,
    clut_colors: 1,
    mip_map_textures: 1,
    clut_type: 0x03,
    image_type: 0x00,
    width: 1,
    height: 1,
    ..Default::default()
  }));
  pad_to(&mut v, 16);
  v.extend_from_slice(&clut);
  let t = Tim2::try_from_bytes(&v).unwrap();
  let pic = t.picture(0).unwrap();
  assert!(pic.image_data.is_empty());
  assert_eq!(pic.clut_colors(), vec![rgba(0xAA, 0xBB, 0xCC, 0xDD)]);
  // image format None decodes to transparent filler, not a panic.
  assert_eq!(pic.decode_image(0), vec![rgba(0, 0, 0, 0)]);
}

#[test]
fn mip_level_1_reads_past_level_0() {
  // 2x2 RGB32 base plus a 1x1 level 1. Level sizes 16 and 4, mip header is
  // 16 + 2*4 = 24 bytes padded to 32, headerSize 48 + 32 = 80.
  let mut v = file_header(0x04, 0x00, 1);
  pad_to(&mut v, 16);
  v.extend_from_slice(&picture_header(&PicParams {
    image_size: 20,
    header_size: 80,
    mip_map_textures: 2,
    image_type: 0x03,
    width: 2,
    height: 2,
    ..Default::default()
  }));
  v.extend_from_slice(&[0_u8; 16]); // miptbp1 + miptbp2
  v.extend_from_slice(&16_u32.to_le_bytes());
  v.extend_from_slice(&4_u32.to_le_bytes());
  pad_to(&mut v, 16);
  v.extend_from_slice(&[0x55; 16]); // level 0: four gray pixels
  v.extend_from_slice(&[0x10, 0x20, 0x30, 0x40]); // level 1: one pixel
  let t = Tim2::try_from_bytes(&v).unwrap();
  let pic = t.picture(0).unwrap();
  assert_eq!(pic.decode_image(0), vec![rgba(0x55, 0x55, 0x55, 0x55); 4]);
  assert_eq!(pic.decode_image(1), vec![rgba(0x10, 0x20, 0x30, 0x40)]);
}
