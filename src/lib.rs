#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for decoding TIM2 image data.
//!
//! TIM2 (file extensions `.tm2` and `.tim2`) is the standard texture
//! container of the PlayStation 2. A single file can hold any number of
//! "pictures", and each picture carries its own pixel data, an optional
//! mipmap chain, an optional color lookup table (CLUT), and an optional
//! block of user metadata.
//!
//! ## Parsing The Format
//!
//! Note: All multi-byte values in TIM2 are always little-endian encoded.
//!
//! * A TIM2 file always starts with a 16 byte [FileHeader]. The first four
//!   bytes must be `TIM2`. The header also declares an alignment mode:
//!   every picture block, image data region, and CLUT data region begins on
//!   a 16 byte boundary (mode 0) or a 128 byte boundary (mode 1).
//! * Each picture starts with a fixed 48 byte [PictureHeader] giving the
//!   region sizes, the pixel formats of the image and CLUT data, the
//!   dimensions, and four raw GS register words that the format preserves
//!   for the console's texture unit.
//! * Next there **might** be a [MipMapHeader]. It's present exactly when
//!   the picture declares more than one mipmap level, and it lists the byte
//!   length of every level.
//! * Next there **might** be a "user space" region, when the declared
//!   header size is bigger than the headers actually read so far. If the
//!   region starts with the `eXt\0` tag it's an [ExtendedHeader] and can
//!   carry a null-terminated comment string; otherwise the region is plain
//!   opaque bytes.
//! * Next, after re-aligning, is the raw image data (possibly 0 bytes for a
//!   CLUT-only picture).
//! * Finally, after re-aligning again, is the raw CLUT data (possibly 0
//!   bytes for a true-color picture).
//!
//! Image data is stored at 32, 24, or 16 bits per pixel of direct color, or
//! as 8 or 4 bit indexes into the CLUT. Decoding any of these to RGBA is
//! handled by [Picture::decode_image].

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub use pixel_formats::r8g8b8a8_Srgb;

pub mod ascii_array;
pub use ascii_array::*;

mod parser_helpers;
pub use parser_helpers::{align_up, is_aligned};
pub(crate) use parser_helpers::*;

pub mod error;
pub use error::*;

pub mod file_header;
pub use file_header::*;

pub mod picture_header;
pub use picture_header::*;

#[cfg(feature = "alloc")]
pub mod mip_map_header;
#[cfg(feature = "alloc")]
pub use mip_map_header::*;

pub mod ext_header;
pub use ext_header::*;

pub mod gs_registers;
pub use gs_registers::*;

#[cfg(feature = "alloc")]
pub mod picture;
#[cfg(feature = "alloc")]
pub use picture::*;

#[cfg(feature = "alloc")]
pub mod parser;
#[cfg(feature = "alloc")]
pub use parser::*;
