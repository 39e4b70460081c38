//! The crate's error type.

/// An error from trying to parse TIM2 data.
///
/// Only *structural* problems are errors: a bad signature or a region that
/// declares more bytes than the input actually has. Decoding anomalies
/// (unknown pixel format codes, out-of-range palette indexes, out-of-range
/// mip levels) never error, they degrade to defined fallback values so that
/// a caller can always render *something* for a corrupt or exotic file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Tim2Error {
  /// The first four bytes were not `TIM2`.
  InvalidSignature,

  /// There weren't even 16 bytes for the file header.
  TruncatedHeader,

  /// A picture slot declared more bytes than the input held.
  ///
  /// The whole parse is abandoned when this happens, there's no partial
  /// picture list.
  TruncatedPicture {
    /// The 0-based index of the picture slot that was being parsed.
    picture: usize,
  },
}
