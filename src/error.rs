use core::fmt;

/// A channel order or surface description that cannot be flipped safely.
///
/// Only constructors return this. Once a [`Surface`](crate::Surface) or
/// [`SurfaceMut`](crate::SurfaceMut) exists, every flip over it succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LayoutError {
    /// Channel offsets overlap, exceed the pixel stride, or the pixel
    /// stride is not 3 or 4.
    InvalidChannelOrder,
    /// The surface claims an alpha channel its channel order cannot hold.
    MissingAlphaChannel,
    /// Row stride is not a whole number of samples, is shorter than one
    /// row of pixels, or the geometry overflows `usize`.
    InvalidStride,
    /// The buffer does not cover `height` rows at the declared stride.
    BufferTooSmall,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannelOrder => f.write_str("invalid channel order"),
            Self::MissingAlphaChannel => {
                f.write_str("alpha requested but channel order has no 4-slot alpha")
            }
            Self::InvalidStride => f.write_str("invalid row stride for surface width"),
            Self::BufferTooSmall => f.write_str("buffer too small for surface dimensions"),
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages_are_stable() {
        assert!(LayoutError::InvalidChannelOrder.to_string().contains("channel order"));
        assert!(LayoutError::MissingAlphaChannel.to_string().contains("alpha"));
        assert!(LayoutError::InvalidStride.to_string().contains("stride"));
        assert!(LayoutError::BufferTooSmall.to_string().contains("too small"));
    }
}
