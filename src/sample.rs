//! Numeric sample types a surface can hold.

use core::fmt::Debug;

use bytemuck::Pod;

use crate::flip::scalar;
use crate::{Surface, SurfaceMut};

/// One channel value of a pixel.
///
/// Implemented for `u8`, `u16` and `f32`. [`MAX`](Sample::MAX) is the
/// fully-opaque alpha written when a destination has alpha and its source
/// does not.
///
/// The row hooks let a sample type replace the portable per-pixel loops
/// with something faster. Overrides must produce identical output.
pub trait Sample: Pod + PartialEq + Debug + Send + Sync + 'static {
    /// Fully opaque alpha.
    const MAX: Self;

    /// Four-channel remap of the top-left `width × height` pixels, rows reversed.
    ///
    /// Offsets are `[red, green, blue, alpha]`; both pixel strides are 4.
    #[doc(hidden)]
    fn flip_rgba_rows(
        src: &Surface<'_, Self>,
        src_off: [usize; 4],
        dst: &mut SurfaceMut<'_, Self>,
        dst_off: [usize; 4],
        width: usize,
        height: usize,
    ) {
        scalar::flip_rgba_rows(src, src_off, dst, dst_off, width, height);
    }

    /// RGB copy with alpha synthesis, rows reversed. The destination stride is 4.
    #[doc(hidden)]
    fn flip_rgb_full_alpha_rows(
        src: &Surface<'_, Self>,
        src_off: [usize; 3],
        dst: &mut SurfaceMut<'_, Self>,
        dst_off: [usize; 4],
        width: usize,
        height: usize,
    ) {
        scalar::flip_rgb_full_alpha_rows(src, src_off, dst, dst_off, width, height, Self::MAX);
    }
}

impl Sample for u8 {
    const MAX: Self = u8::MAX;

    fn flip_rgba_rows(
        src: &Surface<'_, Self>,
        src_off: [usize; 4],
        dst: &mut SurfaceMut<'_, Self>,
        dst_off: [usize; 4],
        width: usize,
        height: usize,
    ) {
        crate::flip::flip_rgba_rows_u8(src, src_off, dst, dst_off, width, height);
    }

    fn flip_rgb_full_alpha_rows(
        src: &Surface<'_, Self>,
        src_off: [usize; 3],
        dst: &mut SurfaceMut<'_, Self>,
        dst_off: [usize; 4],
        width: usize,
        height: usize,
    ) {
        crate::flip::flip_rgb_full_alpha_rows_u8(src, src_off, dst, dst_off, width, height);
    }
}

impl Sample for u16 {
    const MAX: Self = u16::MAX;
}

/// Float samples are normalized, so opaque is `1.0` rather than `f32::MAX`.
impl Sample for f32 {
    const MAX: Self = 1.0;
}
