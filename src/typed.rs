//! Surfaces over [`rgb`] crate pixel slices.
//!
//! Each pixel type knows its own channel order and whether it carries
//! alpha, so the layout comes for free:
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use zenflip::{Surface, SurfaceMut, flip_vertical_into};
//!
//! let src = vec![Rgb::new(1u8, 2, 3), Rgb::new(4, 5, 6)];
//! let mut dst = vec![Bgra::default(); 2];
//! flip_vertical_into(
//!     &Surface::from_pixels(&src, 1, 2, 1).unwrap(),
//!     &mut SurfaceMut::from_pixels(&mut dst, 1, 2, 1).unwrap(),
//! );
//! assert_eq!(dst[0], Bgra { b: 6, g: 5, r: 4, a: 255 });
//! ```

use core::mem::size_of;

use bytemuck::Pod;
use rgb::{Bgr, Bgra, Rgb, Rgba};

use crate::{ChannelOrder, LayoutError, Sample, Surface, SurfaceLayout, SurfaceMut};

/// A pixel type whose memory layout matches a [`ChannelOrder`].
pub trait TypedPixel: Pod {
    type Sample: Sample;
    const ORDER: ChannelOrder;
    const HAS_ALPHA: bool;
}

impl<T: Sample> TypedPixel for Rgb<T> {
    type Sample = T;
    const ORDER: ChannelOrder = ChannelOrder::RGB;
    const HAS_ALPHA: bool = false;
}

impl<T: Sample> TypedPixel for Bgr<T> {
    type Sample = T;
    const ORDER: ChannelOrder = ChannelOrder::BGR;
    const HAS_ALPHA: bool = false;
}

impl<T: Sample> TypedPixel for Rgba<T> {
    type Sample = T;
    const ORDER: ChannelOrder = ChannelOrder::RGBA;
    const HAS_ALPHA: bool = true;
}

impl<T: Sample> TypedPixel for Bgra<T> {
    type Sample = T;
    const ORDER: ChannelOrder = ChannelOrder::BGRA;
    const HAS_ALPHA: bool = true;
}

/// Layout for `height` rows of `width` pixels, rows `stride` pixels apart.
fn pixel_layout<P: TypedPixel>(
    width: usize,
    height: usize,
    stride: usize,
) -> Result<SurfaceLayout, LayoutError> {
    let row_bytes = stride
        .checked_mul(size_of::<P>())
        .ok_or(LayoutError::InvalidStride)?;
    SurfaceLayout::new(width, height, row_bytes, P::ORDER, P::HAS_ALPHA)
}

impl<'a, T: Sample> Surface<'a, T> {
    /// View typed pixels as a surface. `stride` is in pixels.
    pub fn from_pixels<P: TypedPixel<Sample = T>>(
        pixels: &'a [P],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, LayoutError> {
        Self::new(bytemuck::cast_slice(pixels), pixel_layout::<P>(width, height, stride)?)
    }
}

impl<'a, T: Sample> SurfaceMut<'a, T> {
    /// View typed pixels as a mutable surface. `stride` is in pixels.
    pub fn from_pixels<P: TypedPixel<Sample = T>>(
        pixels: &'a mut [P],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, LayoutError> {
        let layout = pixel_layout::<P>(width, height, stride)?;
        Self::new(bytemuck::cast_slice_mut(pixels), layout)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use crate::{flip_vertical, flip_vertical_into};
    use alloc::vec;

    #[test]
    fn pixel_types_match_their_orders() {
        assert_eq!(<Rgb<u8>>::ORDER.pixel_inc(), size_of::<Rgb<u8>>());
        assert_eq!(<Bgra<u16>>::ORDER.pixel_inc() * 2, size_of::<Bgra<u16>>());
        assert_eq!(<Rgba<f32>>::ORDER.alpha(), Some(3));
        assert!(!<Bgr<u8>>::HAS_ALPHA);
    }

    #[test]
    fn rgba_to_bgra_with_stride() {
        // 2 wide, stride 3: one spare pixel per row.
        let src = vec![
            Rgba::new(1u8, 2, 3, 4),
            Rgba::new(5, 6, 7, 8),
            Rgba::new(0, 0, 0, 0),
            Rgba::new(9, 10, 11, 12),
            Rgba::new(13, 14, 15, 16),
        ];
        let mut dst = vec![Bgra::default(); 4];
        flip_vertical_into(
            &Surface::from_pixels(&src, 2, 2, 3).unwrap(),
            &mut SurfaceMut::from_pixels(&mut dst, 2, 2, 2).unwrap(),
        );
        assert_eq!(dst[0], Bgra { b: 11, g: 10, r: 9, a: 12 });
        assert_eq!(dst[3], Bgra { b: 7, g: 6, r: 5, a: 8 });
    }

    #[test]
    fn bgr_u16_gains_alpha() {
        let src = vec![Bgr { b: 1u16, g: 2, r: 3 }, Bgr { b: 4, g: 5, r: 6 }];
        let mut dst = vec![Rgba::new(0u16, 0, 0, 0); 2];
        flip_vertical_into(
            &Surface::from_pixels(&src, 1, 2, 1).unwrap(),
            &mut SurfaceMut::from_pixels(&mut dst, 1, 2, 1).unwrap(),
        );
        assert_eq!(dst, [Rgba::new(6, 5, 4, u16::MAX), Rgba::new(3, 2, 1, u16::MAX)]);
    }

    #[test]
    fn inplace_rgb_f32() {
        let mut px = vec![Rgb::new(0.0f32, 0.1, 0.2), Rgb::new(0.3, 0.4, 0.5)];
        flip_vertical(&mut SurfaceMut::from_pixels(&mut px, 1, 2, 1).unwrap());
        assert_eq!(px, [Rgb::new(0.3, 0.4, 0.5), Rgb::new(0.0, 0.1, 0.2)]);
    }

    #[test]
    fn stride_narrower_than_width_is_rejected() {
        let px = vec![Rgb::new(0u8, 0, 0); 8];
        assert_eq!(
            Surface::from_pixels(&px, 4, 2, 3).unwrap_err(),
            LayoutError::InvalidStride
        );
    }
}
