//! Whole-image flips using [`imgref`] types.
//!
//! Strided images map straight onto surfaces. No allocation, the caller
//! owns every buffer.
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use imgref::{ImgRef, ImgRefMut};
//! use zenflip::img;
//!
//! let src = vec![Rgb::new(1u8, 2, 3), Rgb::new(4, 5, 6)];
//! let mut dst = vec![Bgra::default(); 2];
//! img::flip_vertical_into(ImgRef::new(&src, 1, 2), ImgRefMut::new(&mut dst, 1, 2)).unwrap();
//! assert_eq!(dst[1], Bgra { b: 3, g: 2, r: 1, a: 255 });
//! ```

use imgref::{ImgRef, ImgRefMut};

use crate::typed::TypedPixel;
use crate::{LayoutError, Surface, SurfaceMut};

/// Flip an image in place.
///
/// Fails only if a dimension exceeds `i32::MAX`.
pub fn flip_vertical<P: TypedPixel>(mut img: ImgRefMut<'_, P>) -> Result<(), LayoutError> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    let buf: &mut [P] = img.buf_mut();
    crate::flip_vertical(&mut SurfaceMut::from_pixels(buf, w, h, stride)?);
    Ok(())
}

/// Flip `src` into `dst`, converting pixel type on the way.
///
/// Images of different sizes are clipped to their shared top-left region.
pub fn flip_vertical_into<S, D>(
    src: ImgRef<'_, S>,
    mut dst: ImgRefMut<'_, D>,
) -> Result<(), LayoutError>
where
    S: TypedPixel,
    D: TypedPixel<Sample = S::Sample>,
{
    let s: &[S] = src.buf();
    let src = Surface::from_pixels(s, src.width(), src.height(), src.stride())?;
    let (w, h, stride) = (dst.width(), dst.height(), dst.stride());
    let d: &mut [D] = dst.buf_mut();
    crate::flip_vertical_into(&src, &mut SurfaceMut::from_pixels(d, w, h, stride)?);
    Ok(())
}
