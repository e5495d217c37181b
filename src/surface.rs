//! Borrowed surface views over caller-owned sample buffers.
//!
//! A surface never owns its pixels. [`Surface`] wraps `&[T]`, [`SurfaceMut`]
//! wraps `&mut [T]`, and both carry a validated [`SurfaceLayout`]. After
//! construction every row is guaranteed to lie inside the buffer.
//!
//! ```rust
//! use zenflip::{ChannelOrder, Surface, SurfaceLayout};
//!
//! // 3×2 BGR image, each row padded to 12 bytes.
//! let buf = vec![0u8; 12 + 9];
//! let layout = SurfaceLayout::new(3, 2, 12, ChannelOrder::BGR, false).unwrap();
//! let surface = Surface::new(&buf, layout).unwrap();
//! assert_eq!(surface.row(1).len(), 9);
//! ```

use core::mem::size_of;

use crate::region::Area;
use crate::{ChannelOrder, LayoutError, Sample};

/// Geometry and channel layout of a surface, independent of its buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceLayout {
    width: usize,
    height: usize,
    row_bytes: usize,
    order: ChannelOrder,
    has_alpha: bool,
}

impl SurfaceLayout {
    /// `row_bytes` is the distance between row starts in bytes, padding included.
    ///
    /// Fails if `has_alpha` is set on an order with no alpha slot, or if the
    /// dimensions do not fit the `i32` coordinate space used for clipping.
    pub fn new(
        width: usize,
        height: usize,
        row_bytes: usize,
        order: ChannelOrder,
        has_alpha: bool,
    ) -> Result<Self, LayoutError> {
        if has_alpha && order.alpha().is_none() {
            log::debug!("rejecting surface: alpha requested for {order:?}");
            return Err(LayoutError::MissingAlphaChannel);
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(LayoutError::InvalidStride);
        }
        Ok(Self {
            width,
            height,
            row_bytes,
            order,
            has_alpha,
        })
    }

    /// Layout with no row padding for samples of type `T`.
    pub fn packed<T: Sample>(
        width: usize,
        height: usize,
        order: ChannelOrder,
        has_alpha: bool,
    ) -> Result<Self, LayoutError> {
        let row_bytes = width
            .checked_mul(order.pixel_inc())
            .and_then(|n| n.checked_mul(size_of::<T>()))
            .ok_or(LayoutError::InvalidStride)?;
        Self::new(width, height, row_bytes, order, has_alpha)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Full bounds, anchored at the origin.
    pub fn bounds(&self) -> Area {
        // Both fit in i32, checked in `new`.
        Area::from_size(self.width as i32, self.height as i32)
    }

    /// Samples occupied by the pixels of one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width * self.order.pixel_inc()
    }

    /// Check a buffer of `len` samples of `T` against this layout and
    /// return the row stride in samples.
    fn check_buffer<T>(&self, len: usize) -> Result<usize, LayoutError> {
        let sample = size_of::<T>();
        if !self.row_bytes.is_multiple_of(sample) {
            return Err(LayoutError::InvalidStride);
        }
        let stride = self.row_bytes / sample;
        let row_len = self
            .width
            .checked_mul(self.order.pixel_inc())
            .ok_or(LayoutError::InvalidStride)?;
        if row_len > stride {
            return Err(LayoutError::InvalidStride);
        }
        if self.width > 0 && self.height > 0 {
            let total = (self.height - 1)
                .checked_mul(stride)
                .ok_or(LayoutError::InvalidStride)?
                .checked_add(row_len)
                .ok_or(LayoutError::InvalidStride)?;
            if len < total {
                log::debug!("rejecting surface: {len} samples, need {total}");
                return Err(LayoutError::BufferTooSmall);
            }
        }
        Ok(stride)
    }
}

/// Read-only surface.
#[derive(Clone, Copy, Debug)]
pub struct Surface<'a, T> {
    data: &'a [T],
    layout: SurfaceLayout,
    stride: usize,
}

impl<'a, T: Sample> Surface<'a, T> {
    pub fn new(data: &'a [T], layout: SurfaceLayout) -> Result<Self, LayoutError> {
        let stride = layout.check_buffer::<T>(data.len())?;
        Ok(Self {
            data,
            layout,
            stride,
        })
    }

    #[inline]
    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.layout.order
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.layout.has_alpha
    }

    #[inline]
    pub fn bounds(&self) -> Area {
        self.layout.bounds()
    }

    /// Row stride in samples.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The underlying buffer, padding included.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Pixel samples of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.layout.height, "row {y} out of bounds");
        let len = self.layout.row_len();
        if len == 0 {
            return &[];
        }
        &self.data[y * self.stride..][..len]
    }
}

/// Mutable surface.
#[derive(Debug)]
pub struct SurfaceMut<'a, T> {
    data: &'a mut [T],
    layout: SurfaceLayout,
    stride: usize,
}

impl<'a, T: Sample> SurfaceMut<'a, T> {
    pub fn new(data: &'a mut [T], layout: SurfaceLayout) -> Result<Self, LayoutError> {
        let stride = layout.check_buffer::<T>(data.len())?;
        Ok(Self {
            data,
            layout,
            stride,
        })
    }

    /// Reborrow as a read-only view.
    pub fn as_surface(&self) -> Surface<'_, T> {
        Surface {
            data: &*self.data,
            layout: self.layout,
            stride: self.stride,
        }
    }

    #[inline]
    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.layout.order
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.layout.has_alpha
    }

    #[inline]
    pub fn bounds(&self) -> Area {
        self.layout.bounds()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Pixel samples of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.layout.height, "row {y} out of bounds");
        let len = self.layout.row_len();
        if len == 0 {
            return &[];
        }
        &self.data[y * self.stride..][..len]
    }

    /// Mutable pixel samples of row `y`, without padding.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.layout.height, "row {y} out of bounds");
        let len = self.layout.row_len();
        if len == 0 {
            return &mut [];
        }
        &mut self.data[y * self.stride..][..len]
    }

    /// Swap rows `a` and `b`, padding included.
    ///
    /// A trimmed last row has no full stride in the buffer; that pair swaps
    /// only the pixel samples.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        let (top, bottom) = if a < b { (a, b) } else { (b, a) };
        let row_len = self.layout.row_len();
        if top == bottom || row_len == 0 {
            return;
        }
        let (head, tail) = self.data.split_at_mut(bottom * self.stride);
        let len = if tail.len() >= self.stride {
            self.stride
        } else {
            row_len
        };
        head[top * self.stride..][..len].swap_with_slice(&mut tail[..len]);
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    #[test]
    fn packed_layout_strides() {
        let l = SurfaceLayout::packed::<u16>(5, 2, ChannelOrder::RGBA, true).unwrap();
        assert_eq!(l.row_bytes(), 5 * 4 * 2);
        let buf = vec![0u16; 40];
        let s = Surface::new(&buf, l).unwrap();
        assert_eq!(s.stride(), 20);
        assert_eq!(s.row(1).len(), 20);
    }

    #[test]
    fn rejects_alpha_without_slot() {
        assert_eq!(
            SurfaceLayout::new(1, 1, 3, ChannelOrder::RGB, true),
            Err(LayoutError::MissingAlphaChannel)
        );
        let xrgb = ChannelOrder::new(1, 2, 3, None, 4).unwrap();
        assert_eq!(
            SurfaceLayout::new(1, 1, 4, xrgb, true),
            Err(LayoutError::MissingAlphaChannel)
        );
    }

    #[test]
    fn rejects_bad_strides() {
        let buf = vec![0u16; 64];
        // not a whole number of u16 samples
        let l = SurfaceLayout::new(2, 2, 17, ChannelOrder::RGBA, true).unwrap();
        assert_eq!(Surface::new(&buf, l).unwrap_err(), LayoutError::InvalidStride);
        // shorter than one row
        let l = SurfaceLayout::new(4, 2, 8, ChannelOrder::RGBA, true).unwrap();
        assert_eq!(Surface::new(&buf, l).unwrap_err(), LayoutError::InvalidStride);
    }

    #[test]
    fn rejects_short_buffers() {
        let l = SurfaceLayout::new(2, 3, 10, ChannelOrder::RGBA, true).unwrap();
        // needs 2 * 10 + 8 = 28 bytes
        let mut buf = vec![0u8; 27];
        assert_eq!(SurfaceMut::new(&mut buf, l).unwrap_err(), LayoutError::BufferTooSmall);
        let buf = vec![0u8; 28];
        assert!(Surface::new(&buf, l).is_ok());
    }

    #[test]
    fn degenerate_layouts_accept_empty_buffers() {
        let l = SurfaceLayout::new(0, 5, 0, ChannelOrder::BGR, false).unwrap();
        let s = Surface::new(&[0u8; 0][..], l).unwrap();
        assert!(s.row(4).is_empty());
        let l = SurfaceLayout::new(7, 0, 21, ChannelOrder::BGR, false).unwrap();
        assert!(Surface::new(&[0u8; 0][..], l).is_ok());
    }

    #[test]
    fn swap_rows_moves_padding() {
        // 1 pixel RGB rows, stride 4 (1 byte padding)
        let mut buf = vec![1u8, 2, 3, 0xAA, 4, 5, 6, 0xBB];
        let l = SurfaceLayout::new(1, 2, 4, ChannelOrder::RGB, false).unwrap();
        let mut s = SurfaceMut::new(&mut buf, l).unwrap();
        s.swap_rows(1, 0);
        assert_eq!(buf, [4, 5, 6, 0xBB, 1, 2, 3, 0xAA]);
    }

    #[test]
    fn swap_rows_trimmed_last_row() {
        let mut buf = vec![1u8, 2, 3, 0xAA, 4, 5, 6];
        let l = SurfaceLayout::new(1, 2, 4, ChannelOrder::RGB, false).unwrap();
        let mut s = SurfaceMut::new(&mut buf, l).unwrap();
        s.swap_rows(0, 1);
        assert_eq!(buf, [4, 5, 6, 0xAA, 1, 2, 3]);
    }
}
