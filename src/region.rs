//! Integer rectangles and source/destination clipping.
//!
//! [`clipped_src_dst`] is the one place that decides how many pixels a
//! cross-surface operation may touch. Every loop in the flip engine is
//! bounded by the area it returns.
//!
//! ```text
//! (0,0) ────────► X
//!   │   ┌──────────┐
//!   │   │  src  ┌──┼──────┐
//!   │   │       │##│ dst  │   ## = returned area
//!   │   └───────┼──┘      │
//!   │           └─────────┘
//!   ▼ Y
//! ```

/// Half-open integer rectangle `[x1, x2) × [y1, y2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Area {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Area {
    /// Build an area from two corners, in any order.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Area anchored at the origin.
    pub fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Width and height as unsigned extents.
    pub fn size(&self) -> (usize, usize) {
        (self.width().max(0) as usize, self.height().max(0) as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Upper-left corner.
    #[inline]
    pub fn ul(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    /// Clamp both corners into `clip`. The result may be empty but never inverted.
    pub fn clipped_by(&self, clip: &Area) -> Self {
        Self {
            x1: self.x1.max(clip.x1).min(clip.x2),
            y1: self.y1.max(clip.y1).min(clip.y2),
            x2: self.x2.max(clip.x1).min(clip.x2),
            y2: self.y2.max(clip.y1).min(clip.y2),
        }
    }

    /// Translate so the upper-left corner lands on `ul`, keeping the size.
    pub fn moved_ul_to(&self, ul: (i32, i32)) -> Self {
        Self {
            x1: ul.0,
            y1: ul.1,
            x2: ul.0 + self.width(),
            y2: ul.1 + self.height(),
        }
    }
}

/// Clip a copy of `src_area` (inside a surface with `src_bounds`) to a
/// destination surface with `dst_bounds`, placed with its upper-left at `dst_lt`.
///
/// Returns the source area that survives clipping on both sides, and the
/// destination upper-left it maps to. The returned area always lies inside
/// `src_bounds`, and the same area moved to the returned corner always lies
/// inside `dst_bounds`.
pub fn clipped_src_dst(
    src_bounds: Area,
    src_area: Area,
    dst_bounds: Area,
    dst_lt: (i32, i32),
) -> (Area, (i32, i32)) {
    let clipped_src = src_area.clipped_by(&src_bounds);
    let src_ul = clipped_src.ul();
    let dst_ul = (
        dst_lt.0 + (src_ul.0 - src_area.x1),
        dst_lt.1 + (src_ul.1 - src_area.y1),
    );

    let in_dst = clipped_src.moved_ul_to(dst_ul);
    let clipped_dst = in_dst.clipped_by(&dst_bounds);
    let new_dst_ul = clipped_dst.ul();

    let back_in_src = clipped_dst.moved_ul_to((
        src_ul.0 + (new_dst_ul.0 - in_dst.x1),
        src_ul.1 + (new_dst_ul.1 - in_dst.y1),
    ));
    (back_in_src.clipped_by(&src_bounds), new_dst_ul)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let a = Area::new(10, 8, 2, 4);
        assert_eq!(a, Area { x1: 2, y1: 4, x2: 10, y2: 8 });
        assert_eq!(a.size(), (8, 4));
    }

    #[test]
    fn clip_never_inverts() {
        let a = Area::new(50, 50, 60, 60);
        let clip = Area::from_size(10, 10);
        let c = a.clipped_by(&clip);
        assert!(c.is_empty());
        assert!(c.width() >= 0 && c.height() >= 0);
    }

    #[test]
    fn same_size_surfaces() {
        let b = Area::from_size(16, 9);
        let (area, lt) = clipped_src_dst(b, b, b, (0, 0));
        assert_eq!(area, b);
        assert_eq!(lt, (0, 0));
    }

    #[test]
    fn smaller_destination() {
        let src = Area::from_size(20, 10);
        let dst = Area::from_size(8, 4);
        let (area, lt) = clipped_src_dst(src, src, dst, (0, 0));
        assert_eq!(area.size(), (8, 4));
        assert_eq!(area.ul(), (0, 0));
        assert_eq!(lt, (0, 0));
    }

    #[test]
    fn larger_destination() {
        let src = Area::from_size(3, 2);
        let dst = Area::from_size(30, 20);
        let (area, _) = clipped_src_dst(src, src, dst, (0, 0));
        assert_eq!(area, src);
    }

    #[test]
    fn negative_destination_offset() {
        let src = Area::from_size(10, 10);
        let dst = Area::from_size(10, 10);
        let (area, lt) = clipped_src_dst(src, src, dst, (-3, -4));
        // The first 3 columns and 4 rows fall off the destination.
        assert_eq!(area, Area::new(3, 4, 10, 10));
        assert_eq!(lt, (0, 0));
    }

    #[test]
    fn source_area_outside_source() {
        let src = Area::from_size(10, 10);
        let dst = Area::from_size(10, 10);
        let (area, lt) = clipped_src_dst(src, Area::new(-5, -5, 5, 5), dst, (0, 0));
        assert_eq!(area, Area::new(0, 0, 5, 5));
        assert_eq!(lt, (5, 5));
    }

    #[test]
    fn disjoint_is_empty() {
        let src = Area::from_size(10, 10);
        let dst = Area::from_size(10, 10);
        let (area, _) = clipped_src_dst(src, src, dst, (40, 0));
        assert!(area.is_empty());
        assert_eq!(area.size().0, 0);
    }
}
