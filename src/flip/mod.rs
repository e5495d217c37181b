// ---------------------------------------------------------------------------
// Vertical flips: in place, and across surfaces with channel remapping.
//
// Architecture: the dispatcher picks one of four strategies from the two
// surface layouts. Per-pixel strategies go through `Sample` hooks; `u8`
// routes them to #[rite] row kernels behind incant!, one dispatch per
// region, rows looped inside the #[arcane] wrapper.
// ---------------------------------------------------------------------------

use archmage::incant;

use crate::region::clipped_src_dst;
use crate::{Sample, Surface, SurfaceLayout, SurfaceMut};

pub(crate) mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;


// ===========================================================================
// Strategy selection
// ===========================================================================

/// How a cross-surface flip moves pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Identical channel order: raw row copies.
    SameChannelOrder,
    /// Both surfaces carry alpha: remap all four channels.
    Rgba,
    /// Only the destination carries alpha: remap RGB, alpha = [`Sample::MAX`].
    RgbFullAlpha,
    /// Remap RGB only; alpha and padding slots are never written.
    Rgb,
}

impl Strategy {
    /// Pick the strategy for a `src` → `dst` flip.
    ///
    /// Checked in order: equal channel orders win even when the alpha
    /// flags differ, then both-alpha, then destination-only alpha.
    pub fn select(src: &SurfaceLayout, dst: &SurfaceLayout) -> Self {
        if dst.order() == src.order() {
            Self::SameChannelOrder
        } else if dst.has_alpha() && src.has_alpha() {
            Self::Rgba
        } else if dst.has_alpha() {
            Self::RgbFullAlpha
        } else {
            Self::Rgb
        }
    }

    /// Run this strategy over the top-left `size` pixels.
    pub fn run<T: Sample>(
        self,
        src: &Surface<'_, T>,
        dst: &mut SurfaceMut<'_, T>,
        size: (usize, usize),
    ) {
        match self {
            Self::SameChannelOrder => flip_same_channel_order(src, dst, size),
            Self::Rgba => flip_rgba(src, dst, size),
            Self::RgbFullAlpha => flip_rgb_full_alpha(src, dst, size),
            Self::Rgb => flip_rgb(src, dst, size),
        }
    }
}

// ===========================================================================
// Public API
// ===========================================================================

/// Reverse the row order of `surface` in place.
///
/// Whole rows move, padding included, so new row `y` is byte-for-byte old
/// row `height - 1 - y`. A trimmed last row swaps only its pixels. The
/// middle row of an odd height is untouched. Empty surfaces are a no-op.
pub fn flip_vertical<T: Sample>(surface: &mut SurfaceMut<'_, T>) {
    let height = surface.height();
    if height < 2 || surface.width() == 0 {
        return;
    }
    let last = height - 1;
    for y in 0..height / 2 {
        surface.swap_rows(y, last - y);
    }
}

/// Copy `src` into `dst` upside down, converting channel order on the way.
///
/// Only the overlap of the two surfaces (both anchored at the origin) is
/// touched: source row `y` lands on destination row `h - 1 - y`, where `h`
/// is the overlap height. Destination pixels outside the overlap keep
/// their values.
pub fn flip_vertical_into<T: Sample>(src: &Surface<'_, T>, dst: &mut SurfaceMut<'_, T>) {
    let (area, _) = clipped_src_dst(src.bounds(), src.bounds(), dst.bounds(), (0, 0));
    let (width, height) = area.size();
    if width == 0 || height == 0 {
        return;
    }
    let strategy = Strategy::select(src.layout(), dst.layout());
    log::trace!(
        "flip_vertical_into: {strategy:?} {:?} -> {:?}, {width}x{height}",
        src.order(),
        dst.order()
    );
    strategy.run(src, dst, (width, height));
}

/// Clamp a requested size to both surfaces. `None` if nothing to do.
#[inline]
fn fit<T: Sample>(
    src: &Surface<'_, T>,
    dst: &SurfaceMut<'_, T>,
    size: (usize, usize),
) -> Option<(usize, usize)> {
    let w = size.0.min(src.width()).min(dst.width());
    let h = size.1.min(src.height()).min(dst.height());
    (w > 0 && h > 0).then_some((w, h))
}

/// Bulk row copy, rows reversed. Meant for identical channel orders; with
/// differing orders it copies raw samples.
pub fn flip_same_channel_order<T: Sample>(
    src: &Surface<'_, T>,
    dst: &mut SurfaceMut<'_, T>,
    size: (usize, usize),
) {
    let Some((w, h)) = fit(src, dst, size) else {
        return;
    };
    let n = w * src.order().pixel_inc().min(dst.order().pixel_inc());
    for y in 0..h {
        dst.row_mut(h - 1 - y)[..n].copy_from_slice(&src.row(y)[..n]);
    }
}

/// Four-channel remap, rows reversed.
///
/// Both channel orders need an alpha slot; otherwise this degrades to
/// [`flip_rgb`].
pub fn flip_rgba<T: Sample>(
    src: &Surface<'_, T>,
    dst: &mut SurfaceMut<'_, T>,
    size: (usize, usize),
) {
    let Some((w, h)) = fit(src, dst, size) else {
        return;
    };
    let (s, d) = (src.order(), dst.order());
    let (Some(sa), Some(da)) = (s.alpha(), d.alpha()) else {
        log::debug!("flip_rgba: {s:?} -> {d:?} lacks alpha slots, remapping rgb only");
        return flip_rgb(src, dst, size);
    };
    T::flip_rgba_rows(
        src,
        [s.red(), s.green(), s.blue(), sa],
        dst,
        [d.red(), d.green(), d.blue(), da],
        w,
        h,
    );
}

/// RGB remap with every destination alpha set to [`Sample::MAX`], rows reversed.
///
/// The destination order needs an alpha slot; otherwise this degrades to
/// [`flip_rgb`].
pub fn flip_rgb_full_alpha<T: Sample>(
    src: &Surface<'_, T>,
    dst: &mut SurfaceMut<'_, T>,
    size: (usize, usize),
) {
    let Some((w, h)) = fit(src, dst, size) else {
        return;
    };
    let (s, d) = (src.order(), dst.order());
    let Some(da) = d.alpha() else {
        log::debug!("flip_rgb_full_alpha: {d:?} has no alpha slot, remapping rgb only");
        return flip_rgb(src, dst, size);
    };
    T::flip_rgb_full_alpha_rows(
        src,
        [s.red(), s.green(), s.blue()],
        dst,
        [d.red(), d.green(), d.blue(), da],
        w,
        h,
    );
}

/// RGB-only remap, rows reversed. Each side advances by its own pixel
/// stride; alpha and padding slots are left untouched.
pub fn flip_rgb<T: Sample>(
    src: &Surface<'_, T>,
    dst: &mut SurfaceMut<'_, T>,
    size: (usize, usize),
) {
    let Some((w, h)) = fit(src, dst, size) else {
        return;
    };
    let (s, d) = (src.order(), dst.order());
    flip_rgb_rows(
        src,
        [s.red(), s.green(), s.blue()],
        dst,
        [d.red(), d.green(), d.blue()],
        w,
        h,
    );
}

// ===========================================================================
// u8 acceleration
// ===========================================================================

/// Per-pixel byte shuffle into a 4-slot destination.
///
/// Destination slot `k` takes source byte `perm[k]` (or zero when negative),
/// then ORs in `fill[k]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ShufflePlan {
    perm: [i8; 4],
    fill: [u8; 4],
}

impl ShufflePlan {
    fn rgba(src_off: [usize; 4], dst_off: [usize; 4]) -> Self {
        let mut perm = [-1i8; 4];
        for (s, d) in src_off.into_iter().zip(dst_off) {
            perm[d] = s as i8;
        }
        Self { perm, fill: [0; 4] }
    }

    fn full_alpha(src_off: [usize; 3], dst_off: [usize; 4]) -> Self {
        let mut perm = [-1i8; 4];
        for (s, d) in src_off.into_iter().zip(dst_off) {
            perm[d] = s as i8;
        }
        let mut fill = [0u8; 4];
        fill[dst_off[3]] = u8::MAX;
        Self { perm, fill }
    }

    #[inline(always)]
    pub(crate) fn apply(&self, s: &[u8], d: &mut [u8]) {
        for k in 0..4 {
            let v = usize::try_from(self.perm[k]).map_or(0, |p| s[p]);
            d[k] = v | self.fill[k];
        }
    }

    /// `pshufb` mask for 4 pixels per 16-byte lane, source pixels
    /// `src_inc` bytes apart within the lane.
    #[cfg_attr(not(target_arch = "x86_64"), allow(dead_code))]
    pub(crate) fn lane_mask(&self, src_inc: usize) -> [i8; 32] {
        let mut mask = [-128i8; 32];
        for (i, m) in mask.iter_mut().enumerate() {
            let p = self.perm[i % 4];
            if p >= 0 {
                *m = ((i % 16) / 4 * src_inc) as i8 + p;
            }
        }
        mask
    }

    #[cfg_attr(not(target_arch = "x86_64"), allow(dead_code))]
    pub(crate) fn fill_mask(&self) -> [u8; 32] {
        let mut mask = [0u8; 32];
        for (i, m) in mask.iter_mut().enumerate() {
            *m = self.fill[i % 4];
        }
        mask
    }
}

pub(crate) fn flip_rgba_rows_u8(
    src: &Surface<'_, u8>,
    src_off: [usize; 4],
    dst: &mut SurfaceMut<'_, u8>,
    dst_off: [usize; 4],
    width: usize,
    height: usize,
) {
    let plan = ShufflePlan::rgba(src_off, dst_off);
    let (s, ss) = (src.data(), src.stride());
    let ds = dst.stride();
    let d = dst.data_mut();
    let size = (width, height);
    incant!(flip_shuffle4_impl(s, ss, d, ds, size, plan), [v3, scalar]);
}

pub(crate) fn flip_rgb_full_alpha_rows_u8(
    src: &Surface<'_, u8>,
    src_off: [usize; 3],
    dst: &mut SurfaceMut<'_, u8>,
    dst_off: [usize; 4],
    width: usize,
    height: usize,
) {
    let plan = ShufflePlan::full_alpha(src_off, dst_off);
    let (s, ss) = (src.data(), src.stride());
    let ds = dst.stride();
    let d = dst.data_mut();
    let size = (width, height);
    if src.order().pixel_inc() == 3 {
        incant!(flip_shuffle3_impl(s, ss, d, ds, size, plan), [v3, scalar]);
    } else {
        incant!(flip_shuffle4_impl(s, ss, d, ds, size, plan), [v3, scalar]);
    }
}
