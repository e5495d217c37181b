use archmage::prelude::*;

use super::ShufflePlan;
use crate::{Sample, Surface, SurfaceMut};

// ===========================================================================
// Portable row loops, any sample type
// ===========================================================================

pub(crate) fn flip_rgba_rows<T: Sample>(
    src: &Surface<'_, T>,
    src_off: [usize; 4],
    dst: &mut SurfaceMut<'_, T>,
    dst_off: [usize; 4],
    width: usize,
    height: usize,
) {
    let [sr, sg, sb, sa] = src_off;
    let [dr, dg, db, da] = dst_off;
    for y in 0..height {
        let s = &src.row(y)[..width * 4];
        let d = &mut dst.row_mut(height - 1 - y)[..width * 4];
        for (s, d) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            d[dr] = s[sr];
            d[dg] = s[sg];
            d[db] = s[sb];
            d[da] = s[sa];
        }
    }
}

pub(crate) fn flip_rgb_full_alpha_rows<T: Sample>(
    src: &Surface<'_, T>,
    src_off: [usize; 3],
    dst: &mut SurfaceMut<'_, T>,
    dst_off: [usize; 4],
    width: usize,
    height: usize,
    alpha: T,
) {
    let si = src.order().pixel_inc();
    let [sr, sg, sb] = src_off;
    let [dr, dg, db, da] = dst_off;
    for y in 0..height {
        let s = &src.row(y)[..width * si];
        let d = &mut dst.row_mut(height - 1 - y)[..width * 4];
        for (s, d) in s.chunks_exact(si).zip(d.chunks_exact_mut(4)) {
            d[dr] = s[sr];
            d[dg] = s[sg];
            d[db] = s[sb];
            d[da] = alpha;
        }
    }
}

pub(crate) fn flip_rgb_rows<T: Sample>(
    src: &Surface<'_, T>,
    src_off: [usize; 3],
    dst: &mut SurfaceMut<'_, T>,
    dst_off: [usize; 3],
    width: usize,
    height: usize,
) {
    let si = src.order().pixel_inc();
    let di = dst.order().pixel_inc();
    let [sr, sg, sb] = src_off;
    let [dr, dg, db] = dst_off;
    for y in 0..height {
        let s = &src.row(y)[..width * si];
        let d = &mut dst.row_mut(height - 1 - y)[..width * di];
        for (s, d) in s.chunks_exact(si).zip(d.chunks_exact_mut(di)) {
            d[dr] = s[sr];
            d[dg] = s[sg];
            d[db] = s[sb];
        }
    }
}

// ===========================================================================
// u8 shuffle rows (also the SIMD tail)
// ===========================================================================

pub(crate) fn shuffle_row_scalar(src: &[u8], src_inc: usize, dst: &mut [u8], plan: &ShufflePlan) {
    for (s, d) in src.chunks_exact(src_inc).zip(dst.chunks_exact_mut(4)) {
        plan.apply(s, d);
    }
}

// ===========================================================================
// Scalar strided wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn flip_shuffle4_impl_scalar(
    _t: ScalarToken,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    size: (usize, usize),
    plan: ShufflePlan,
) {
    let (w, h) = size;
    for y in 0..h {
        shuffle_row_scalar(&src[y * ss..][..w * 4], 4, &mut dst[(h - 1 - y) * ds..][..w * 4], &plan);
    }
}

pub(super) fn flip_shuffle3_impl_scalar(
    _t: ScalarToken,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    size: (usize, usize),
    plan: ShufflePlan,
) {
    let (w, h) = size;
    for y in 0..h {
        shuffle_row_scalar(&src[y * ss..][..w * 3], 3, &mut dst[(h - 1 - y) * ds..][..w * 4], &plan);
    }
}
