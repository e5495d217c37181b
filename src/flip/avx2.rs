use archmage::prelude::*;

use super::ShufflePlan;
use super::scalar::shuffle_row_scalar;

// ===========================================================================
// SIMD constants
// ===========================================================================

// Spread 24 bytes of 3bpp pixels so each 16-byte lane starts on a pixel:
// lane 0 gets dwords 0-3, lane 1 gets dwords 3-6.
const RGB_ALIGN_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0,
];

// ===========================================================================
// x86-64 AVX2 rite row implementations
// ===========================================================================

#[rite]
pub(super) fn shuffle4_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], plan: &ShufflePlan) {
    let mask = _mm256_loadu_si256(&plan.lane_mask(4));
    let fill = _mm256_loadu_si256(&plan.fill_mask());
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let shuffled = _mm256_or_si256(_mm256_shuffle_epi8(v, mask), fill);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, shuffled);
        i += 32;
    }
    shuffle_row_scalar(&src[i..], 4, &mut dst[i..], plan);
}

#[rite]
pub(super) fn shuffle3_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], plan: &ShufflePlan) {
    let perm = _mm256_loadu_si256(&RGB_ALIGN_PERM_AVX);
    let shuf = _mm256_loadu_si256(&plan.lane_mask(3));
    let fill = _mm256_loadu_si256(&plan.fill_mask());
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    // Loads 32 source bytes but consumes 24, so stop while a full load fits.
    while is + 32 <= slen && id + 32 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let rgb = _mm256_loadu_si256(s);
        let aligned = _mm256_permutevar8x32_epi32(rgb, perm);
        let out = _mm256_or_si256(_mm256_shuffle_epi8(aligned, shuf), fill);
        let d: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, out);
        is += 24;
        id += 32;
    }
    shuffle_row_scalar(&src[is..], 3, &mut dst[id..], plan);
}

// ===========================================================================
// x86-64 arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn flip_shuffle4_impl_v3(
    t: X64V3Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    size: (usize, usize),
    plan: ShufflePlan,
) {
    let (w, h) = size;
    for y in 0..h {
        shuffle4_row_v3(t, &src[y * ss..][..w * 4], &mut dst[(h - 1 - y) * ds..][..w * 4], &plan);
    }
}

#[arcane]
pub(super) fn flip_shuffle3_impl_v3(
    t: X64V3Token,
    src: &[u8],
    ss: usize,
    dst: &mut [u8],
    ds: usize,
    size: (usize, usize),
    plan: ShufflePlan,
) {
    let (w, h) = size;
    for y in 0..h {
        shuffle3_row_v3(t, &src[y * ss..][..w * 3], &mut dst[(h - 1 - y) * ds..][..w * 4], &plan);
    }
}
