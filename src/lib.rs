//! # zenflip
//!
//! *Turn your surfaces upside down.*
//!
//! Vertical flips for borrowed pixel buffers, in place or into a second
//! surface with a different channel order. Converting between layouts on
//! the way remaps channels, synthesizes opaque alpha when the source has
//! none, and leaves padding bytes alone.
//!
//! ```rust
//! use zenflip::{ChannelOrder, Surface, SurfaceLayout, SurfaceMut, flip_vertical_into};
//!
//! // 2×2 RGB source, BGRA destination.
//! let src = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
//! let mut dst = [0u8; 16];
//! let sl = SurfaceLayout::packed::<u8>(2, 2, ChannelOrder::RGB, false).unwrap();
//! let dl = SurfaceLayout::packed::<u8>(2, 2, ChannelOrder::BGRA, true).unwrap();
//! flip_vertical_into(
//!     &Surface::new(&src, sl).unwrap(),
//!     &mut SurfaceMut::new(&mut dst, dl).unwrap(),
//! );
//! assert_eq!(&dst[..8], &[9, 8, 7, 255, 12, 11, 10, 255]);
//! ```
//!
//! ## Core operations (always available)
//!
//! [`flip_vertical`] and [`flip_vertical_into`] work on [`Surface`] /
//! [`SurfaceMut`] views over `u8`, `u16` or `f32` samples. `u8` remaps run
//! on AVX2 when the CPU has it, with automatic fallback to scalar code.
//!
//! ## Feature flags
//!
//! - **`rgb`**: build surfaces straight from [`rgb`] crate pixel slices
//!   (`Rgb<u8>`, `Bgra<u16>`, ...) via bytemuck.
//! - **`imgref`**: flip whole [`imgref`] images. Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

mod error;
mod flip;
mod order;
mod region;
mod sample;
mod surface;

pub use error::LayoutError;
pub use flip::{
    Strategy, flip_rgb, flip_rgb_full_alpha, flip_rgba, flip_same_channel_order, flip_vertical,
    flip_vertical_into,
};
pub use order::ChannelOrder;
pub use region::{Area, clipped_src_dst};
pub use sample::Sample;
pub use surface::{Surface, SurfaceLayout, SurfaceMut};

#[cfg(feature = "rgb")]
pub mod typed;

#[cfg(feature = "imgref")]
pub mod img;
