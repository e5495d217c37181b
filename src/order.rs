//! Channel order descriptors.
//!
//! A [`ChannelOrder`] says where red, green, blue and (optionally) alpha
//! live inside one pixel, and how many sample slots a pixel occupies.
//!
//! ```rust
//! use zenflip::ChannelOrder;
//!
//! assert_eq!(ChannelOrder::BGRA.red(), 2);
//! assert_eq!(ChannelOrder::BGR.pixel_inc(), 3);
//!
//! // Anything else can be described by hand.
//! let gbra = ChannelOrder::new(1, 0, 2, Some(3), 4).unwrap();
//! assert_eq!(gbra.green(), 0);
//! ```

use crate::LayoutError;

/// Position of each semantic channel within one pixel.
///
/// Two orders compare equal when every offset and the pixel stride match,
/// which is exactly when a raw row copy between them is lossless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelOrder {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Option<u8>,
    pixel_inc: u8,
}

impl ChannelOrder {
    pub const RGBA: Self = Self::raw(0, 1, 2, Some(3), 4);
    pub const BGRA: Self = Self::raw(2, 1, 0, Some(3), 4);
    pub const ARGB: Self = Self::raw(1, 2, 3, Some(0), 4);
    pub const ABGR: Self = Self::raw(3, 2, 1, Some(0), 4);
    pub const RGB: Self = Self::raw(0, 1, 2, None, 3);
    pub const BGR: Self = Self::raw(2, 1, 0, None, 3);

    /// RGBA layout whose fourth slot is padding. Pair with `has_alpha = false`.
    pub const RGBX: Self = Self::RGBA;
    /// BGRA layout whose fourth slot is padding.
    pub const BGRX: Self = Self::BGRA;
    /// ARGB layout whose first slot is padding.
    pub const XRGB: Self = Self::ARGB;
    /// ABGR layout whose first slot is padding.
    pub const XBGR: Self = Self::ABGR;

    const fn raw(red: u8, green: u8, blue: u8, alpha: Option<u8>, pixel_inc: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            pixel_inc,
        }
    }

    /// Describe a custom order.
    ///
    /// `pixel_inc` must be 3 or 4, every offset must be below it, and no two
    /// channels may share a slot. A 4-slot order without `alpha` leaves its
    /// spare slot as padding.
    pub fn new(
        red: u8,
        green: u8,
        blue: u8,
        alpha: Option<u8>,
        pixel_inc: u8,
    ) -> Result<Self, LayoutError> {
        if !(3..=4).contains(&pixel_inc) {
            return Err(LayoutError::InvalidChannelOrder);
        }
        let mut seen = 0u8;
        for off in [Some(red), Some(green), Some(blue), alpha].into_iter().flatten() {
            if off >= pixel_inc || seen & (1 << off) != 0 {
                log::debug!("rejecting channel order: offset {off} for pixel_inc {pixel_inc}");
                return Err(LayoutError::InvalidChannelOrder);
            }
            seen |= 1 << off;
        }
        Ok(Self::raw(red, green, blue, alpha, pixel_inc))
    }

    #[inline]
    pub const fn red(&self) -> usize {
        self.red as usize
    }

    #[inline]
    pub const fn green(&self) -> usize {
        self.green as usize
    }

    #[inline]
    pub const fn blue(&self) -> usize {
        self.blue as usize
    }

    /// Offset of the alpha slot, if this order has one.
    #[inline]
    pub const fn alpha(&self) -> Option<usize> {
        match self.alpha {
            Some(a) => Some(a as usize),
            None => None,
        }
    }

    /// Sample slots occupied by one pixel.
    #[inline]
    pub const fn pixel_inc(&self) -> usize {
        self.pixel_inc as usize
    }
}
