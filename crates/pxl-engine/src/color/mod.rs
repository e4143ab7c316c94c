//! Color utilities
//!
//! This module provides the [`Rgb`] type shared by every renderer, plus:
//!
//! - hex literal parsing and formatting ([`hex_to_rgb`], [`rgb_to_hex`])
//! - channel clamping ([`clamp_channel`])
//! - BT.709 luminance ([`Rgb::luminance`])
//!
//! Nearest-color search lives on [`Palette`](crate::palette::Palette), which
//! guarantees a non-empty color list.

mod hex;
mod rgb;

pub use hex::{hex_to_rgb, rgb_to_hex};
pub use rgb::{clamp_channel, Rgb, LUMA_WEIGHTS};
