//! 2D Morton (Z-order) codes.
//!
//! Splits a single entropy value into two coordinates while keeping nearby
//! codes close together in the plane. Uses Fabian Giesen's bit twiddling, see
//! [his post on Morton codes](https://fgiesen.wordpress.com/2009/12/13/decoding-morton-codes/).
//! The first coordinate lives in the even bits, the second in the odd bits.
//! A `usize` code splits like the fixed width type of the same size.

use crate::entropy::Uint;

/// An unsigned integer that can be split into two interleaved coordinates
/// of half its width.
pub trait MortonCode: Uint {
    type Coordinate: Uint;

    fn decode_2d(self) -> (Self::Coordinate, Self::Coordinate);

    fn encode_2d(x: Self::Coordinate, y: Self::Coordinate) -> Self;
}

/// Insert a 0 bit between each of the low 32 bits of x
fn part1_by1(mut x: u64) -> u64 {
    x &= 0x0000_0000_ffff_ffff;
    x = (x ^ (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x ^ (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x ^ (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x ^ (x << 2)) & 0x3333_3333_3333_3333;
    (x ^ (x << 1)) & 0x5555_5555_5555_5555
}

/// Inverse of part1_by1, drops the odd bits and packs the even ones
fn compact1_by1(mut x: u64) -> u64 {
    x &= 0x5555_5555_5555_5555;
    x = (x ^ (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x ^ (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x ^ (x >> 4)) & 0x00ff_00ff_00ff_00ff;
    x = (x ^ (x >> 8)) & 0x0000_ffff_0000_ffff;
    (x ^ (x >> 16)) & 0x0000_0000_ffff_ffff
}

macro_rules! impl_morton_code {
    ($($code:ty => $coord:ty),*) => {
        $(
            impl MortonCode for $code {
                type Coordinate = $coord;

                #[inline]
                fn decode_2d(self) -> ($coord, $coord) {
                    let code = self as u64;
                    (compact1_by1(code) as $coord, compact1_by1(code >> 1) as $coord)
                }

                #[inline]
                fn encode_2d(x: $coord, y: $coord) -> $code {
                    ((part1_by1(y as u64) << 1) | part1_by1(x as u64)) as $code
                }
            }
        )*
    };
}

impl_morton_code!(u16 => u8, u32 => u16, u64 => u32);

#[cfg(target_pointer_width = "64")]
impl_morton_code!(usize => u32);

#[cfg(target_pointer_width = "32")]
impl_morton_code!(usize => u16);

/// Decodes a 2D Morton code into its two coordinates.
#[inline]
pub fn decode_2d<I: MortonCode>(code: I) -> (I::Coordinate, I::Coordinate) {
    code.decode_2d()
}
