//! Color space conversion utilities
//!
//! This module handles the 8-bit HSV round trip used by the brightness
//! inspection:
//! - BGR to HSV with hue in [0, 180) and saturation/value in [0, 255]
//! - HSV back to BGR
//! - Shifting the value channel with saturation at 255

use crate::imaging::BgrImage;

/// Hue range of the 8-bit representation (degrees / 2)
const HUE_RANGE: i32 = 180;

/// Which two tab entries feed b, g and r for each of the six hue sectors
const SECTOR_DATA: [[usize; 3]; 6] = [
    [1, 3, 0],
    [1, 0, 2],
    [3, 0, 1],
    [0, 2, 1],
    [0, 1, 3],
    [2, 1, 0],
];

/// Fixed-point precision of the forward conversion
const HSV_SHIFT: i32 = 12;

/// `round(numerator / i)` for every 8-bit `i`, with entry 0 left at 0
const fn reciprocal_table(numerator: i32) -> [i32; 256] {
    let mut table = [0; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = (2 * numerator + i as i32) / (2 * i as i32);
        i += 1;
    }
    table
}

const SATURATION_DIV: [i32; 256] = reciprocal_table(255 << HSV_SHIFT);
const HUE_DIV: [i32; 256] = reciprocal_table((HUE_RANGE << HSV_SHIFT) / 6);

/// Multiply by a reciprocal table entry and drop the fixed-point fraction, rounding
fn scale_fixed(value: i32, reciprocal: i32) -> i32 {
    (value * reciprocal + (1 << (HSV_SHIFT - 1))) >> HSV_SHIFT
}

/// Convert one BGR pixel to 8-bit HSV.
///
/// Uses the same 12-bit fixed-point reciprocals as the usual 8-bit
/// `BGR2HSV` conversion so results agree bit for bit.
pub fn bgr_to_hsv([b, g, r]: [u8; 3]) -> [u8; 3] {
    let (b, g, r) = (i32::from(b), i32::from(g), i32::from(r));
    let v = b.max(g).max(r);
    let diff = v - b.min(g).min(r);

    let s = scale_fixed(diff, SATURATION_DIV[v as usize]);

    // Red wins ties, then green
    let numerator = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = scale_fixed(numerator, HUE_DIV[diff as usize]);
    if h < 0 {
        h += HUE_RANGE;
    }

    [h as u8, s as u8, v as u8]
}

/// Convert one 8-bit HSV pixel back to BGR
pub fn hsv_to_bgr([h, s, v]: [u8; 3]) -> [u8; 3] {
    let s = f32::from(s) / 255.0;
    let v = f32::from(v) / 255.0;

    let (b, g, r) = if s == 0.0 {
        (v, v, v)
    } else {
        let mut h = f32::from(h) * 6.0 / HUE_RANGE as f32;
        if h >= 6.0 {
            h -= 6.0;
        }
        let sector = h.floor();
        let h = h - sector;
        let sector = (sector as usize).min(5);

        let tab = [
            v,
            v * (1.0 - s),
            v * (1.0 - s * h),
            v * (1.0 - s * (1.0 - h)),
        ];
        let [ib, ig, ir] = SECTOR_DATA[sector];
        (tab[ib], tab[ig], tab[ir])
    };

    let to_u8 = |channel: f32| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(b), to_u8(g), to_u8(r)]
}

/// Raise a value-channel sample by `delta`, pinning anything above `255 - delta` at 255
pub fn shift_value(v: u8, delta: u8) -> u8 {
    let limit = u8::MAX - delta;
    if v > limit {
        u8::MAX
    } else {
        v + delta
    }
}

/// Brighten a BGR image by going through HSV and shifting the value channel.
/// The input is left untouched.
pub fn change_brightness(image: &BgrImage, delta: u8) -> BgrImage {
    let data = image
        .pixels()
        .flat_map(|pixel| {
            let [h, s, v] = bgr_to_hsv(pixel);
            hsv_to_bgr([h, s, shift_value(v, delta)])
        })
        .collect();

    BgrImage {
        width: image.width,
        height: image.height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_shift_saturates() {
        assert_eq!(shift_value(0, 50), 50);
        assert_eq!(shift_value(205, 50), 255);
        assert_eq!(shift_value(206, 50), 255);
        assert_eq!(shift_value(255, 50), 255);
        assert_eq!(shift_value(100, 0), 100);
    }

    #[test]
    fn test_value_shift_matches_min_rule() {
        for v in 0..=255u8 {
            let expected = (u16::from(v) + 50).min(255) as u8;
            assert_eq!(shift_value(v, 50), expected, "v = {}", v);
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(bgr_to_hsv([0, 0, 255]), [0, 255, 255]);
        assert_eq!(bgr_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(bgr_to_hsv([255, 0, 0]), [120, 255, 255]);
        assert_eq!(bgr_to_hsv([0, 0, 0]), [0, 0, 0]);
        assert_eq!(bgr_to_hsv([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn test_fixed_point_rounding() {
        assert_eq!(bgr_to_hsv([191, 44, 224]), [155, 205, 224]);
        assert_eq!(bgr_to_hsv([11, 110, 17]), [58, 229, 110]);
        // Slightly negative hue numerators round to zero, not to 180
        assert_eq!(bgr_to_hsv([1, 0, 255])[0], 0);
    }

    #[test]
    fn test_hsv_back_to_primaries() {
        assert_eq!(hsv_to_bgr([0, 255, 255]), [0, 0, 255]);
        assert_eq!(hsv_to_bgr([60, 255, 255]), [0, 255, 0]);
        assert_eq!(hsv_to_bgr([120, 255, 255]), [255, 0, 0]);
        assert_eq!(hsv_to_bgr([0, 0, 77]), [77, 77, 77]);
    }

    #[test]
    fn test_gray_pixels_follow_value_rule() {
        let pixels: Vec<u8> = [0u8, 10, 100, 205, 206, 230, 255]
            .iter()
            .flat_map(|&v| [v, v, v])
            .collect();
        let image = BgrImage::from_raw(7, 1, pixels).unwrap();

        let brightened = change_brightness(&image, 50);
        let values: Vec<u8> = brightened.pixels().map(|[b, _, _]| b).collect();
        assert_eq!(values, vec![50, 60, 150, 255, 255, 255, 255]);
        assert!(brightened.pixels().all(|[b, g, r]| b == g && g == r));
    }

    #[test]
    fn test_brightness_keeps_hue_of_saturated_red() {
        let image = BgrImage::from_raw(1, 1, vec![0, 0, 200]).unwrap();
        let brightened = change_brightness(&image, 50);
        assert_eq!(brightened.data, vec![0, 0, 250]);
    }

    #[test]
    fn test_brightness_leaves_input_alone() {
        let image = BgrImage::from_raw(1, 2, vec![10, 20, 30, 40, 50, 60]).unwrap();
        let copy = image.clone();
        let brightened = change_brightness(&image, 50);
        assert_eq!(image, copy);
        assert_eq!((brightened.width, brightened.height), (1, 2));
        assert_eq!(brightened.data.len(), 6);
    }
}
