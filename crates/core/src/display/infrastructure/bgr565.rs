//! 16-bit packed colour: 5 bits blue, 6 bits green, 5 bits red.
//!
//! Each pixel is a little-endian `u16` with red in the high bits and blue in
//! the low bits, the layout OpenCV calls `BGR565` and Linux 16bpp
//! framebuffers expect.

/// Packs one B,G,R pixel.
pub fn pack(b: u8, g: u8, r: u8) -> u16 {
    let r5 = (r as u16 >> 3) & 0x1F;
    let g6 = (g as u16 >> 2) & 0x3F;
    let b5 = (b as u16 >> 3) & 0x1F;
    (r5 << 11) | (g6 << 5) | b5
}

/// Expands a packed pixel back to 8-bit B,G,R, replicating high bits into
/// the low bits so full-scale values survive.
pub fn unpack(value: u16) -> [u8; 3] {
    let r5 = ((value >> 11) & 0x1F) as u8;
    let g6 = ((value >> 5) & 0x3F) as u8;
    let b5 = (value & 0x1F) as u8;
    [
        (b5 << 3) | (b5 >> 2),
        (g6 << 2) | (g6 >> 4),
        (r5 << 3) | (r5 >> 2),
    ]
}

/// Encodes interleaved B,G,R bytes, appending two bytes per pixel to `out`.
pub fn encode_into(bgr: &[u8], out: &mut Vec<u8>) {
    out.reserve(bgr.len() / 3 * 2);
    for px in bgr.chunks_exact(3) {
        out.extend_from_slice(&pack(px[0], px[1], px[2]).to_le_bytes());
    }
}

pub fn encode(bgr: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(bgr, &mut out);
    out
}

/// Decodes packed little-endian pixels to interleaved B,G,R bytes.
pub fn decode(packed: &[u8]) -> Vec<u8> {
    packed
        .chunks_exact(2)
        .flat_map(|p| unpack(u16::from_le_bytes([p[0], p[1]])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::black([0, 0, 0], 0x0000)]
    #[case::white([255, 255, 255], 0xFFFF)]
    #[case::blue([255, 0, 0], 0x001F)]
    #[case::green([0, 255, 0], 0x07E0)]
    #[case::red([0, 0, 255], 0xF800)]
    fn test_pack_primaries(#[case] bgr: [u8; 3], #[case] expected: u16) {
        assert_eq!(pack(bgr[0], bgr[1], bgr[2]), expected);
    }

    #[test]
    fn test_encode_is_little_endian() {
        assert_eq!(encode(&[0, 0, 255]), vec![0x00, 0xF8]);
        assert_eq!(encode(&[255, 0, 0]), vec![0x1F, 0x00]);
    }

    #[test]
    fn test_encode_length_is_two_bytes_per_pixel() {
        let bgr = vec![17u8; 7 * 5 * 3];
        assert_eq!(encode(&bgr).len(), 7 * 5 * 2);
    }

    #[test]
    fn test_full_scale_channels_survive() {
        assert_eq!(decode(&encode(&[255, 255, 255])), vec![255, 255, 255]);
        assert_eq!(decode(&encode(&[255, 0, 0])), vec![255, 0, 0]);
        assert_eq!(decode(&encode(&[0, 0, 255])), vec![0, 0, 255]);
        assert_eq!(decode(&encode(&[0, 255, 0])), vec![0, 255, 0]);
    }

    #[test]
    fn test_every_level_within_quantisation_error() {
        for v in 0..=255u8 {
            let [b, g, r] = unpack(pack(v, v, v));
            assert!((b as i16 - v as i16).abs() < 8, "blue {v} -> {b}");
            assert!((g as i16 - v as i16).abs() < 4, "green {v} -> {g}");
            assert!((r as i16 - v as i16).abs() < 8, "red {v} -> {r}");
        }
    }

    #[test]
    fn test_quantised_values_are_exact() {
        // Values already representable in 5/6 bits round-trip unchanged.
        for packed in [0x0000u16, 0x1234, 0xABCD, 0xFFFF] {
            assert_eq!(pack_unpacked(packed), packed);
        }
    }

    fn pack_unpacked(value: u16) -> u16 {
        let [b, g, r] = unpack(value);
        pack(b, g, r)
    }
}
