use super::{clamp, Vec3};

/// Linear RGB color, each channel nominally in `[0, 1]`. Alpha is implicitly 1.
///
/// This is the same type as [`Vec3`]: x, y and z hold r, g and b.
pub type Colorf = Vec3;

/// Packed 8 bit per channel color laid out as `0xAARRGGBB`. Alpha is always 255.
pub type Colori = u32;

pub const COLOR_SKYBLUE: Colorf = Colorf::new(0.572, 0.886, 0.992);
pub const COLOR_BLACK: Colorf = Colorf::new(0.0, 0.0, 0.0);
pub const COLOR_WHITE: Colorf = Colorf::new(1.0, 1.0, 1.0);

// clamp to [0, 1], scale to [0, 255] and round to nearest. NaN maps to 0.
fn channel_to_byte(c: f64) -> u8 {
    let c = clamp(c, 0.0, 1.0);
    if c.is_nan() {
        0
    } else {
        (c * 255.0).round() as u8
    }
}

pub fn clamp_color(c: Colorf) -> Colorf {
    Colorf::new(
        clamp(c.x, 0.0, 1.0),
        clamp(c.y, 0.0, 1.0),
        clamp(c.z, 0.0, 1.0),
    )
}

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> Colori {
    (0xFF << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Clamp each channel of `c` and pack it.
pub fn pack(c: Colorf) -> Colori {
    rgb_to_u32(
        channel_to_byte(c.x),
        channel_to_byte(c.y),
        channel_to_byte(c.z),
    )
}

/// Split a packed color into `[r, g, b, a]` bytes.
pub fn unpack(c: Colori) -> [u8; 4] {
    [(c >> 16) as u8, (c >> 8) as u8, c as u8, (c >> 24) as u8]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pack_red() {
        let packed = pack(Colorf::new(1.0, 0.0, 0.0));
        assert_eq!(packed, 0xFFFF0000);
        assert_eq!(unpack(packed), [255, 0, 0, 255]);
    }

    #[test]
    fn test_pack_clamps() {
        assert_eq!(
            pack(Colorf::new(1.5, -0.2, 0.5)),
            pack(Colorf::new(1.0, 0.0, 0.5))
        );
        assert_eq!(unpack(pack(Colorf::new(1.5, -0.2, 0.5))), [255, 0, 128, 255]);
    }

    #[test]
    fn test_pack_rounds_to_nearest() {
        // 0.5 * 255 = 127.5, rounds away from zero
        assert_eq!(unpack(pack(Colorf::splat(0.5)))[0], 128);
        // 0.25 * 255 = 63.75
        assert_eq!(unpack(pack(Colorf::splat(0.25)))[1], 64);
        // 0.2 * 255 = 51
        assert_eq!(unpack(pack(Colorf::splat(0.2)))[2], 51);
    }

    #[test]
    fn test_pack_nan_is_black() {
        assert_eq!(unpack(pack(Colorf::splat(f64::NAN))), [0, 0, 0, 255]);
    }

    #[test]
    fn test_byte_round_trip() {
        for byte in [0u8, 1, 17, 128, 254, 255] {
            let c = Colorf::splat(byte as f64 / 255.0);
            assert_eq!(unpack(pack(c)), [byte, byte, byte, 255]);
        }
    }

    #[test]
    fn test_clamp_color() {
        assert_eq!(
            clamp_color(Colorf::new(1.5, -0.2, 0.5)),
            Colorf::new(1.0, 0.0, 0.5)
        );
    }
}
