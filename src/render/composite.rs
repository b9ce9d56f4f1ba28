/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Opaque white.
pub const WHITE: PremulRgba8 = [255, 255, 255, 255];
/// Opaque black.
pub const BLACK: PremulRgba8 = [0, 0, 0, 255];
/// Fully transparent.
pub const TRANSPARENT: PremulRgba8 = [0, 0, 0, 0];

/// Porter-Duff "over" of `src` onto `dst`, with `src` scaled by an 8-bit `coverage`.
///
/// `coverage` plays the role of a mask sample: 0 leaves `dst` untouched, 255 is plain "over".
pub fn over(dst: PremulRgba8, src: PremulRgba8, coverage: u8) -> PremulRgba8 {
    if coverage == 0 || src[3] == 0 {
        return dst;
    }

    let cov = u16::from(coverage);
    let sa = mul_div255(u16::from(src[3]), cov);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), cov);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Straight RGBA8 to premultiplied.
pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    if a == 0 {
        return TRANSPARENT;
    }
    [
        mul_div255(u16::from(px[0]), a),
        mul_div255(u16::from(px[1]), a),
        mul_div255(u16::from(px[2]), a),
        px[3],
    ]
}

/// Premultiplied RGBA8 back to straight alpha.
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u32::from(px[3]);
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => {
            let un = |c: u8| (((u32::from(c) * 255) + a / 2) / a).min(255) as u8;
            [un(px[0]), un(px[1]), un(px[2]), px[3]]
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
