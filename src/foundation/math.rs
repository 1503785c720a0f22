/// `n` evenly spaced samples over the closed interval `[start, end]`.
///
/// The last sample is exactly `end`; `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Round tick positions covering `[min, max]`, at most about `target` of them.
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten. Ticks outside the closed range are dropped.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max < min || target == 0 {
        return Vec::new();
    }
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return vec![min];
    }

    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);

    let tol = step * 1e-9;
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > max + tol {
            break;
        }
        // Snap values that should be zero but picked up rounding noise.
        out.push(if v.abs() < tol { 0.0 } else { v });
        k += 1;
    }
    out
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Convert premultiplied RGBA8 into straight-alpha RGBA8.
pub fn unpremultiply_rgba8(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len());
    for px in premul.chunks_exact(4) {
        let a = px[3];
        match a {
            0 => out.extend_from_slice(&[0, 0, 0, 0]),
            255 => out.extend_from_slice(px),
            _ => {
                let a16 = u16::from(a);
                for &c in &px[..3] {
                    let v = (u16::from(c) * 255 + a16 / 2) / a16;
                    out.push(v.min(255) as u8);
                }
                out.push(a);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
