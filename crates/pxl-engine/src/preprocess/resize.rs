//! Box-filter downscaling.

use crate::buffer::PixelBuffer;

/// Area-average `source` down to `new_width x new_height`.
///
/// Each target pixel averages the source rectangle
/// `[tx*sw/tw, (tx+1)*sw/tw) x [ty*sh/th, (ty+1)*sh/th)`, rounded per
/// channel. Alpha is averaged like the color channels. The span is widened
/// to one pixel so targets larger than the source still sample something.
///
/// Target dimensions of 0 are raised to 1.
pub fn resize_box(source: &PixelBuffer, new_width: usize, new_height: usize) -> PixelBuffer {
    let (sw, sh) = (source.width(), source.height());
    let (tw, th) = (new_width.max(1), new_height.max(1));
    if (sw, sh) == (tw, th) {
        return source.clone();
    }

    let span = |t: usize, src: usize, dst: usize| {
        let start = t * src / dst;
        let end = ((t + 1) * src / dst).max(start + 1).min(src);
        start..end
    };

    let data = source.data();
    let mut out = Vec::with_capacity(tw * th * PixelBuffer::CHANNELS);
    for ty in 0..th {
        let ys = span(ty, sh, th);
        for tx in 0..tw {
            let xs = span(tx, sw, tw);
            let mut sum = [0u64; 4];
            let mut count = 0u64;
            for y in ys.clone() {
                let row = &data[(y * sw + xs.start) * 4..(y * sw + xs.end) * 4];
                for px in row.chunks_exact(4) {
                    for (s, &v) in sum.iter_mut().zip(px) {
                        *s += u64::from(v);
                    }
                    count += 1;
                }
            }
            for s in sum {
                out.push((s as f64 / count as f64).round() as u8);
            }
        }
    }

    PixelBuffer::from_parts(tw, th, out)
}
