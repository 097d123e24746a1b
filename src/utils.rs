use std::ops::Range;

/// Minimum and maximum of an iterator, None when it is empty.
pub fn min_and_max<'a, I, T>(mut s: I) -> Option<(T, T)>
where
    I: Iterator<Item = &'a T>,
    T: 'a + std::cmp::PartialOrd + Clone,
{
    let (mut min, mut max) = match s.next() {
        Some(v) => (v, v),
        None => return None,
    };
    for es in s {
        if es > max {
            max = es
        } else if es < min {
            min = es
        }
    }
    Some((min.clone(), max.clone()))
}

/// Axis range covering min and max, widened on both sides by ratio of the span.
/// A zero span (all the points on the same value) is widened by one unit instead,
/// plotters needs a non empty range.
pub fn padded_range(min: f64, max: f64, ratio: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0. { span * ratio } else { 1. };
    (min - pad)..(max + pad)
}

/// An arrow in backend pixels: the shaft and the triangular head.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub shaft: [(i32, i32); 2],
    pub head: [(i32, i32); 3],
}

/// Build the arrow from one marker to the next.
/// Both ends are pulled back by gap so that the arrow does not cover the markers;
/// the head is shortened when the shaft would be too short for it.
/// Return None when the markers touch, there is no room for any arrow.
pub fn arrow_between(
    from: (i32, i32),
    to: (i32, i32),
    gap: f64,
    head_len: f64,
    head_half_width: f64,
) -> Option<Arrow> {
    let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
    let dist = dx.hypot(dy);
    let room = dist - 2. * gap;
    if room <= 0. {
        return None;
    }
    let (ux, uy) = (dx / dist, dy / dist);
    let (nx, ny) = (-uy, ux);
    let start = (from.0 as f64 + ux * gap, from.1 as f64 + uy * gap);
    let tip = (to.0 as f64 - ux * gap, to.1 as f64 - uy * gap);
    let head_len = head_len.min(room);
    let base = (tip.0 - ux * head_len, tip.1 - uy * head_len);
    let px = |p: (f64, f64)| (p.0.round() as i32, p.1.round() as i32);
    Some(Arrow {
        shaft: [px(start), px(base)],
        head: [
            px(tip),
            px((base.0 + nx * head_half_width, base.1 + ny * head_half_width)),
            px((base.0 - nx * head_half_width, base.1 - ny * head_half_width)),
        ],
    })
}
