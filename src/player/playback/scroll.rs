//! Mapping between continuous scroll position and discrete chunk index.
//!
//! Each chunk owns a band of `width` scroll units. Band `i` covers
//! `[i * width, (i + 1) * width)`.

/// Convert a scroll position to a chunk index.
///
/// Positions before the first band (including NaN) clamp to 0, positions past
/// the last band clamp to `total - 1`. Returns 0 when `total` is 0.
pub fn index_from_scroll(position: f64, width: f64, total: usize) -> usize {
    if total == 0 || width <= 0.0 {
        return 0;
    }

    let band = (position / width).floor();
    if band.is_nan() || band < 0.0 {
        0
    } else if band >= total as f64 {
        total - 1
    } else {
        band as usize
    }
}

/// Convert a chunk index to the scroll position at the centre of its band.
pub fn scroll_from_index(index: usize, width: f64) -> f64 {
    (index as f64 + 0.5) * width
}

/// Total length of the scroll surface for `total` chunks.
pub fn scroll_extent(total: usize, width: f64) -> f64 {
    total as f64 * width
}
