//! JPEG frame location in capture buffers
//!
//! In JPEG mode the DVP port streams a variable-length frame into a
//! fixed-size DMA buffer. The frame is delimited by the SOI and EOI markers;
//! anything around it is padding.

use core::ops::Range;

/// Start-of-image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// End-of-image marker
pub const EOI: [u8; 2] = [0xFF, 0xD9];

/// Locate the first complete JPEG frame in `buffer`
///
/// Returns the byte range from the first SOI marker through the first EOI
/// marker that follows it, both markers included. `None` if either marker
/// is missing.
///
/// # Example
/// ```
/// let buffer = [0x00, 0xFF, 0xD8, 0x12, 0xFF, 0xD9, 0x00];
/// assert_eq!(ov2640::jpeg::find_jpeg(&buffer), Some(1..6));
/// ```
#[must_use]
pub fn find_jpeg(buffer: &[u8]) -> Option<Range<usize>> {
    let start = find_marker(buffer, SOI)?;
    let body = start + SOI.len();
    let end = find_marker(&buffer[body..], EOI)? + body + EOI.len();
    Some(start..end)
}

fn find_marker(buffer: &[u8], marker: [u8; 2]) -> Option<usize> {
    buffer.windows(2).position(|pair| pair == marker)
}
