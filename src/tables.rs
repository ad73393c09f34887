//! Register tables for the bulk loader
//!
//! Each table is a list of `(register, value)` pairs written in order with
//! no bank gating. Tables switch banks themselves by writing 0xFF, so the
//! first entry always sets the bank the following registers belong to.

/// UXGA (1600x1200) baseline: sensor timing, AEC/AGC, gamma, color matrix,
/// AWB and a 1600x1200 DSP window
#[rustfmt::skip]
pub const UXGA_INIT: &[(u8, u8)] = &[
    (0xFF, 0x00), (0x2C, 0xFF), (0x2E, 0xDF),
    // sensor bank
    (0xFF, 0x01), (0x3C, 0x32), (0x11, 0x00), (0x09, 0x02), (0x04, 0xD8),
    (0x13, 0xE5), (0x14, 0x48), (0x2C, 0x0C), (0x33, 0x78), (0x3A, 0x33),
    (0x3B, 0xFB), (0x3E, 0x00), (0x43, 0x11), (0x16, 0x10), (0x39, 0x92),
    (0x35, 0xDA), (0x22, 0x1A), (0x37, 0xC3), (0x23, 0x00), (0x34, 0xC0),
    (0x36, 0x1A), (0x06, 0x88), (0x07, 0xC0), (0x0D, 0x87), (0x0E, 0x41),
    (0x4C, 0x00), (0x48, 0x00), (0x5B, 0x00), (0x42, 0x03), (0x4A, 0x81),
    (0x21, 0x99), (0x24, 0x40), (0x25, 0x38), (0x26, 0x82), (0x5C, 0x00),
    (0x63, 0x00), (0x46, 0x00), (0x0C, 0x3C), (0x61, 0x70), (0x62, 0x80),
    (0x7C, 0x05), (0x20, 0x80), (0x28, 0x30), (0x6C, 0x00), (0x6D, 0x80),
    (0x6E, 0x00), (0x70, 0x02), (0x71, 0x94), (0x73, 0xC1), (0x3D, 0x34),
    (0x5A, 0x57),
    // UXGA window
    (0x12, 0x00), (0x17, 0x11), (0x18, 0x75), (0x19, 0x01), (0x1A, 0x97),
    (0x32, 0x36), (0x03, 0x0F), (0x37, 0x40), (0x4F, 0xCA), (0x50, 0xA8),
    (0x5A, 0x23), (0x6D, 0x00), (0x6D, 0x38),
    // DSP bank
    (0xFF, 0x00), (0xE5, 0x7F), (0xF9, 0xC0), (0x41, 0x24), (0xE0, 0x14),
    (0x76, 0xFF), (0x33, 0xA0), (0x42, 0x20), (0x43, 0x18), (0x4C, 0x00),
    (0x87, 0xD5), (0x88, 0x3F), (0xD7, 0x03), (0xD9, 0x10), (0xD3, 0x82),
    (0xC8, 0x08), (0xC9, 0x80),
    // SDE defaults
    (0x7C, 0x00), (0x7D, 0x00), (0x7C, 0x03), (0x7D, 0x48), (0x7D, 0x48),
    (0x7C, 0x08), (0x7D, 0x20), (0x7D, 0x10), (0x7D, 0x0E),
    // gamma
    (0x90, 0x00), (0x91, 0x0E), (0x91, 0x1A), (0x91, 0x31), (0x91, 0x5A),
    (0x91, 0x69), (0x91, 0x75), (0x91, 0x7E), (0x91, 0x88), (0x91, 0x8F),
    (0x91, 0x96), (0x91, 0xA3), (0x91, 0xAF), (0x91, 0xC4), (0x91, 0xD7),
    (0x91, 0xE8), (0x91, 0x20),
    (0x92, 0x00), (0x93, 0x06), (0x93, 0xE3), (0x93, 0x05), (0x93, 0x05),
    (0x93, 0x00), (0x93, 0x04), (0x93, 0x00), (0x93, 0x00), (0x93, 0x00),
    (0x93, 0x00), (0x93, 0x00), (0x93, 0x00), (0x93, 0x00),
    // color matrix
    (0x96, 0x00), (0x97, 0x08), (0x97, 0x19), (0x97, 0x02), (0x97, 0x0C),
    (0x97, 0x24), (0x97, 0x30), (0x97, 0x28), (0x97, 0x26), (0x97, 0x02),
    (0x97, 0x98), (0x97, 0x80), (0x97, 0x00), (0x97, 0x00),
    // AWB
    (0xC3, 0xED), (0xA4, 0x00), (0xA8, 0x00), (0xC5, 0x11), (0xC6, 0x51),
    (0xBF, 0x80), (0xC7, 0x10), (0xB6, 0x66), (0xB8, 0xA5), (0xB7, 0x64),
    (0xB9, 0x7C), (0xB3, 0xAF), (0xB4, 0x97), (0xB5, 0xFF), (0xB0, 0xC5),
    (0xB1, 0x94), (0xB2, 0x0F), (0xC4, 0x5C),
    // 1600x1200 input and output
    (0xC0, 0xC8), (0xC1, 0x96), (0x8C, 0x00), (0x86, 0x3D), (0x50, 0x00),
    (0x51, 0x90), (0x52, 0x2C), (0x53, 0x00), (0x54, 0x00), (0x55, 0x88),
    (0x5A, 0x90), (0x5B, 0x2C), (0x5C, 0x05), (0xD3, 0x02),
    (0xC3, 0xED), (0x7F, 0x00), (0xDA, 0x09), (0xE5, 0x1F), (0xE1, 0x67),
    (0xE0, 0x00), (0xDD, 0x7F), (0x05, 0x00),
];

/// YUV422 DVP output
#[rustfmt::skip]
pub const YUV422: &[(u8, u8)] = &[
    (0xFF, 0x00), (0xDA, 0x10), (0xD7, 0x03), (0xDF, 0x00), (0x33, 0x80),
    (0x3C, 0x40), (0xE1, 0x77), (0x00, 0x00),
];

/// JPEG encoder on top of the YUV422 pipeline
#[rustfmt::skip]
pub const JPEG: &[(u8, u8)] = &[
    (0xFF, 0x00), (0xE0, 0x14), (0xE1, 0x77), (0xE5, 0x1F), (0xD7, 0x03),
    (0xDA, 0x10), (0xE0, 0x00),
];

/// RGB565 DVP output
#[rustfmt::skip]
pub const RGB565: &[(u8, u8)] = &[
    (0xFF, 0x00), (0xDA, 0x09), (0xD7, 0x03), (0xDF, 0x02), (0x33, 0xA0),
    (0x3C, 0x00), (0xE1, 0x67), (0xE0, 0x00),
];
