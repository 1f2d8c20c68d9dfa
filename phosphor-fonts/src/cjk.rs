//! 16x16 glyph catalog for the multi-byte characters the chart and demo
//! text use. Data layout matches the image blit: 16 page-0 columns then
//! 16 page-1 columns, least significant bit on top.

use crate::CjkGlyph;

/// Catalog of known 16x16 glyphs, looked up by UTF-8 key prefix.
pub static CJK_16X16: &[CjkGlyph] = &[
    CjkGlyph {
        key: "温",
        data: [
            0x09, 0x12, 0x00, 0x00, 0x7E, 0x01, 0x00, 0x00, 0x7F, 0x49, 0x49, 0x49, 0x49, 0x7F, 0x00, 0x00,
            0x60, 0x1C, 0x03, 0x00, 0x40, 0x7F, 0x41, 0x41, 0x7F, 0x41, 0x41, 0x7F, 0x41, 0x41, 0x7F, 0x40,
        ],
    },
    CjkGlyph {
        key: "度",
        data: [
            0xFC, 0x04, 0x04, 0xA4, 0xF4, 0xA4, 0xA4, 0xA7, 0xA4, 0xF4, 0xA4, 0x04, 0x04, 0x04, 0x04, 0xF8,
            0x7F, 0x40, 0x00, 0x21, 0x22, 0x16, 0x0A, 0x0A, 0x0A, 0x16, 0x20, 0x61, 0x40, 0x40, 0x00, 0x7F,
        ],
    },
    CjkGlyph {
        key: "时",
        data: [
            0xFE, 0x22, 0x22, 0x22, 0xFE, 0x00, 0x07, 0x24, 0xC4, 0x04, 0x04, 0x04, 0xFC, 0x06, 0x02, 0x00,
            0x7F, 0x42, 0x42, 0x42, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x20, 0x40, 0x40, 0x7F, 0x00, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "间",
        data: [
            0x00, 0xF1, 0x03, 0x04, 0x00, 0xFE, 0x02, 0x02, 0xF2, 0x92, 0x92, 0xF2, 0x02, 0x02, 0xFE, 0x00,
            0x00, 0x7F, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x07, 0x04, 0x04, 0x07, 0x20, 0x60, 0x7F, 0x00,
        ],
    },
    CjkGlyph {
        key: "均",
        data: [
            0x20, 0x20, 0xFF, 0x20, 0x20, 0x00, 0x00, 0x80, 0x7C, 0x07, 0x04, 0x24, 0xC4, 0x04, 0xFC, 0x00,
            0x00, 0x00, 0x1F, 0x30, 0x20, 0x20, 0x1C, 0x03, 0x00, 0x00, 0x41, 0x42, 0x40, 0x30, 0x1F, 0x00,
        ],
    },
    CjkGlyph {
        key: "值",
        data: [
            0x80, 0x60, 0xFC, 0x03, 0x00, 0x00, 0xFA, 0x4A, 0x4A, 0x4A, 0x4F, 0x4A, 0xFA, 0x02, 0x02, 0x00,
            0x00, 0x00, 0x7F, 0x00, 0x00, 0x40, 0x5F, 0x52, 0x52, 0x52, 0x52, 0x52, 0x5F, 0x40, 0x40, 0x00,
        ],
    },
    CjkGlyph {
        key: "一",
        data: [
            0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "二",
        data: [
            0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00,
            0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "三",
        data: [
            0x00, 0x04, 0x04, 0x84, 0x84, 0x84, 0x84, 0x84, 0x84, 0x84, 0x84, 0x04, 0x04, 0x00, 0x00, 0x00,
            0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "十",
        data: [
            0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0xFF, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "中",
        data: [
            0xF8, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0xFF, 0x08, 0x08, 0x08, 0x08, 0xF8, 0x00, 0x00, 0x00,
            0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "上",
        data: [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3F, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "下",
        data: [
            0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0xFE, 0x22, 0x42, 0x82, 0x02, 0x02, 0x02, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    },
    CjkGlyph {
        key: "日",
        data: [
            0x00, 0x00, 0xFE, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x3F, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    },
];
