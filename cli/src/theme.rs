use anstyle::{Color, RgbColor, Style};

pub struct Theme {
    pub error: Style,

    pub path: Style,
    pub line_number: Style,
    pub code: Style,
    pub keyword: Style,
    pub bracket: Style,
    pub literal: Style,
    pub operator: Style,
    pub comment: Style,
}

pub const fn hex(x: u32) -> Color {
    Color::Rgb(RgbColor(
        ((x >> 16) & 0xFF) as u8,
        ((x >> 8) & 0xFF) as u8,
        (x & 0xFF) as u8,
    ))
}

#[allow(dead_code)]
impl Theme {
    /// https://lospec.com/palette-list/dracula-standard
    pub const DRACULA: Self = Self {
        error: Style::new().fg_color(Some(hex(0xff5555))),

        path: Style::new(),
        line_number: Style::new().fg_color(Some(hex(0x44475a))),
        code: Style::new().fg_color(Some(hex(0xf8f8f2))),
        keyword: Style::new().fg_color(Some(hex(0x8be9fd))),
        bracket: Style::new().fg_color(Some(hex(0xffb86c))),
        literal: Style::new().fg_color(Some(hex(0xbd93f9))),
        operator: Style::new().fg_color(Some(hex(0xff79c6))),
        comment: Style::new().fg_color(Some(hex(0x44475a))).italic(),
    };

    /// https://lospec.com/palette-list/nebulaspace
    pub const NEBULASPACE: Self = Self {
        error: Style::new().fg_color(Some(hex(0xa66372))),

        path: Style::new(),
        line_number: Style::new().fg_color(Some(hex(0x32244d))),
        code: Style::new().fg_color(Some(hex(0xede8e1))),
        keyword: Style::new().fg_color(Some(hex(0xa66372))),
        bracket: Style::new().fg_color(Some(hex(0xe6eb6a))),
        literal: Style::new().fg_color(Some(hex(0x5d858c))),
        operator: Style::new().fg_color(Some(hex(0xa66372))),
        comment: Style::new().fg_color(Some(hex(0x32244d))).italic(),
    };
}
