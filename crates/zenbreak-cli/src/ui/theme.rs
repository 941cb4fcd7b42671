use ratatui::style::Color;

pub const COLOR_SAGE_DARK: Color = Color::Rgb(0x3f, 0x5a, 0x48);
pub const COLOR_SAGE: Color = Color::Rgb(0x6b, 0x8f, 0x71);
pub const COLOR_SAGE_LIGHT: Color = Color::Rgb(0xa8, 0xc5, 0xab);
pub const COLOR_SAND: Color = Color::Rgb(0xd9, 0xcf, 0xb8);
pub const COLOR_MUTED: Color = Color::Rgb(0x8a, 0x94, 0x8c);

pub const COLOR_BLOB_PURPLE: Color = Color::Rgb(0xc4, 0xb5, 0xfd);
pub const COLOR_BLOB_YELLOW: Color = Color::Rgb(0xfd, 0xe0, 0x47);
pub const COLOR_BLOB_PINK: Color = Color::Rgb(0xf9, 0xa8, 0xd4);
