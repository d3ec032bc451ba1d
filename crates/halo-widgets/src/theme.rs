use halo_dial::Rgb;

/// Colors shared by every widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub track: Rgb,
    pub text: Rgb,
    pub night: Rgb,
    pub day: Rgb,
    pub accent: Rgb,
    pub rain: Rgb,
    pub sun: Rgb,
    pub moon: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Rgb::new(0xf5, 0xf6, 0xfa),
        track: Rgb::new(0x9a, 0xa3, 0xb5),
        text: Rgb::new(0x1f, 0x24, 0x33),
        night: Rgb::new(0x2b, 0x3a, 0x67),
        day: Rgb::new(0xff, 0xc8, 0x57),
        accent: Rgb::new(0xff, 0x6b, 0x35),
        rain: Rgb::new(0x3d, 0x8b, 0xfd),
        sun: Rgb::new(0xff, 0xb3, 0x00),
        moon: Rgb::new(0xc9, 0xd1, 0xe6),
    };

    pub const DARK: Palette = Palette {
        background: Rgb::new(0x10, 0x13, 0x1c),
        track: Rgb::new(0x3a, 0x41, 0x52),
        text: Rgb::new(0xe8, 0xeb, 0xf2),
        night: Rgb::new(0x1b, 0x24, 0x48),
        day: Rgb::new(0xf2, 0xb6, 0x3c),
        accent: Rgb::new(0xff, 0x85, 0x5a),
        rain: Rgb::new(0x5a, 0xa2, 0xff),
        sun: Rgb::new(0xff, 0xc1, 0x2e),
        moon: Rgb::new(0xe4, 0xe8, 0xf5),
    };

    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}
