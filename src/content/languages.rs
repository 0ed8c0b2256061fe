//! Programming-language chips
//!
//! Each wrong guess knocks out one chip, left to right. The last chip is
//! Assembly, which is never lost: it is what takes over when the player runs
//! out of attempts. The number of chips therefore fixes the attempt budget.

/// A 24-bit chip colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A language chip as shown above the word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
}

const LIGHT: Rgb = Rgb(0xF9, 0xF4, 0xDA);
const DARK: Rgb = Rgb(0x1E, 0x1E, 0x1E);

/// Default chips, in the order they are lost
pub const LANGUAGES: &[Language] = &[
    Language {
        name: "HTML",
        background: Rgb(0xE2, 0x68, 0x0F),
        foreground: LIGHT,
    },
    Language {
        name: "CSS",
        background: Rgb(0x32, 0x8A, 0xF1),
        foreground: LIGHT,
    },
    Language {
        name: "JavaScript",
        background: Rgb(0xF4, 0xEB, 0x13),
        foreground: DARK,
    },
    Language {
        name: "React",
        background: Rgb(0x2E, 0xD3, 0xE9),
        foreground: DARK,
    },
    Language {
        name: "TypeScript",
        background: Rgb(0x29, 0x8E, 0xC6),
        foreground: LIGHT,
    },
    Language {
        name: "Node.js",
        background: Rgb(0x59, 0x91, 0x37),
        foreground: LIGHT,
    },
    Language {
        name: "Python",
        background: Rgb(0xFF, 0xD7, 0x42),
        foreground: DARK,
    },
    Language {
        name: "Ruby",
        background: Rgb(0xD0, 0x2B, 0x2B),
        foreground: LIGHT,
    },
    Language {
        name: "Assembly",
        background: Rgb(0x2D, 0x51, 0x9F),
        foreground: LIGHT,
    },
];
