// Glyph art for the three entity kinds.
//
// Each sprite carries the world-pixel footprint it stands in for, baked
// in at build time the way a decoded image carries its dimensions.
// Entities size their bounding boxes from these fields and never
// hardcode a dimension themselves.

/// A fixed piece of glyph art plus its world-space footprint.
#[derive(Debug)]
pub struct Sprite {
    /// Rows of art, top to bottom.  Every row in one sprite holds the
    /// same number of single-width characters.
    pub art: &'static [&'static str],
    pub width: i32,
    pub height: i32,
}

pub static PLAYER: Sprite = Sprite {
    art: &[
        "  ▲  ",
        " /█\\ ",
    ],
    width: 50,
    height: 50,
};

pub static ENEMY: Sprite = Sprite {
    art: &[
        "▄███▄",
        "▀█▀█▀",
    ],
    width: 50,
    height: 50,
};

pub static POWERUP: Sprite = Sprite {
    art: &["(★)"],
    width: 30,
    height: 30,
};
