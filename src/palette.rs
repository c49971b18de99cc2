//! Color palette for multi-color charts.
//!
//! A fixed, ordered set of 13 RGB colors assigned to bars by direct
//! index. Bars past the palette end get no `\definecolor` — their
//! `fill=colorN` reference is still emitted and only fails downstream at
//! LaTeX compile time. Known limitation, kept rather than papered over
//! with a cyclic palette.

/// RGB color definitions, in bar-assignment order.
pub const PALETTE: [(u8, u8, u8); 13] = [
    (65, 105, 225),
    (220, 53, 69),
    (255, 165, 0),
    (40, 167, 69),
    (255, 193, 7),
    (23, 162, 184),
    (111, 66, 193),
    (255, 218, 185),
    (255, 182, 193),
    (144, 238, 144),
    (221, 160, 221),
    (135, 206, 250),
    (176, 224, 230),
];

/// Color name referenced by the bar at `index`. Defined for every index,
/// including those past the palette end.
pub fn color_name(index: usize) -> String {
    format!("color{}", index + 1)
}

/// `\definecolor` line for the bar at `index`, or `None` past the
/// palette end.
pub fn define_color(index: usize) -> Option<String> {
    PALETTE.get(index).map(|(r, g, b)| {
        format!("\\definecolor{{color{}}}{{RGB}}{{{},{},{}}}", index + 1, r, g, b)
    })
}
