//! Named colour tables for markers and path overlays.
//!
//! Two palettes: the *active* palette carries saturated colours handed
//! out to markers by index; the *passive* palette carries faded tones for
//! secondary overlays such as distance heatmaps.

/// Saturated named colours, in hand-out order.
pub const ACTIVE_COLORS: [(&str, &str); 17] = [
    ("green", "#2ECC40"),
    ("red", "#FF4136"),
    ("aqua", "#7FDBFF"),
    ("blue", "#0074D9"),
    ("lime", "#01FF70"),
    ("navy", "#001F3F"),
    ("teal", "#39CCCC"),
    ("olive", "#3D9970"),
    ("maroon", "#85144B"),
    ("orange", "#FF851B"),
    ("purple", "#B10DC9"),
    ("yellow", "#FFDC00"),
    ("fuchsia", "#F012BE"),
    ("gray", "#aaa"),
    ("white", "#fff"),
    ("black", "#111"),
    ("silver", "#ddd"),
];

/// Faded tones for secondary overlays.
pub const PASSIVE_COLORS: [&str; 20] = [
    "#64B5F6", "#90A4AE", "#81C784", "#e57373", "#BA68C8", "#FFB74D", "#F06292",
    "#4DB6AC", "#FFD54F", "#A1887F", "#9575CD", "#E0E0E0", "#26C6DA", "#7986CB",
    "#FFF176", "#AED581", "#4DD0E1", "#DCE775", "#4FC3F7", "#FF8A65",
];

/// The active colour name for `index`, wrapping past the table end.
pub fn color_name(index: usize) -> &'static str {
    ACTIVE_COLORS[index % ACTIVE_COLORS.len()].0
}

/// Resolve a colour name to its hex value.
///
/// Unknown names pass through unchanged so raw hex strings can be used
/// wherever a colour name is accepted.
pub fn color_value(name: &str) -> &str {
    for (n, hex) in ACTIVE_COLORS {
        if n == name {
            return hex;
        }
    }
    name
}

/// A passive hex colour for `index`, wrapping past the table end.
pub fn passive_color(index: usize) -> &'static str {
    PASSIVE_COLORS[index % PASSIVE_COLORS.len()]
}
