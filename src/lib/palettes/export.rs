use crate::palettes::palette::Palette;

/// Renders a palette as the classic text export: a header followed by one
/// `RGB(r, g, b)` line per entry. `index` is the palette's 0-based position
/// in the store; the header numbers palettes from 1 the way users see them.
pub fn format_palette(palette: &Palette, index: usize) -> String {
	let mut content = format!("Palette {} RGB Values:\n", index + 1);
	for color in palette.colors() {
		content += &format!("RGB({}, {}, {})\n", color.r, color.g, color.b);
	}
	content
}

/// Same layout as [format_palette], but with one `#rrggbb` line per entry.
pub fn format_palette_hex(palette: &Palette, index: usize) -> String {
	let mut content = format!("Palette {} Hex Values:\n", index + 1);
	for color in palette.colors() {
		content += &format!("{color}\n");
	}
	content
}
