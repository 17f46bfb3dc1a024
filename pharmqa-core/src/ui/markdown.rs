//! Markdown rendering for model answers.

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Skin used for answers. `color = false` yields plain text.
pub fn answer_skin(color: bool) -> MadSkin {
    if !color {
        return MadSkin::no_style();
    }
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Magenta);
    skin.bullet.set_fg(Color::Cyan);
    skin
}

/// Render markdown to a string wrapped at `width` columns.
pub fn render_markdown_to_string(text: &str, width: usize, color: bool) -> String {
    answer_skin(color).text(text, Some(width)).to_string()
}

/// Print markdown to stdout using the terminal width.
pub fn render_markdown(text: &str, color: bool) {
    answer_skin(color).print_text(text);
}
