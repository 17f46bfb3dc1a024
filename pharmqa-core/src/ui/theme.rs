use anstyle::{AnsiColor, Color, Effects, RgbColor, Style};

const PRIMARY_ACCENT: RgbColor = RgbColor(0x4E, 0xB5, 0x9A);
const SECONDARY_ACCENT: RgbColor = RgbColor(0xBF, 0xB3, 0x8F);
const ALERT_ACCENT: RgbColor = RgbColor(0xFF, 0x8A, 0x8A);
const WARNING_ACCENT: RgbColor = RgbColor(0xE8, 0xC5, 0x47);

/// Styles for each kind of line the CLI prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub info: Style,
    pub warning: Style,
    pub error: Style,
    pub user: Style,
    pub subject: Style,
    pub header: Style,
}

fn accent(color: RgbColor) -> Style {
    Style::new().fg_color(Some(Color::Rgb(color)))
}

/// The palette used for every rendered line.
pub fn active_styles() -> ThemeStyles {
    ThemeStyles {
        info: accent(SECONDARY_ACCENT),
        warning: accent(WARNING_ACCENT).bold(),
        error: accent(ALERT_ACCENT).bold(),
        user: Style::new()
            .fg_color(Some(Color::Ansi(AnsiColor::BrightBlue)))
            .effects(Effects::BOLD),
        subject: accent(PRIMARY_ACCENT).bold(),
        header: accent(PRIMARY_ACCENT).effects(Effects::BOLD | Effects::UNDERLINE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_and_errors_are_distinct() {
        let styles = active_styles();
        assert_ne!(styles.warning, styles.error);
        assert!(styles.error.get_effects().contains(Effects::BOLD));
    }
}
