use crate::ui::theme;
use anstream::{AutoStream, ColorChoice};
use anstyle::{Reset, Style};
use anstyle_query::{clicolor, clicolor_force, no_color, term_supports_color};
use anyhow::Result;
use std::io::{self, Write};

/// Styles available for rendering messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Warning,
    Error,
    User,
    Subject,
    Header,
}

impl MessageStyle {
    pub fn style(self) -> Style {
        let styles = theme::active_styles();
        match self {
            Self::Info => styles.info,
            Self::Warning => styles.warning,
            Self::Error => styles.error,
            Self::User => styles.user,
            Self::Subject => styles.subject,
            Self::Header => styles.header,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Warning => "⚠ ",
            Self::Error => "✖ ",
            _ => "",
        }
    }
}

/// Whether the environment asks for colored output.
pub fn color_enabled() -> bool {
    clicolor_force() || (!no_color() && clicolor().unwrap_or_else(term_supports_color))
}

/// Styled line writer for stdout
pub struct AnsiRenderer {
    writer: AutoStream<io::Stdout>,
    color: bool,
}

impl AnsiRenderer {
    pub fn stdout() -> Self {
        let color = color_enabled();
        let choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            writer: AutoStream::new(io::stdout(), choice),
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write `text` in `style`, one styled line per input line.
    pub fn line(&mut self, style: MessageStyle, text: &str) -> Result<()> {
        let prefix = style.prefix();
        let style = style.style();
        for (index, line) in text.lines().enumerate() {
            let lead = if index == 0 { prefix } else { "" };
            self.write_styled(style, &format!("{lead}{line}"))?;
        }
        if text.is_empty() {
            self.write_styled(style, prefix)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Write styled text without a trailing newline
    pub fn inline(&mut self, style: MessageStyle, text: &str) -> Result<()> {
        let style = style.style();
        if self.color {
            write!(self.writer, "{style}{text}{Reset}")?;
        } else {
            write!(self.writer, "{text}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Write a raw line without styling
    pub fn raw_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_styled(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{style}{text}{Reset}")
        } else {
            writeln!(self.writer, "{text}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_prefixed() {
        assert_eq!(MessageStyle::Warning.prefix(), "⚠ ");
        assert_eq!(MessageStyle::Error.prefix(), "✖ ");
        assert_eq!(MessageStyle::Info.prefix(), "");
    }

    #[test]
    fn renderer_writes_without_error() {
        let mut renderer = AnsiRenderer::stdout();
        renderer
            .line(MessageStyle::Info, "first\nsecond")
            .unwrap();
        renderer.raw_line("").unwrap();
    }
}
