//! Dark and light palettes. The active one is picked from the view's theme
//! flag on every draw, so the screen never lags behind a toggle.

use lexis_types::Font;
use ratatui::style::{Color, Modifier, Style};

pub struct Palette {
    /// Whole-screen background and default text
    pub base: Style,
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub error: Style,
    pub border: Style,
    pub help: Style,
    /// Backing block behind the monospace heading
    pub code_bg: Color,
}

const PURPLE_600: Color = Color::Rgb(147, 51, 234);
const PURPLE_400: Color = Color::Rgb(192, 132, 252);
const GRAY_950: Color = Color::Rgb(3, 7, 18);
const GRAY_800: Color = Color::Rgb(31, 41, 55);
const GRAY_600: Color = Color::Rgb(75, 85, 99);
const GRAY_400: Color = Color::Rgb(156, 163, 175);
const GRAY_200: Color = Color::Rgb(229, 231, 235);
const GRAY_100: Color = Color::Rgb(243, 244, 246);
const RED_600: Color = Color::Rgb(220, 38, 38);
const RED_400: Color = Color::Rgb(248, 113, 113);

pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::White).bg(GRAY_950),
    text: Style::new().fg(Color::White),
    muted: Style::new().fg(GRAY_400),
    accent: Style::new().fg(PURPLE_400),
    error: Style::new().fg(RED_400).add_modifier(Modifier::BOLD),
    border: Style::new().fg(GRAY_600),
    help: Style::new().fg(GRAY_600),
    code_bg: GRAY_800,
};

pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    text: Style::new().fg(Color::Black),
    muted: Style::new().fg(GRAY_600),
    accent: Style::new().fg(PURPLE_600),
    error: Style::new().fg(RED_600).add_modifier(Modifier::BOLD),
    border: Style::new().fg(GRAY_200),
    help: Style::new().fg(GRAY_400),
    code_bg: GRAY_100,
};

impl Palette {
    pub fn for_mode(dark: bool) -> &'static Palette {
        if dark { &DARK } else { &LIGHT }
    }

    /// Word heading in the chosen font
    pub fn heading(&self, font: Font) -> Style {
        let style = self.text.add_modifier(Modifier::BOLD);
        match font {
            Font::Serif => style.add_modifier(Modifier::ITALIC),
            Font::Sans => style,
            Font::Mono => style.bg(self.code_bg),
        }
    }

    pub fn strong(&self) -> Style {
        self.text.add_modifier(Modifier::BOLD)
    }

    pub fn link(&self) -> Style {
        self.accent.add_modifier(Modifier::UNDERLINED)
    }
}
