use ratatui::style::Color;
use versewise_config::ThemeChoice;

/// Palette for the chat screens. Two built-in variants, matching the config's
/// `theme` choice.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    /// Highlight color: headers, verse titles, the active picker row.
    pub accent: Color,
    pub user_text: Color,
    pub bold: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    pub verse_title: Color,
    pub verse_body: Color,
    pub verse_border: Color,
    pub shimmer: Color,
    pub caret: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::Rgb(200, 200, 195),
            muted: Color::Rgb(110, 110, 110),
            accent: Color::Rgb(240, 190, 90),
            user_text: Color::Rgb(235, 235, 230),
            bold: Color::Rgb(240, 240, 235),
            code_fg: Color::Rgb(180, 180, 180),
            code_bg: Color::Rgb(45, 45, 45),
            verse_title: Color::Rgb(255, 215, 100),
            verse_body: Color::Rgb(220, 210, 180),
            verse_border: Color::Rgb(150, 130, 80),
            shimmer: Color::Rgb(130, 130, 130),
            caret: Color::Rgb(240, 240, 235),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Rgb(40, 40, 45),
            muted: Color::Rgb(130, 130, 135),
            accent: Color::Rgb(150, 100, 20),
            user_text: Color::Rgb(20, 20, 25),
            bold: Color::Rgb(10, 10, 15),
            code_fg: Color::Rgb(60, 60, 65),
            code_bg: Color::Rgb(230, 228, 220),
            verse_title: Color::Rgb(140, 90, 10),
            verse_body: Color::Rgb(80, 70, 45),
            verse_border: Color::Rgb(170, 150, 100),
            shimmer: Color::Rgb(150, 150, 150),
            caret: Color::Rgb(20, 20, 25),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }
}
