use crossterm::style::{Color, Stylize};

/// Design tokens for the Vitrine UI.
///
/// All colors, icons, and borders used by the views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Info,
    Cart,
    Trash,
    Chat,
    Mail,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        if unicode {
            match self {
                Icon::Success => "✓",
                Icon::Warning => "⚠",
                Icon::Info => "💡",
                Icon::Cart => "🛒",
                Icon::Trash => "🗑",
                Icon::Chat => "📲",
                Icon::Mail => "✉",
            }
        } else {
            match self {
                Icon::Success => "[OK]",
                Icon::Warning => "[WARN]",
                Icon::Info => "[i]",
                Icon::Cart => "[CART]",
                Icon::Trash => "[DEL]",
                Icon::Chat => "[WA]",
                Icon::Mail => "[MAIL]",
            }
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.glyph(supports_unicode);
        if !supports_color {
            return glyph.to_string();
        }

        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Warning => colors::WARNING,
            Icon::Info | Icon::Cart | Icon::Chat | Icon::Mail => colors::INFO,
            Icon::Trash => colors::DIM,
        };
        format!("{}", glyph.with(color))
    }
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}
