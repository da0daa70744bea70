use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
}

/// Bordered block of plain-text lines.
///
/// Content must not contain ANSI escapes; styling is applied to the border
/// only, so padding can rely on the visible width of the raw text.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    lines: Vec<String>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.lines.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.lines.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.lines.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let (tl, tr, bl, br, h, v) = if supports_unicode {
            use theme::borders::*;
            (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
        } else {
            use theme::borders_ascii::*;
            (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
        };

        let mut out = String::new();
        let top = format!("{}{}{}", tl, h.repeat(inner_width), tr);
        out.push_str(&self.color_border(&top, supports_color));
        out.push('\n');

        for line in &lines {
            out.push_str(&self.color_border(v, supports_color));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(inner_width - 1 - line.width()));
            out.push_str(&self.color_border(v, supports_color));
            out.push('\n');
        }

        let bottom = format!("{}{}{}", bl, h.repeat(inner_width), br);
        out.push_str(&self.color_border(&bottom, supports_color));
        out.push('\n');
        out
    }

    fn color_border(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }

        let color = match self.style {
            PanelStyle::Info => theme::colors::INFO,
            PanelStyle::Success => theme::colors::SUCCESS,
            PanelStyle::Warning => theme::colors::WARNING,
        };
        format!("{}", s.with(color))
    }
}
