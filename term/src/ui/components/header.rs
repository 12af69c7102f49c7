//! Page heading with a divider underneath.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

const DIVIDER_SYMBOL: &str = "─";

/// Bold centered heading followed by a divider as wide as the title.
pub struct Header {
    title: String,
}

impl Header {
    /// Creates a new header with the given title.
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

impl CustomWidget for Header {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let [title_area, divider_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                .areas(area);

        let header_style = Style::default()
            .fg(ctx.state.colors.header_text)
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(self.title.as_str()))
            .style(header_style)
            .centered()
            .render(title_area, buf);

        let divider = DIVIDER_SYMBOL.repeat(self.title.width());

        Paragraph::new(Line::from(divider))
            .style(Style::default().fg(ctx.state.colors.accent))
            .centered()
            .render(divider_area, buf);
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
