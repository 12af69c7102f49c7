//! Footer listing the keys valid for the current view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::{
    colors::Colors,
    views::traits::{CustomWidget, CustomWidgetContext},
};

const SEPARATOR: &str = " | ";

/// Centered key legend in a double border. Entries are separated by `" | "`
/// and the leading `(key)` of each entry is highlighted.
pub struct InfoFooter {
    legend: String,
}

impl InfoFooter {
    pub fn new(legend: String) -> Self {
        Self { legend }
    }

    fn spans<'a>(&'a self, colors: &Colors) -> Vec<Span<'a>> {
        let mut spans = Vec::new();

        for (i, entry) in self.legend.split(SEPARATOR).enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    SEPARATOR,
                    Style::new().fg(colors.gray),
                ));
            }

            match entry.split_once(") ") {
                Some((key, label)) if key.starts_with('(') => {
                    spans.push(Span::styled(
                        format!("{key})"),
                        Style::new().fg(colors.accent),
                    ));
                    spans.push(Span::raw(format!(" {label}")));
                }
                _ => spans.push(Span::raw(entry)),
            }
        }

        spans
    }
}

impl CustomWidget for InfoFooter {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        Paragraph::new(Line::from(self.spans(colors)))
            .style(Style::new().fg(colors.text).bg(colors.buffer_bg))
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(colors.border_color)),
            )
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
