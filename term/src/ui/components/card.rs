//! Card widget presenting a single tour.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use tours_lib::tour::Tour;

use crate::ui::{
    colors::Colors,
    views::traits::{CustomWidget, CustomWidgetContext},
};

/// Number of characters of a collapsed description.
pub const INFO_PREVIEW_CHARS: usize = 100;
/// Appended to every collapsed description.
pub const TRUNCATION_MARKER: &str = "...";

pub const READ_MORE: &str = "[Read More]";
pub const SHOW_LESS: &str = "[Show Less]";
pub const NOT_INTERESTED: &str = "[ Not Interested ]";

// blank spacer plus the removal control, pinned to the card bottom
const CONTROLS_HEIGHT: u16 = 2;

/// Returns the description shown for a tour. Collapsed descriptions are cut
/// to the first [`INFO_PREVIEW_CHARS`] characters and always end with the
/// truncation marker, even when nothing was cut.
pub fn describe(info: &str, expanded: bool) -> String {
    if expanded {
        return info.to_string();
    }

    let preview = info.chars().take(INFO_PREVIEW_CHARS).collect::<String>();
    format!("{preview}{TRUNCATION_MARKER}")
}

/// Bordered card with the tour name as title, a price badge, the image
/// location, the description with its toggle, and the removal control.
pub struct TourCard<'a> {
    tour: &'a Tour,
    expanded: bool,
    selected: bool,
}

impl<'a> TourCard<'a> {
    pub fn new(tour: &'a Tour, expanded: bool, selected: bool) -> Self {
        Self {
            tour,
            expanded,
            selected,
        }
    }

    /// Rows needed to show the whole card at the given width, borders
    /// included.
    pub fn height(&self, width: u16, colors: &Colors) -> u16 {
        let inner_width = width.saturating_sub(2);
        let lines = self.body(colors).line_count(inner_width);
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(CONTROLS_HEIGHT + 2)
    }

    // badge, image and description with its toggle
    fn body(&self, colors: &Colors) -> Paragraph<'a> {
        let badge = Line::from(Span::styled(
            format!(" ${} ", self.tour.price),
            Style::new()
                .fg(colors.badge_fg)
                .bg(colors.badge_bg)
                .add_modifier(Modifier::BOLD),
        ))
        .right_aligned();

        let image = Line::from(vec![
            Span::styled("image: ", Style::new().fg(colors.gray)),
            Span::styled(
                self.tour.image.as_str(),
                Style::new().fg(colors.light_gray),
            ),
        ]);

        let toggle = if self.expanded { SHOW_LESS } else { READ_MORE };

        let description = Line::from(vec![
            Span::styled(
                describe(&self.tour.info, self.expanded),
                Style::new().fg(colors.text),
            ),
            Span::raw(" "),
            Span::styled(toggle, Style::new().fg(colors.accent)),
        ]);

        let text = Text::from(vec![badge, image, Line::default(), description]);

        Paragraph::new(text).wrap(Wrap { trim: false })
    }

    fn controls(&self, colors: &Colors) -> Paragraph<'a> {
        let not_interested = Line::from(Span::styled(
            NOT_INTERESTED,
            Style::new().fg(colors.accent).add_modifier(Modifier::BOLD),
        ))
        .centered();

        Paragraph::new(Text::from(vec![Line::default(), not_interested]))
    }
}

impl CustomWidget for TourCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let border_color = if self.selected {
            colors.selected_border
        } else {
            colors.border_color
        };

        let block = Block::bordered()
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::new().fg(border_color))
            .title(Line::from(Span::styled(
                format!(" {} ", self.tour.name),
                Style::new()
                    .fg(colors.header_text)
                    .add_modifier(Modifier::BOLD),
            )));

        let inner = block.inner(area);
        block
            .style(Style::new().bg(colors.buffer_bg))
            .render(area, buf);

        let [body_area, controls_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .areas(inner);

        // a clipped card scrolls its body so the toggle stays on screen
        let body = self.body(colors);
        let overflow = body
            .line_count(body_area.width)
            .saturating_sub(usize::from(body_area.height));
        let overflow = u16::try_from(overflow).unwrap_or(u16::MAX);

        body.scroll((overflow, 0)).render(body_area, buf);
        self.controls(colors).render(controls_area, buf);
    }
}

#[cfg(test)]
#[path = "./card_tests.rs"]
mod tests;
