//! Top level layout: heading, tours view, and key legend.

use color_eyre::eyre::Result;
use ratatui::{
    buffer::Buffer,
    crossterm::event::Event,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use crate::ui::{
    components::{footer::InfoFooter, header::Header},
    views::{
        tours::ToursView,
        traits::{
            CustomEventContext, CustomWidget, CustomWidgetContext,
            CustomWidgetRef, EventHandler, View,
        },
    },
};

pub const TITLE: &str = "Our Tours";

/// Root widget driven by the renderer process.
pub trait Application: EventHandler + CustomWidgetRef {}

pub struct App {
    tours_view: Box<dyn View>,
}

impl App {
    pub fn new() -> Self {
        Self {
            tours_view: Box::new(ToursView::new()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for App {}

impl CustomWidgetRef for App {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        Block::new()
            .style(Style::new().bg(ctx.state.colors.buffer_bg))
            .render(area, buf);

        let [header_area, _, body_area, footer_area] = Layout::vertical([
            Constraint::Length(2), // title + divider
            Constraint::Length(1), // spacer
            Constraint::Min(3),    // tours
            Constraint::Length(3), // legend
        ])
        .areas(area);

        Header::new(TITLE.to_string()).render(header_area, buf, ctx);

        self.tours_view.render_ref(
            body_area.inner(Margin {
                horizontal: 1,
                vertical: 0,
            }),
            buf,
            ctx,
        )?;

        let legend = self.tours_view.legend(ctx.state).to_string();
        InfoFooter::new(legend).render(footer_area, buf, ctx);

        Ok(())
    }
}

impl EventHandler for App {
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool> {
        self.tours_view.process_event(evt, ctx)
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
