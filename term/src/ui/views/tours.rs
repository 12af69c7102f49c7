//! Grid of tour cards with loading and empty states.

use color_eyre::eyre::Result;
use ratatui::{
    buffer::Buffer,
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use std::{cell::RefCell, collections::HashSet};
use tours_lib::tour::TourId;

use crate::{
    store::{action::Action, state::State},
    ui::components::card::TourCard,
};

use super::traits::{
    CustomEventContext, CustomWidget, CustomWidgetContext, CustomWidgetRef,
    EventHandler, View,
};

/// Narrowest a card gets before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 36;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No tours left";
pub const REFRESH_TEXT: &str = "[ Refresh ]";

const LOADING_LEGEND: &str = "(q) quit";
const EMPTY_LEGEND: &str = "(r) refresh | (q) quit";
const TOURS_LEGEND: &str =
    "(←↓↑→) select | (enter) read more | (x) not interested | (q) quit";

/// Ui state of the grid, reset whenever a new list is committed.
#[derive(Default)]
struct Selection {
    // index into the tour list
    selected: usize,
    // first grid row on screen
    first_row: usize,
    // columns of the last rendered grid
    columns: usize,
    // cards showing their full description
    expanded: HashSet<TourId>,
    // list version the above belongs to
    version: u64,
}

impl Selection {
    fn sync(&mut self, state: &State) {
        if self.version != state.version {
            *self = Self {
                columns: self.columns,
                version: state.version,
                ..Self::default()
            };
        }

        self.expanded.retain(|id| state.tours.iter().any(|t| t.id == *id));

        if self.selected >= state.tours.len() {
            self.selected = state.tours.len().saturating_sub(1);
        }

        self.columns = self.columns.max(1);
    }
}

/// Shows "Loading..." while a fetch is outstanding, an empty state with a
/// refresh control once every tour was dismissed, and the card grid
/// otherwise.
#[derive(Default)]
pub struct ToursView {
    selection: RefCell<Selection>,
}

impl ToursView {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_loading(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [_, text_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(LOADING_TEXT)
            .style(Style::new().fg(ctx.state.colors.text))
            .centered()
            .render(text_area, buf);
    }

    fn render_empty(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [_, text_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        let text = Text::from(vec![
            Line::styled(
                EMPTY_TEXT,
                Style::new()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                REFRESH_TEXT,
                Style::new().fg(ctx.state.colors.accent),
            ),
        ]);

        Paragraph::new(text).centered().render(text_area, buf);
    }

    fn render_grid(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let tours = &ctx.state.tours;
        let mut selection = self.selection.borrow_mut();

        let columns = usize::from(area.width / CARD_MIN_WIDTH)
            .min(tours.len())
            .max(1);
        selection.columns = columns;

        let column_constraints =
            vec![Constraint::Ratio(1, columns as u32); columns];
        let card_width = area.width / columns as u16;

        let rows = tours.chunks(columns).collect::<Vec<_>>();
        let heights = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|tour| {
                        let expanded =
                            selection.expanded.contains(&tour.id);
                        TourCard::new(tour, expanded, false)
                            .height(card_width, &ctx.state.colors)
                    })
                    .max()
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();

        // keep the selected row on screen
        let selected_row = selection.selected / columns;
        if selected_row < selection.first_row {
            selection.first_row = selected_row;
        }
        while selection.first_row < selected_row
            && heights[selection.first_row..=selected_row]
                .iter()
                .map(|h| u32::from(*h))
                .sum::<u32>()
                > u32::from(area.height)
        {
            selection.first_row += 1;
        }
        selection.first_row =
            selection.first_row.min(rows.len().saturating_sub(1));

        let mut y = area.y;

        for (row_index, row) in
            rows.iter().enumerate().skip(selection.first_row)
        {
            if y >= area.bottom() {
                break;
            }

            let height = heights[row_index].min(area.bottom() - y);
            let row_area = Rect::new(area.x, y, area.width, height);
            let cells =
                Layout::horizontal(column_constraints.clone()).split(row_area);

            for (column, tour) in row.iter().enumerate() {
                let index = row_index * columns + column;
                let card = TourCard::new(
                    tour,
                    selection.expanded.contains(&tour.id),
                    index == selection.selected,
                );
                card.render(cells[column], buf, ctx);
            }

            y = y.saturating_add(height);
        }
    }

    fn selected_id(&self, state: &State) -> Option<TourId> {
        let selection = self.selection.borrow();
        state.tours.get(selection.selected).map(|t| t.id.clone())
    }

    fn move_selection(&self, state: &State, code: KeyCode) {
        let mut selection = self.selection.borrow_mut();
        let count = state.tours.len();
        let columns = selection.columns;

        let current = selection.selected;

        selection.selected = match code {
            KeyCode::Down | KeyCode::Char('j') if current + columns < count => {
                current + columns
            }
            KeyCode::Up | KeyCode::Char('k') if current >= columns => {
                current - columns
            }
            KeyCode::Right | KeyCode::Char('l') if current + 1 < count => {
                current + 1
            }
            KeyCode::Left | KeyCode::Char('h') => current.saturating_sub(1),
            _ => current,
        };
    }

    fn toggle_selected(&self, state: &State) {
        let Some(id) = self.selected_id(state) else {
            return;
        };

        let mut selection = self.selection.borrow_mut();
        if !selection.expanded.remove(&id) {
            selection.expanded.insert(id);
        }
    }
}

impl View for ToursView {
    fn legend(&self, state: &State) -> &str {
        if state.loading() {
            LOADING_LEGEND
        } else if state.tours.is_empty() {
            EMPTY_LEGEND
        } else {
            TOURS_LEGEND
        }
    }
}

impl CustomWidgetRef for ToursView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        self.selection.borrow_mut().sync(ctx.state);

        if ctx.state.loading() {
            self.render_loading(area, buf, ctx);
        } else if ctx.state.tours.is_empty() {
            self.render_empty(area, buf, ctx);
        } else {
            self.render_grid(area, buf, ctx);
        }

        Ok(())
    }
}

impl EventHandler for ToursView {
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool> {
        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press || ctx.state.loading() {
            return Ok(false);
        }

        self.selection.borrow_mut().sync(ctx.state);

        if ctx.state.tours.is_empty() {
            if key.code == KeyCode::Char('r') {
                ctx.dispatcher.dispatch(Action::RefreshTours);
                return Ok(true);
            }
            return Ok(false);
        }

        let handled = match key.code {
            KeyCode::Down
            | KeyCode::Up
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('j')
            | KeyCode::Char('k')
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.move_selection(ctx.state, key.code);
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_selected(ctx.state);
                true
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(id) = self.selected_id(ctx.state) {
                    ctx.dispatcher.dispatch(Action::RemoveTour(id));
                }
                true
            }
            _ => false,
        };

        Ok(handled)
    }
}

#[cfg(test)]
#[path = "./tours_tests.rs"]
mod tests;
