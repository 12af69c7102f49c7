use color_eyre::eyre::Result;
use ratatui::{buffer::Buffer, crossterm::event::Event, layout::Rect};
use std::rc::Rc;

use crate::store::{Dispatcher, state::State};

/// Handles terminal input events. Returns true when the event was consumed.
pub trait EventHandler {
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool>;
}

pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
}

pub struct CustomEventContext<'a> {
    // app state at the time the event was read
    pub state: &'a State,
    // views dispatch store actions in response to user input
    pub dispatcher: Rc<dyn Dispatcher>,
}

pub trait CustomWidget {
    fn render(self, area: Rect, buf: &mut Buffer, ctx: &CustomWidgetContext);
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()>;
}

pub trait View: EventHandler + CustomWidgetRef {
    fn legend(&self, _state: &State) -> &str {
        ""
    }
}
