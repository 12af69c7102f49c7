//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use core::time;
use ratatui::{
    Terminal,
    crossterm::{
        event::{
            self, Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::Backend,
};
use std::{cell::RefCell, io, rc::Rc};

use crate::{
    ipc::{
        message::{FetchMessage, RendererMessage},
        renderer::RendererIpc,
    },
    store::{Dispatcher, StateGetter, Store, action::Action, state::State},
    ui::{
        app::{App, Application},
        views::traits::{CustomEventContext, CustomWidgetContext},
    },
};

/// Owns the terminal and the store. Draws the ui, feeds input events to it,
/// and commits fetch results relayed by the fetch process.
pub struct RendererProcess<B: Backend + io::Write> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    app: Box<dyn Application>,
    ipc: RendererIpc,
}

impl<B: Backend + io::Write> RendererProcess<B> {
    /// Creates a new renderer with the given terminal, store, and IPC.
    pub fn new(
        terminal: Terminal<B>,
        ipc: RendererIpc,
        store: Rc<Store>,
    ) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            app: Box::new(App::new()),
            store,
            ipc,
        }
    }

    /// Initializes the terminal, kicks off the initial load, and runs the
    /// render loop. Returns when the user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        self.store.dispatch(Action::LoadTours);
        let res = self.start_loop();
        self.exit()?;
        res
    }

    fn start_loop(&self) -> Result<()> {
        self.render_frame(&self.store.get_state())?;

        loop {
            let mut dirty = false;

            // drain everything the fetch process settled since last frame
            while let Ok(msg) = self.ipc.rx.try_recv() {
                self.handle_message(msg);
                dirty = true;
            }

            // poll so incoming fetch results are not held up by input
            if let Ok(has_event) = event::poll(time::Duration::from_millis(16))
                && has_event
            {
                let evt = event::read()?;

                if self.handle_event(&evt)? {
                    return Ok(());
                }

                dirty = true;
            }

            if dirty {
                self.render_frame(&self.store.get_state())?;
            }
        }
    }

    fn handle_message(&self, msg: RendererMessage) {
        match msg {
            RendererMessage::ToursSettled(id, outcome) => {
                self.store.dispatch(Action::ToursSettled(id, outcome));
            }
        }
    }

    /// Feeds an input event to the app. Returns true when the user asked to
    /// quit.
    fn handle_event(&self, evt: &CrossTermEvent) -> Result<bool> {
        let state = self.store.get_state();

        let ctx = CustomEventContext {
            state: &state,
            dispatcher: self.store.clone(),
        };

        let handled = self.app.process_event(evt, &ctx)?;

        let CrossTermEvent::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        // ctrl-c cannot be overridden, q only when no view consumed it
        let quit = match key.code {
            KeyCode::Char('c') => key.modifiers == KeyModifiers::CONTROL,
            KeyCode::Char('q') => !handled,
            _ => false,
        };

        if quit {
            log::info!("quit requested");
            if let Err(err) = self.ipc.tx.send(FetchMessage::Quit) {
                log::debug!("fetch process already gone: {err}");
            }
        }

        Ok(quit)
    }

    fn render_frame(&self, state: &State) -> Result<()> {
        let mut res = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext { state };

                if let Err(err) =
                    self.app.render_ref(f.area(), f.buffer_mut(), &ctx)
                {
                    res = Err(err);
                }
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        res
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)
            .wrap_err("failed to enter alternate screen")?;
        self.terminal
            .borrow_mut()
            .hide_cursor()
            .map_err(|e| eyre!("failed to hide terminal cursor: {}", e))?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        let mut terminal = self.terminal.borrow_mut();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
