//! IPC handle for the renderer (ui) thread.

use crate::ipc::{
    message::{FetchMessage, RendererMessage},
    traits::{IpcReceiver, IpcSender},
};

/// Combined IPC handle for the renderer thread.
pub struct RendererIpc {
    pub tx: Box<dyn IpcSender<FetchMessage>>,
    pub rx: Box<dyn IpcReceiver<RendererMessage>>,
}

impl RendererIpc {
    /// Creates a new IPC handle with the given sender and receiver.
    pub fn new(
        tx: Box<dyn IpcSender<FetchMessage>>,
        rx: Box<dyn IpcReceiver<RendererMessage>>,
    ) -> Self {
        Self { tx, rx }
    }
}
