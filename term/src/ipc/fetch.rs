//! IPC handle for the fetch process thread.

use crate::ipc::{
    message::{FetchMessage, RendererMessage},
    traits::{IpcReceiver, IpcSender},
};

/// Combined IPC handle for the fetch process thread.
pub struct FetchIpc {
    pub tx: Box<dyn IpcSender<RendererMessage>>,
    pub rx: Box<dyn IpcReceiver<FetchMessage>>,
}

impl FetchIpc {
    /// Creates a new IPC handle with the given sender and receiver.
    pub fn new(
        tx: Box<dyn IpcSender<RendererMessage>>,
        rx: Box<dyn IpcReceiver<FetchMessage>>,
    ) -> Self {
        Self { tx, rx }
    }
}
