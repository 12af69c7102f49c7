//! IpcSender / IpcReceiver implementations backed by std mpsc channels.

use color_eyre::eyre::{Context, Result, eyre};
use std::sync::mpsc::{Receiver, Sender};

use crate::ipc::traits::{IpcReceiver, IpcSender};

/// Sends messages of type T over an mpsc channel.
pub struct ChannelSender<T> {
    tx: Sender<T>,
}

impl<T> ChannelSender<T> {
    /// Creates a new sender wrapping the given channel.
    pub fn new(tx: Sender<T>) -> Self {
        Self { tx }
    }
}

impl<T: Send + 'static> IpcSender<T> for ChannelSender<T> {
    fn send(&self, m: T) -> Result<()> {
        self.tx
            .send(m)
            .map_err(|_| eyre!("failed to send message: receiving end hung up"))
    }

    fn box_clone(&self) -> Box<dyn IpcSender<T>> {
        Box::new(Self {
            tx: self.tx.clone(),
        })
    }
}

/// Receives messages of type T from an mpsc channel.
pub struct ChannelReceiver<T> {
    rx: Receiver<T>,
}

impl<T> ChannelReceiver<T> {
    /// Creates a new receiver wrapping the given channel.
    pub fn new(rx: Receiver<T>) -> Self {
        Self { rx }
    }
}

impl<T: Send> IpcReceiver<T> for ChannelReceiver<T> {
    fn recv(&self) -> Result<T> {
        self.rx
            .recv()
            .wrap_err("failed to receive message from channel")
    }

    fn try_recv(&self) -> Result<T> {
        self.rx
            .try_recv()
            .wrap_err("failed to receive from channel")
    }
}

#[cfg(test)]
#[path = "./channel_tests.rs"]
mod tests;
