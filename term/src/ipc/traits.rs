//! Channel seams between the renderer and the fetch worker.
//!
//! The renderer holds a sender of [`FetchMessage`](super::message::FetchMessage)
//! and a receiver of [`RendererMessage`](super::message::RendererMessage); the
//! fetch worker holds the opposite ends. Both sides only see these traits so
//! tests can swap in mocks.

#[cfg(test)]
use mockall::automock;

use color_eyre::eyre::Result;

/// Outgoing end of a channel. Fails once the other side has hung up.
#[cfg_attr(test, automock)]
pub trait IpcSender<T: Send>: Send {
    /// Queues `m` for the other side and returns without waiting.
    fn send(&self, m: T) -> Result<()>;
    /// Another handle to the same channel, e.g. for the store's effect hook.
    fn box_clone(&self) -> Box<dyn IpcSender<T>>;
}

/// Incoming end of a channel.
#[cfg_attr(test, automock)]
pub trait IpcReceiver<T: Send>: Send {
    /// Waits for the next message. Errors once every sender is dropped,
    /// which is how the fetch worker notices the renderer is gone.
    fn recv(&self) -> Result<T>;
    /// Next queued message, or an error when the queue is empty. The
    /// renderer drains settled fetches with this between frames.
    fn try_recv(&self) -> Result<T>;
}
