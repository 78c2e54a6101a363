//! Provides [`StatusEvent`] and types to send/receive it.
//!
//! Use [`StatusSignal`] to send events, and [`StatusRecv`] to receive them. See [`event`]
//! for more info.
//!
//! You don't need to broadcast events yourself, this crate provides the function
//! [`start_loops`] for starting the polling loop.
//!
//! [`start_loops`]: crate::loops::start_loops
use event::signal;

/// D2gs realm status updates
#[derive(Debug, Clone)]
pub enum StatusEvent {
    /// The realm answered its status poll
    D2gsUp { uptime: String },
    /// The poll failed, or the status document reports an internal error
    D2gsDown { reason: String },
}

signal!(StatusSignal, StatusRecv, StatusEvent);
