//! Provides the `signal` macro for creating event broadcast channels
//! ```
//! use std::sync::Arc;
//! use event::signal;
//!
//! // Signals are created using the `signal` macro
//! #[derive(Debug)]
//! pub struct UptimeEvent(u64);
//!
//! signal!(UptimeSignal, UptimeRecv, UptimeEvent);
//!
//! // Creating signal
//! let signal = UptimeSignal::new(16);
//!
//! // Sending events through signal
//! async fn poll(signal: UptimeSignal, amount: u64) {
//!     for uptime in 0..amount {
//!         signal.signal(UptimeEvent(uptime));
//!     }
//! }
//!
//! // Creating receiver, and receiving events through it
//! async fn uptime_listening_loop(signal: UptimeSignal) {
//!     let mut receiver: UptimeRecv = signal.connect();
//!     loop {
//!         let uptime: Arc<UptimeEvent> = receiver.recv().await.expect("Too much updates!");
//!         println!("Up for {}s", uptime.0);
//!     }
//! }
//! ```

#[macro_export]
/// Create an event signal and receiver for an event type
///
/// Takes a name for the signal, a name for the receiver, and the type of event.
/// ```
/// use event::signal;
///
/// #[derive(Debug)]
/// struct UptimeEvent(u64);
///
/// signal!(UptimeSignal, UptimeRecv, UptimeEvent);
/// ```
/// The receiver type it creates is a type alias of [`Receiver`] that receives the event type
/// wrapped in [`Arc`].
///
/// [`Receiver`]: tokio::sync::broadcast::Receiver
/// [`Arc`]: std::sync::Arc
macro_rules! signal {
    ($sig_name:ident, $recv_name:ident, $event:ty) => {
        /// Event signal
        #[derive(Debug, Clone)]
        pub struct $sig_name(::std::sync::Arc<::tokio::sync::broadcast::Sender<::std::sync::Arc<$event>>>);

        /// Event receiver
        ///
        /// Type alias of [`Receiver`] that receives the event type wrapped in [`Arc`].
        ///
        /// [`Receiver`]: tokio::sync::broadcast::Receiver
        /// [`Arc`]: std::sync::Arc
        pub type $recv_name = ::tokio::sync::broadcast::Receiver<::std::sync::Arc<$event>>;

        impl $sig_name {
            /// Create a new signal
            pub fn new(capacity: usize) -> Self {
                let (sender, _) = ::tokio::sync::broadcast::channel(capacity);
                Self(::std::sync::Arc::new(sender))
            }

            /// Return a receiver for this signal
            pub fn connect(&self) -> $recv_name {
                self.0.subscribe()
            }

            /// Broadcast an event through this signal.
            ///
            /// The event isn't sent if there are no receivers.
            pub fn signal(&self, event: $event) {
                if self.0.receiver_count() > 0 {
                    let _ = self.0.send(::std::sync::Arc::new(event));
                }
            }
        }
    };
}
