//! Events consumed by the reducer.
//!
//! The runtime translates terminal input and timing into `UiEvent`s and
//! feeds them to `update::update`. Keeping the event type small makes the
//! reducer easy to test without a real terminal.

/// Events that drive state updates.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic heartbeat used to pace redraws.
    Tick,
    /// Terminal dimensions sampled at the top of each loop iteration.
    Frame { width: u16, height: u16 },
    /// Raw terminal input from crossterm.
    Terminal(crossterm::event::Event),
}
