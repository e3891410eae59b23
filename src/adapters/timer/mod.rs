//! Timer adapters.

mod countdown_ticker;

pub use countdown_ticker::{CountdownTicker, TickerHandle, TimerTick};
