pub mod signal_timer;

pub use signal_timer::SignalTimer;
