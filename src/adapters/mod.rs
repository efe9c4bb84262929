// Adapters layer: concrete implementations of the domain ports (clock, http, storage).

pub mod clock;
pub mod dismissals;
pub mod http;
