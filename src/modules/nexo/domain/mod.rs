pub mod nexo;
pub mod watch_state;

pub use nexo::{NewNexo, Nexo, NexoPatch};
pub use watch_state::WatchState;
