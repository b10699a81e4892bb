//! Session layer for hosts.
//!
//! - `Session`: Owns state, RNG, clock and store; entry point for input
//! - `Clock`: Monotonic time for the elapsed display
//! - `KeyValueStore` / `Preferences`: Best-effort persistence
//! - `SessionSnapshot`: Suspend and resume with bincode

mod clock;
mod driver;
mod snapshot;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::Session;
pub use snapshot::{SessionSnapshot, SnapshotError};
pub use store::{
    FileStore, KeyValueStore, MemoryStore, Preferences, StoreError, ACCESSIBILITY_KEY,
    BEST_SCORE_KEY, HAS_PLAYED_KEY,
};
