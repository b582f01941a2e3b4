//! A generic two-slot container with capability-based access views, plus
//! small path and file helpers. The demo binaries under `src/bin/` walk
//! through each piece.

mod access;
pub use access::{has_empty_slot, read_both, set_same, PairSink, PairSource};

mod error;
pub use error::FileError;

mod files;
pub use files::*;

mod pair;
pub use pair::Pair;

mod paths;
pub use paths::*;
