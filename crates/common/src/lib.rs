//! Process-level helpers shared by the server crate and the binary.

pub mod shutdown;
pub mod utils;
