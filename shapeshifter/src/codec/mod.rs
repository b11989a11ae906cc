//! Dump codec
//!
//! - `read` - Decoding a dump into a [`Config`](crate::Config)
//! - `write` - Encoding a config back into a dump, the exact inverse of `read`
//! - `tests` - Codec test suite

mod read;
mod write;


pub use read::{read_config, read_config_with};
pub use write::{write_config, write_config_with};
