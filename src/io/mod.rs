//! Reading MLAB files.
//!
//! The file is a sequence of captioned sections separated by divider lines.
//! [`BlockReader`] splits the stream into blocks, its `decode_*` methods turn
//! single blocks into typed values, and [`parse`] assembles those values into
//! a [`Container`](crate::Container).

pub mod caption;
mod decode;
mod error;
mod parser;
mod reader;

pub use error::Error;
pub use parser::{parse, read_file};
pub use reader::{BlockReader, is_divider};
