//! Port implementations.
//!
//! - `JsonFileSource`: reads a catalogue from a JSON file
//! - `InMemorySource`: fixed list, for tests and embedding

pub mod inmem;
pub mod json_file;

pub use self::inmem::InMemorySource;
pub use self::json_file::JsonFileSource;
