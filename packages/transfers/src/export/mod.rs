//! CSV output generation for transfer tables.

mod writer;

pub use writer::{generate_csv, save_csv, write_csv};
