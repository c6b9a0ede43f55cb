//! # Vocabulary IO

pub mod vocab_io;

pub use vocab_io::{load_vocab_from_path, load_vocab_from_reader, save_vocab_to_path, save_vocab_to_writer};
