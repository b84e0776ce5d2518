//! Offline generators that turn html5lib conformance fixtures into compilable
//! C# test sources. The library holds the fixture readers, the token stream
//! normalizer and the source emitters; the binaries in `src/bin` wire them to
//! the command line.

pub mod emitter;
pub mod tokenizer;
pub mod tree_construction;
pub mod types;
