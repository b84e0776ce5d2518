//! Tree-construction fixtures: the line-oriented `#data`/`#errors`/`#document`
//! format and its two on-disk flavors.

pub mod fixture;
pub mod parser;
