//! Fill crossword grids by constraint solving

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod puzzle;
pub mod solve;

pub(crate) type HashSet<T> = ahash::AHashSet<T>;
pub(crate) type LinkedHashSet<T> = linked_hash_set::LinkedHashSet<T, ahash::RandomState>;
