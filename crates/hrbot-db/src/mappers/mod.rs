//! Model → entity mappers
//!
//! Conversions are fallible: stored timestamps and list types are text and
//! may not parse.

mod audit;
mod blacklist;
