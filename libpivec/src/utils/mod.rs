#[macro_use]
mod bitutils;
mod strutils;

pub use self::strutils::*;
