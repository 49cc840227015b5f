#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
extern crate libc;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate tempfile;

#[macro_use]
pub mod utils;

pub mod config;
pub mod devmem;
pub mod diag;
pub mod errors;
pub mod hwcore;
pub mod platform;
pub mod regs;
pub mod vec;
