//! Types relevant to multiple parts of the library.

pub mod err;
