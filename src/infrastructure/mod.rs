//! Infrastructure layer - filesystem adapter
//!
//! Contains the code that talks to the operating system: base directory
//! lookup and directory creation.

pub mod paths;
