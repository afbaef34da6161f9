//! Support helpers for a mobile audio plugin
//!
//! This crate provides the stateless routines an audio recorder/player plugin
//! needs around its platform bridge: building error descriptors for
//! cross-boundary reporting, translating scripting-side recorder options into
//! platform-ready settings, and resolving/creating filesystem paths for
//! recordings.
//!
//! # Architecture
//!
//! - **Domain**: value objects and errors (`ErrorDescriptor`,
//!   `RecorderOptions`, `RecorderSettings`). No dependency on the OS.
//! - **Infrastructure**: the filesystem adapter (`paths`) for base directory
//!   lookup and directory creation.
//!
//! Everything is synchronous; only the two `create_directories*` functions
//! have side effects.

pub mod domain;
pub mod infrastructure;
