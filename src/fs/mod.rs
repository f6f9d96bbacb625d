//! Filesystem utilities for archprompt.
//!
//! Rendered prompts and starter configs are written atomically so a reader
//! never sees a half-written file.

pub mod atomic;

pub use atomic::atomic_write_file;
