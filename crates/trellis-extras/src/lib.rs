#![forbid(unsafe_code)]

//! Feature-gated extras for trellis.
//!
//! Each module stands alone behind its own feature so applications pay
//! only for what they use:
//!
//! - `clipboard`: OSC 52 clipboard writer and copied-status tracking.
//! - `reltime`: relative wall-clock wording ("3 minutes ago").
//! - `highlight`: keyword/string/comment/number code tokenization.

#[cfg(feature = "clipboard")]
pub mod clipboard;

#[cfg(feature = "highlight")]
pub mod highlight;

#[cfg(feature = "reltime")]
pub mod reltime;
