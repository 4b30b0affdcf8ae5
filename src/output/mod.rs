//! Output tree subsystem.
//!
//! # Data Flow
//! ```text
//! Run start:
//!     tree.rs clear(output_path)      → whole previous tree removed
//!
//! Per generated route:
//!     layout.rs output_file_for(base, uri) → {base}/{uri}/index.html
//!     tree.rs ensure_dir(parent)           → missing directories created
//!     tree.rs write_file(file, body)       → body written, overwriting
//! ```
//!
//! # Design Decisions
//! - The output tree is owned exclusively by one run
//! - Filesystem errors are returned, never swallowed
//! - Route URIs cannot address anything outside the output tree

pub mod layout;
pub mod tree;

pub use layout::{output_file_for, INDEX_FILE};
pub use tree::{clear, ensure_dir, write_file};
