//! # Block Walking
//!
//! Groups the flat token stream into top-level blocks.
//!
//! ## Dispatch
//!
//! One `(kind, tag)` match per token at block scope:
//!
//! - **heading / paragraph open**: body up to the balancing close, resolved inline
//! - **bullet / ordered list open**: one inline resolution per top-level item
//! - **fence**: `CodeBlock` with the raw payload
//! - **self-closing image**: `ImageBlock`, omitted without a `src`
//! - anything else is skipped
//!
//! ## Modules
//!
//! - **`walker`**: `walk()` main loop
//! - **`list`**: list item extraction and ordered list start numbers
//!
//! ## Key Invariants
//!
//! - Output order is document order; no block is emitted twice
//! - A block whose close never arrives ends at the end of the stream
//! - Lists are flat: nested lists become text inside their parent item

pub mod list;
pub mod walker;

pub use walker::walk;
