//! Page range math and chunk planning.
//!
//! Resolves the user's count/start/end into an inclusive index range and
//! splits it into contiguous chunks, one per worker.

mod chunk;
mod range;

pub use chunk::{plan_chunks, Chunk};
pub use range::{PageRange, PageSelection};
