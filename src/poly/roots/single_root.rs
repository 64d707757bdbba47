//! Root finders that refine one estimate at a time.

mod laguerre;
pub use laguerre::laguerre;
