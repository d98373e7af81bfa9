//! Application services.

mod materializer;

pub use materializer::Materializer;
