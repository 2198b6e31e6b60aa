mod segments;

pub use segments::{Segments, segments};
