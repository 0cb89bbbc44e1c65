mod segment;
mod triangle;

pub use segment::Segment;
pub use triangle::Triangle;
