mod border_extractor;
mod border_segment;

pub use border_extractor::extract_borders;
pub use border_segment::{BorderSegment, SegmentOrientation};
