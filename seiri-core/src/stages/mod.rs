//! Pipeline stages
//!
//! Data flows strictly forward: strip, normalize, segment, reflow. No stage
//! reads the output of a later stage, and every stage is a total function
//! over its input text.

pub mod normalize;
pub mod reflow;
pub mod segment;
pub mod strip;

pub use normalize::{BreakPolicy, PunctuationNormalizer};
pub use reflow::{CountReflower, LengthReflower};
pub use segment::{LineSegmenter, RuleSegmenter, Segment};
pub use strip::NoiseStripper;

/// Internal marker for an explicit paragraph break, restored as a blank line
/// when paragraphs are joined. The stripper removes any occurrence found in
/// raw input so callers cannot forge a break.
pub(crate) const PARAGRAPH_SENTINEL: char = '\u{001E}';
