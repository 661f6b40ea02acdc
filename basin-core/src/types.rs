/// Identifier for an attractor in an [`crate::attractor::AttractorSet`].
///
/// This is an index into `AttractorSet::points`, and is only meaningful
/// within the lifetime of a given set. It is the value encoded into
/// captured pixels of a basin map.
pub type AttractorId = usize;
