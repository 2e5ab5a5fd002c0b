pub mod analysis;
pub mod property;

pub(crate) const ZONE_LEFT_BOUNDARY: f32 = 0.33; // left third ends here
pub(crate) const ZONE_RIGHT_BOUNDARY: f32 = 0.67; // right third starts here

// Averaged relative box size thresholds for the five distance bands.
pub(crate) const SIZE_VERY_CLOSE: f32 = 0.4;
pub(crate) const SIZE_CLOSE: f32 = 0.2;
pub(crate) const SIZE_MEDIUM: f32 = 0.1;
pub(crate) const SIZE_FAR: f32 = 0.05;

// Representative distances per band, in arbitrary walking units. Only
// their ordering and the clearance thresholds in PlannerConfig matter.
pub(crate) const DIST_VERY_CLOSE: f32 = 0.5;
pub(crate) const DIST_CLOSE: f32 = 1.5;
pub(crate) const DIST_MEDIUM: f32 = 3.0;
pub(crate) const DIST_FAR: f32 = 5.0;
pub(crate) const DIST_VERY_FAR: f32 = 8.0;

// Barrier hypotheses only count when roughly centered in the frame.
pub(crate) const BARRIER_CENTER_MIN: f32 = 0.25;
pub(crate) const BARRIER_CENTER_MAX: f32 = 0.75;

// The empty-frame wall hypothesis covers the central 80% of the frame at
// a deliberately low confidence.
pub(crate) const EMPTY_FRAME_WALL_MARGIN: f32 = 0.1;
pub(crate) const EMPTY_FRAME_WALL_CONFIDENCE: f32 = 0.3;
