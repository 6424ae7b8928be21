//! Threshold classification of rainfall estimates

use crate::models::RainfallCategory;

/// Rainfall below this many millimeters is a drought situation
pub const DROUGHT_THRESHOLD_MM: f64 = 74.0;

/// Rainfall above this many millimeters is a flood situation
pub const FLOOD_THRESHOLD_MM: f64 = 120.0;

/// Categorize a rainfall estimate
///
/// Both comparisons are strict: an estimate exactly equal to either
/// threshold is `Normal`.
pub fn classify(rainfall_mm: f64) -> RainfallCategory {
    if rainfall_mm < DROUGHT_THRESHOLD_MM {
        RainfallCategory::Drought
    } else if rainfall_mm > FLOOD_THRESHOLD_MM {
        RainfallCategory::Flood
    } else {
        RainfallCategory::Normal
    }
}
