pub mod classification;
pub mod record;
pub mod scores;
pub mod thresholds;
pub mod values;
pub mod weights;
