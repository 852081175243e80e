//! Configuration module for the savings planner.

mod debug;
mod sliders;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use constants::CANVAS_ID;
pub use debug::DF;
pub use plot::PLOT_CONFIG;
pub use sliders::{DEFAULT_PARAMS, SLIDERS, SliderConfig, SliderSet};
