//! Sample list feature: a scrollable list of foldable demo texts.

mod cache;
mod render;
mod state;
mod update;

pub use cache::FoldCache;
pub use render::render_samples;
pub use state::{SampleState, SamplesState};
pub use update::{select_next, select_previous, toggle_selected};
