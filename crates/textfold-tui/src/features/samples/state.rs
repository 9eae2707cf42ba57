//! State for the sample list.

use std::cell::Cell;

use textfold_core::config::Config;
use textfold_core::fold::FoldState;
use textfold_core::measure::StyledText;

use super::cache::FoldCache;

/// One demo sample and its fold state.
#[derive(Debug)]
pub struct SampleState {
    /// Title shown above the sample body.
    pub title: String,
    /// Sanitized sample text.
    pub text: StyledText,
    /// Collapsed/expanded presentation state.
    pub fold: FoldState,
}

/// The sample list: entries, selection, scroll, and the fold cache.
#[derive(Debug)]
pub struct SamplesState {
    /// Samples in display order.
    pub samples: Vec<SampleState>,
    /// Index of the selected sample.
    pub selected: usize,
    /// First flattened line visible in the viewport. Adjusted while drawing
    /// to keep the selection visible, hence the `Cell`.
    pub scroll: Cell<usize>,
    /// Memoized fold renderings.
    pub cache: FoldCache,
}

impl SamplesState {
    pub fn new(config: &Config) -> Self {
        let style = config.text_style();
        let samples = config
            .samples()
            .into_iter()
            .map(|sample| SampleState {
                title: sample.title,
                text: StyledText::new(sample.text, style),
                fold: FoldState::default(),
            })
            .collect();
        Self {
            samples,
            selected: 0,
            scroll: Cell::new(0),
            cache: FoldCache::new(),
        }
    }
}
