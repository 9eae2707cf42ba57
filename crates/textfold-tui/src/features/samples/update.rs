//! Selection and fold mutations for the sample list.

use super::state::SamplesState;

/// Moves the selection up one sample.
pub fn select_previous(samples: &mut SamplesState) {
    samples.selected = samples.selected.saturating_sub(1);
}

/// Moves the selection down one sample.
pub fn select_next(samples: &mut SamplesState) {
    if samples.selected + 1 < samples.samples.len() {
        samples.selected += 1;
    }
}

/// Toggles the selected sample between collapsed and expanded.
pub fn toggle_selected(samples: &mut SamplesState) {
    let selected = samples.selected;
    if let Some(sample) = samples.samples.get_mut(selected) {
        sample.fold = sample.fold.toggle();
        samples.cache.invalidate_sample(selected);
        tracing::debug!(sample = selected, fold = ?sample.fold, "fold toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textfold_core::config::Config;
    use textfold_core::fold::FoldState;

    fn samples_state() -> SamplesState {
        SamplesState::new(&Config::default())
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut samples = samples_state();
        select_previous(&mut samples);
        assert_eq!(samples.selected, 0);
        for _ in 0..100 {
            select_next(&mut samples);
        }
        assert_eq!(samples.selected, samples.samples.len() - 1);
    }

    #[test]
    fn test_toggle_flips_fold_state() {
        let mut samples = samples_state();
        assert_eq!(samples.samples[0].fold, FoldState::Collapsed);
        toggle_selected(&mut samples);
        assert_eq!(samples.samples[0].fold, FoldState::Expanded);
        toggle_selected(&mut samples);
        assert_eq!(samples.samples[0].fold, FoldState::Collapsed);
    }

    #[test]
    fn test_toggle_invalidates_cached_rendering() {
        let mut samples = samples_state();
        samples.cache.insert(0, 80, FoldState::Collapsed, vec![]);
        toggle_selected(&mut samples);
        assert!(samples.cache.is_empty());
    }
}
