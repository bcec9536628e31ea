//! Headless replay: tour + page layout in, one JSON record per step out.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use spotlight_tour::config::TourDefinition;
use spotlight_tour::headless::{HeadlessHost, HeadlessPage, PageLayout};

use crate::CliError;

/// Play the tour start to finish and encode each settled step.
pub(crate) fn replay(tour_json: &str, page_json: &str, frame_ms: f64, pretty: bool) -> Result<Vec<String>, CliError> {
    if !(frame_ms.is_finite() && frame_ms > 0.0) {
        return Err(CliError::InvalidFrameMs(frame_ms));
    }
    let definition = TourDefinition::from_json(tour_json)?;
    let layout = PageLayout::from_json(page_json).map_err(CliError::Page)?;

    for step in &definition.steps {
        if !layout.elements.contains_key(&step.selector) {
            tracing::warn!(id = %step.id, selector = %step.selector, "step target not in page layout");
        }
    }

    let mut host = HeadlessHost::new(definition, HeadlessPage::from_layout(&layout)).with_frame_ms(frame_ms);
    host.replay()
        .iter()
        .map(|snapshot| {
            let encoded = if pretty { serde_json::to_string_pretty(snapshot) } else { serde_json::to_string(snapshot) };
            encoded.map_err(CliError::Encode)
        })
        .collect()
}
