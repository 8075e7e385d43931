use serde::Serialize;

/// Callbacks into the host UI.
///
/// The session calls these at fixed points of its state machine; it never reads anything back.
pub trait UiHooks {
    /// Show slider, kind selector and overlay toggles.
    fn show_editing_controls(&mut self);
    /// Hide the controls shown by [`UiHooks::show_editing_controls`].
    fn hide_editing_controls(&mut self);
    /// Show the busy indicator of an outstanding solver request.
    fn show_loading_indicator(&mut self);
    /// Hide the busy indicator.
    fn hide_loading_indicator(&mut self);
    /// Replace the mode hint line; empty text clears it.
    fn report_mode_hint(&mut self, text: &str);
    /// Present a user-facing error message.
    fn report_error(&mut self, message: &str);
}

/// One recorded [`UiHooks`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "text", rename_all = "snake_case")]
pub enum UiEvent {
    /// `show_editing_controls`
    ShowEditingControls,
    /// `hide_editing_controls`
    HideEditingControls,
    /// `show_loading_indicator`
    ShowLoadingIndicator,
    /// `hide_loading_indicator`
    HideLoadingIndicator,
    /// `report_mode_hint`
    ModeHint(String),
    /// `report_error`
    Error(String),
}

/// In-memory UI for tests and the replay tool.
#[derive(Debug, Default)]
pub struct RecordingUi {
    events: Vec<UiEvent>,
}

impl RecordingUi {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Reported errors in order.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Most recent mode hint, if any was reported.
    pub fn last_hint(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            UiEvent::ModeHint(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Return `true` when the loading indicator is currently shown.
    pub fn is_loading(&self) -> bool {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                UiEvent::ShowLoadingIndicator => Some(true),
                UiEvent::HideLoadingIndicator => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Drop recorded calls.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl UiHooks for RecordingUi {
    fn show_editing_controls(&mut self) {
        self.events.push(UiEvent::ShowEditingControls);
    }

    fn hide_editing_controls(&mut self) {
        self.events.push(UiEvent::HideEditingControls);
    }

    fn show_loading_indicator(&mut self) {
        self.events.push(UiEvent::ShowLoadingIndicator);
    }

    fn hide_loading_indicator(&mut self) {
        self.events.push(UiEvent::HideLoadingIndicator);
    }

    fn report_mode_hint(&mut self, text: &str) {
        self.events.push(UiEvent::ModeHint(text.to_owned()));
    }

    fn report_error(&mut self, message: &str) {
        self.events.push(UiEvent::Error(message.to_owned()));
    }
}
