#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// UI state for the question card.
///
/// `displayed_question` is only ever copied from `pending_question`; the
/// controller never writes question text into it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub topic: String,
    pub topic_input_visible: bool,
    pub pending_question: Option<String>,
    pub displayed_question: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ViewState {
    /// The large "create" button stands in for the card until a question arrives.
    #[must_use]
    pub fn shows_create_button(&self) -> bool {
        self.pending_question.is_none()
    }

    /// The card stays up while a new question loads over an old one.
    #[must_use]
    pub fn card_visible(&self) -> bool {
        self.displayed_question.is_some() || (self.is_loading && self.pending_question.is_some())
    }
}
