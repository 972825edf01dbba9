//! Client view for the question card.
//!
//! DESIGN
//! ======
//! State is split the same way a page component would split it: `state`
//! holds the plain [`ViewState`] model, `api` talks to the generation
//! endpoint, and `controller` runs one generation cycle at a time over both.
//! Front-ends (the terminal client, tests) subscribe to state changes and
//! render whatever they see.

pub mod api;
pub mod controller;
pub mod state;

pub use api::{ApiError, HttpQuestionApi, QuestionApi};
pub use controller::{FadeTimings, QuestionView};
pub use state::ViewState;
