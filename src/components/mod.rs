//! UIコンポーネントモジュール

pub mod form_field;
pub mod submit_feedback;

pub use form_field::FormFieldInput;
pub use submit_feedback::SubmitFeedback;
