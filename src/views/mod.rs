//! ビューモジュール

pub mod contact_form;
pub mod landing;

pub use contact_form::{ContactFormContext, ContactFormView};
pub use landing::LandingPage;
