//! 送信結果メッセージ

use leptos::*;
use crate::models::SubmitStatus;
use crate::views::ContactFormContext;

pub const SUCCESS_MESSAGE: &str = "Your message has been sent!";
pub const ERROR_MESSAGE: &str = "Please fix the errors above.";

/// 直近の送信結果に応じたメッセージ（idle は何も出さない）
#[component]
pub fn SubmitFeedback() -> impl IntoView {
    let ctx = use_context::<ContactFormContext>().expect("ContactFormContext not found");

    view! {
        {move || match ctx.form.with(|form| form.status()) {
            SubmitStatus::Success => view! {
                <p class="submit-feedback success" role="status">{SUCCESS_MESSAGE}</p>
            }.into_view(),
            SubmitStatus::Error => view! {
                <p class="submit-feedback error" role="alert">{ERROR_MESSAGE}</p>
            }.into_view(),
            SubmitStatus::Idle => view! { <></> }.into_view(),
        }}
    }
}
