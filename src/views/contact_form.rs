//! お問い合わせフォームビュー
//!
//! 送信するとメールクライアントの下書きを開く。サーバーには何も送らない。

use leptos::*;
use crate::components::{FormFieldInput, SubmitFeedback};
use crate::form::ContactForm;
use crate::models::FormField;
use crate::utils::log_trace::{log_error, log_info};
use crate::utils::open_mail_client;

// ============================================
// フォームのコンテキスト
// ============================================

/// フォーム状態（入力値・エラー・送信状態）を子コンポーネントと共有する
#[derive(Clone, Copy)]
pub struct ContactFormContext {
    pub form: ReadSignal<ContactForm>,
    pub set_form: WriteSignal<ContactForm>,
}

// ============================================
// フォーム本体
// ============================================

#[component]
pub fn ContactFormView() -> impl IntoView {
    let (form, set_form) = create_signal(ContactForm::new());
    let ctx = ContactFormContext { form, set_form };
    provide_context(ctx);

    let on_submit = move |ev: ev::SubmitEvent| {
        // ページ遷移は常に止める
        ev.prevent_default();

        let link = set_form.try_update(|form| form.submit()).flatten();
        if let Some(link) = link {
            match open_mail_client(&link.href()) {
                Ok(()) => log_info("mail-handoff", "mail client opened"),
                Err(e) => log_error("mail-handoff", &e),
            }
        }
    };

    view! {
        <div class="form-card">
            <form class="contact-form" novalidate=true on:submit=on_submit>
                {FormField::ALL.into_iter().map(|field| view! {
                    <FormFieldInput field=field />
                }).collect_view()}

                <button type="submit" class="submit-btn">
                    "Send Message"
                    <span class="send-icon" aria-hidden="true">"➤"</span>
                </button>

                <SubmitFeedback />
            </form>
        </div>
    }
}
