//! フォーム入力欄コンポーネント
//!
//! ラベル・入力欄・エラー表示の1セット

use leptos::*;
use crate::models::FormField;
use crate::utils::log_trace::log_warn;
use crate::views::ContactFormContext;

/// 入力イベントの name 属性から対象フィールドを特定して反映
fn on_field_input(ctx: ContactFormContext, ev: &ev::Event) {
    let target: web_sys::Element = event_target(ev);
    let name = target.get_attribute("name").unwrap_or_default();
    match name.parse::<FormField>() {
        Ok(field) => {
            let value = event_target_value(ev);
            ctx.set_form.update(|form| form.change(field, value));
        }
        Err(e) => log_warn("contact-form", &e.to_string()),
    }
}

/// 入力欄の下に出すエラーメッセージ
#[component]
pub fn FieldError(field: FormField) -> impl IntoView {
    let ctx = use_context::<ContactFormContext>().expect("ContactFormContext not found");
    let message = move || ctx.form.with(|form| form.error(field).map(str::to_string));

    view! {
        {move || message().map(|m| view! {
            <p class="field-error" id=format!("{}-error", field.as_str())>
                <span class="alert-icon" aria-hidden="true">"⚠"</span>
                {m}
            </p>
        })}
    }
}

#[component]
pub fn FormFieldInput(field: FormField) -> impl IntoView {
    let ctx = use_context::<ContactFormContext>().expect("ContactFormContext not found");
    let value = move || ctx.form.with(|form| form.value(field).to_string());
    let invalid = move || ctx.form.with(|form| form.error(field).is_some());
    let on_input = move |ev: ev::Event| on_field_input(ctx, &ev);

    let input = if field.is_multiline() {
        view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="4"
                class="form-input"
                placeholder=field.placeholder()
                aria-invalid=move || invalid().to_string()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                type=field.input_type()
                id=field.as_str()
                name=field.as_str()
                class="form-input"
                placeholder=field.placeholder()
                aria-invalid=move || invalid().to_string()
                prop:value=value
                on:input=on_input
            />
        }
        .into_view()
    };

    view! {
        <div class="form-field">
            <label for=field.as_str()>{field.label()}</label>
            {input}
            <FieldError field=field />
        </div>
    }
}
