mod components;
mod form;
mod models;
mod utils;
mod views;

use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;
use utils::log_trace::{get_logs_json, log_info};
use views::LandingPage;

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="app">
            <LandingPage />
        </main>
    }
}

/// 開発者ツールから `contactFormLogs()` でトレースログを確認する
#[wasm_bindgen(js_name = contactFormLogs)]
pub fn contact_form_logs() -> String {
    get_logs_json()
}

fn main() {
    console_error_panic_hook::set_once();
    log_info("app", &format!("mounted (recipient: {})", utils::config::recipient()));
    mount_to_body(App);
}
