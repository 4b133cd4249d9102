//! ユーティリティモジュール

pub mod config;
pub mod log_trace;
pub mod mailto;
pub mod validation;

/// 下書きリンクへ遷移してメールクライアントに渡す
///
/// 実際に送信されたかは確認できない。
#[cfg(target_arch = "wasm32")]
pub fn open_mail_client(href: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window not available")?;
    window
        .location()
        .set_href(href)
        .map_err(|e| format!("failed to open mail client: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_mail_client(_href: &str) -> Result<(), String> {
    Err("not running in a browser".to_string())
}
