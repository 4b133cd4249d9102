//! ビルド時設定

/// 送信先アドレス（CONTACT_RECIPIENT 未指定時）
pub const DEFAULT_RECIPIENT: &str = "dan@mafua.com.br";

/// お問い合わせの送信先（ビルド時に埋め込み）
pub fn recipient() -> &'static str {
    resolve_recipient(option_env!("CONTACT_RECIPIENT"))
}

fn resolve_recipient(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_RECIPIENT)
}
