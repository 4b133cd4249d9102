//! 入力チェック
//!
//! 各ルールは独立して評価する（途中で打ち切らない）。

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{FormData, FormErrors, FormField};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

pub const MESSAGE_MIN_LENGTH: usize = 10;

/// ブラウザ (ECMAScript) の空白文字: WhiteSpace + LineTerminator
///
/// `char::is_whitespace` や regex の `\s` とは U+0085 / U+FEFF の扱いが違う
const JS_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// local@domain.tld の大まかな形だけを見る（RFC 5322 準拠ではない）
///
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` の `\s` をブラウザの空白文字に置き換えたもの
fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        let part = format!("[^{}@]+", JS_WHITESPACE_CLASS);
        Regex::new(&format!(r"^{part}@{part}\.{part}$", part = part)).unwrap()
    })
}

/// 前後の空白（ブラウザの trim と同じ文字）を除くと空になるか
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_js_whitespace).is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// 文字数（textarea の maxlength と同じ UTF-16 単位）
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// 1フィールド分のチェック。問題があればエラーメッセージを返す
pub fn check_field(field: FormField, value: &str) -> Option<&'static str> {
    match field {
        FormField::Name => is_blank(value).then_some(NAME_REQUIRED),
        FormField::Email => {
            if is_blank(value) {
                Some(EMAIL_REQUIRED)
            } else if !is_valid_email(value) {
                Some(EMAIL_INVALID)
            } else {
                None
            }
        }
        FormField::Subject => is_blank(value).then_some(SUBJECT_REQUIRED),
        FormField::Message => {
            if is_blank(value) {
                Some(MESSAGE_REQUIRED)
            } else if text_length(value) < MESSAGE_MIN_LENGTH {
                Some(MESSAGE_TOO_SHORT)
            } else {
                None
            }
        }
    }
}

/// 全フィールドをチェックし、新しいエラー一覧を作る
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in FormField::ALL {
        if let Some(message) = check_field(field, data.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}
