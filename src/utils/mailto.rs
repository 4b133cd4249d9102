//! mailto: リンク生成
//!
//! メールは送信しない。メールクライアントに下書きを開かせるだけ。

use std::fmt;

use crate::models::FormData;

/// 本文を組み立てる
///
/// ```text
/// Name: <name>
/// Email: <email>
///
/// <message>
/// ```
pub fn compose_body(data: &FormData) -> String {
    [
        format!("Name: {}", data.name),
        format!("Email: {}", data.email),
        String::new(),
        data.message.clone(),
    ]
    .join("\n")
}

/// URIのクエリ部分に入れられる形にパーセントエンコード
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    subject: String,
    body: String,
}

impl MailtoLink {
    /// 件名・本文はエンコード前の文字列を渡す
    pub fn new(recipient: &str, subject: &str, body: &str) -> Self {
        MailtoLink {
            recipient: recipient.to_string(),
            subject: encode_component(subject),
            body: encode_component(body),
        }
    }

    /// フォーム内容から下書きリンクを作る
    pub fn from_form(recipient: &str, data: &FormData) -> Self {
        Self::new(recipient, &data.subject, &compose_body(data))
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// エンコード済みの件名
    #[cfg(test)]
    pub fn encoded_subject(&self) -> &str {
        &self.subject
    }

    /// エンコード済みの本文
    #[cfg(test)]
    pub fn encoded_body(&self) -> &str {
        &self.body
    }

    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.recipient, self.subject, self.body
        )
    }
}
