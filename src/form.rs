//! お問い合わせフォームの状態管理
//!
//! 入力値・エラー・送信状態をひとまとめに持ち、画面側はイベントごとに
//! `change` / `submit` を呼ぶだけにする。

use serde_json::json;

use crate::models::{FormData, FormErrors, FormField, SubmitStatus};
use crate::utils::config;
use crate::utils::log_trace::{log_info_with_data, log_warn};
use crate::utils::mailto::MailtoLink;
use crate::utils::validation;

const LOG_CATEGORY: &str = "contact-form";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    data: FormData,
    errors: FormErrors,
    status: SubmitStatus,
    recipient: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送信先を差し替える（通常はビルド時設定を使う）
    #[cfg(test)]
    pub fn with_recipient(recipient: impl Into<String>) -> Self {
        ContactForm {
            recipient: Some(recipient.into()),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn recipient(&self) -> &str {
        match &self.recipient {
            Some(recipient) => recipient.as_str(),
            None => config::recipient(),
        }
    }

    /// 入力変更
    ///
    /// そのフィールドのエラーは再チェックせずに消す。
    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.remove(field);
    }

    /// 全フィールドをチェックしてエラーを置き換える
    pub fn validate(&mut self) -> bool {
        self.errors = validation::validate(&self.data);
        self.errors.is_empty()
    }

    /// 送信
    ///
    /// チェックを通れば下書きリンクを返し、入力をクリアする。
    /// 失敗時は入力をそのまま残して `None`。
    pub fn submit(&mut self) -> Option<MailtoLink> {
        if !self.validate() {
            self.status = SubmitStatus::Error;
            let fields: Vec<&str> = self.errors().fields().iter().map(|f| f.as_str()).collect();
            log_warn(
                LOG_CATEGORY,
                &format!("validation failed ({} fields): {}", self.errors().len(), fields.join(", ")),
            );
            return None;
        }

        let link = MailtoLink::from_form(self.recipient(), &self.data);
        log_info_with_data(
            LOG_CATEGORY,
            "message ready for mail client",
            json!({
                "recipient": link.recipient(),
                "subject_length": validation::text_length(&self.data.subject),
                "message_length": validation::text_length(&self.data.message),
            }),
        );

        self.status = SubmitStatus::Success;
        self.data = FormData::default();
        Some(link)
    }
}
