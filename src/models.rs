//! データ構造体モジュール

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================
// フォーム入力値
// ============================================

/// お問い合わせフォームの入力値（ページ表示中のみメモリに保持）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

// ============================================
// フィールド識別子
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// 画面上の表示順
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// input要素の name / id 属性
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "you@email.com",
            FormField::Subject => "What is it about?",
            FormField::Message => "Your message here...",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            _ => "text",
        }
    }

    /// 複数行入力（textarea）かどうか
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Message)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "subject" => Ok(FormField::Subject),
            "message" => Ok(FormField::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

// ============================================
// バリデーションエラー
// ============================================

/// フィールドごとのエラーメッセージ（None = エラーなし）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// エラーを取り除き、元のメッセージを返す
    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.slot_mut(field).take()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.slot(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| !self.contains(*f))
    }

    pub fn len(&self) -> usize {
        FormField::ALL.iter().filter(|f| self.contains(**f)).count()
    }

    /// エラーのあるフィールド（表示順）
    pub fn fields(&self) -> Vec<FormField> {
        FormField::ALL.into_iter().filter(|f| self.contains(*f)).collect()
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }
}

// ============================================
// 送信状態
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_attribute() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = "phone".parse::<FormField>().unwrap_err();
        assert_eq!(err, UnknownField("phone".to_string()));
        assert_eq!(err.to_string(), "unknown form field: phone");
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multiline: Vec<_> = FormField::ALL.into_iter().filter(|f| f.is_multiline()).collect();
        assert_eq!(multiline, vec![FormField::Message]);
        assert_eq!(FormField::Email.input_type(), "email");
        assert_eq!(FormField::Subject.input_type(), "text");
    }

    #[test]
    fn test_form_data_set_and_get() {
        let mut data = FormData::default();
        assert!(data.is_empty());
        data.set(FormField::Subject, "Hi".to_string());
        assert_eq!(data.get(FormField::Subject), "Hi");
        assert_eq!(data.subject, "Hi");
        assert!(!data.is_empty());
    }

    #[test]
    fn test_form_errors_insert_remove() {
        let mut errors = FormErrors::default();
        assert!(errors.is_empty());

        errors.insert(FormField::Email, "Email is required");
        errors.insert(FormField::Message, "Message is required");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields(), vec![FormField::Email, FormField::Message]);
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));

        assert_eq!(errors.remove(FormField::Email).as_deref(), Some("Email is required"));
        assert_eq!(errors.remove(FormField::Email), None);
        assert_eq!(errors.fields(), vec![FormField::Message]);
    }

    #[test]
    fn test_form_errors_serialize_only_present_fields() {
        let mut errors = FormErrors::default();
        errors.insert(FormField::Name, "Name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Name is required" }));
    }

    #[test]
    fn test_submit_status_defaults_to_idle() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert_eq!(serde_json::to_string(&SubmitStatus::Success).unwrap(), "\"success\"");
    }
}
