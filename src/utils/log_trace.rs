//! 時系列トレースログ
//! フォーム操作を記録し、ブラウザのコンソールにも出力する
//!
//! ページを閉じると消える（localStorage には保存しない）

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String, // "contact-form", "mail-handoff"
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }
}

impl LogTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn log(&mut self, level: LogLevel, category: &str, message: &str, data: Option<serde_json::Value>) {
        write_console(level, category, message);

        if self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            timestamp: now_iso(),
            level,
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
    }

    #[cfg(test)]
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, category: &str, message: &str) {
    let line = wasm_bindgen::JsValue::from_str(&format!("[{}] {}", category, message));
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, _category: &str, _message: &str) {}

#[cfg(target_arch = "wasm32")]
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_iso() -> String {
    String::new()
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::default());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Info, category, message, None);
    });
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Info, category, message, Some(data));
    });
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Warn, category, message, None);
    });
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log(LogLevel::Error, category, message, None);
    });
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_entries_are_dropped() {
        let mut trace = LogTrace::with_capacity(3);
        for i in 0..5 {
            trace.log(LogLevel::Info, "test", &format!("entry {}", i), None);
        }
        let messages: Vec<_> = trace.get_logs().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_json_export() {
        let mut trace = LogTrace::default();
        trace.log(LogLevel::Warn, "contact-form", "validation failed", Some(serde_json::json!({ "fields": ["email"] })));
        trace.log(LogLevel::Info, "contact-form", "reset", None);

        let parsed: Vec<LogEntry> = serde_json::from_str(&trace.get_logs_json()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].level, LogLevel::Warn);
        assert_eq!(parsed[0].data, Some(serde_json::json!({ "fields": ["email"] })));
        assert_eq!(parsed[1].data, None);
    }

    #[test]
    fn test_empty_trace_exports_empty_array() {
        assert_eq!(LogTrace::default().get_logs_json(), "[]");
    }

    #[test]
    fn test_global_helpers_record_entries() {
        log_info("test", "hello");
        log_warn("test", "careful");
        log_error("test", "broken");
        log_info_with_data("test", "payload", serde_json::json!(1));

        let logs: Vec<LogEntry> = serde_json::from_str(&get_logs_json()).unwrap();
        let levels: Vec<_> = logs
            .into_iter()
            .filter(|e| e.category == "test")
            .map(|e| e.level)
            .collect();
        assert_eq!(levels, vec![LogLevel::Info, LogLevel::Warn, LogLevel::Error, LogLevel::Info]);
    }
}
