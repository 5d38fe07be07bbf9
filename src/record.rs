//! JSONL 레코드 모듈
//!
//! 채팅 형식 레코드 `{"messages":[{"role":"user","content":...}]}`의
//! 정의와 직렬화를 담당합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 메시지 발화자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 사용자 메시지
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
        }
    }
}

/// 단일 채팅 메시지
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// 사용자 메시지 생성
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// JSONL 한 줄에 해당하는 레코드
///
/// 항상 메시지 하나로 생성됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    messages: Vec<Message>,
}

impl Record {
    /// 사용자 메시지 하나를 담은 레코드 생성
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(content)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// 한 줄짜리 JSON 문자열로 직렬화
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// 텍스트를 사용자 메시지 레코드로 감싸 JSONL 한 줄을 생성
///
/// # Examples
/// ```
/// use txt2jsonl::record::generate_jsonl;
///
/// let line = generate_jsonl("hello\nworld").unwrap();
/// assert_eq!(line, r#"{"messages":[{"role":"user","content":"hello\nworld"}]}"#);
/// ```
pub fn generate_jsonl(content: &str) -> serde_json::Result<String> {
    Record::user(content).to_line()
}
