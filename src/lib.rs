//! txt2jsonl - TEXT FILES TO JSONL CONVERTER
//!
//! 텍스트 파일의 전체 내용을 채팅 형식 레코드로 감싸
//! 파일당 한 줄의 JSON Lines 출력을 만드는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📄 **파일당 한 줄**: `{"messages":[{"role":"user","content":...}]}`
//! - 🔁 **순서 보장**: 인자 순서대로 하나씩 처리
//! - 🧹 **줄바꿈 정규화**: CRLF를 LF로, 마지막 줄바꿈 하나 제거
//! - ⚠️ **부분 실패 허용**: 읽기 실패는 표준 에러에 보고하고 계속 진행
//! - 🗺️ **메모리 매핑**: 대용량 파일은 memmap으로 읽기
//!
//! # 예제
//!
//! ```bash
//! txt2jsonl a.txt b.txt > out.jsonl
//! txt2jsonl -notes.txt
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod processor;
pub mod reader;
pub mod record;

// Re-exports for convenient access
pub use batch::{run_batch, BatchReport};
pub use cli::{usage_line, Args};
pub use error::{ConvertError, FileErrorKind, Result};
pub use processor::{process_file, ProcessResult, Stage};
pub use reader::{read_file_content, ReadOptions};
pub use record::{generate_jsonl, Message, Record, Role};
