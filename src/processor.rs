//! 파일 처리 모듈
//!
//! 개별 텍스트 파일의 읽기와 JSONL 레코드 변환을 담당합니다.

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::reader::{read_file_content, ReadOptions};
use crate::record::generate_jsonl;

/// 실패가 발생한 처리 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 파일 읽기
    Read,
    /// JSONL 생성
    Generate,
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct ProcessResult {
    /// 처리된 파일 경로
    pub path: PathBuf,
    /// 변환 결과 (성공 시 JSON 라인)
    pub outcome: std::result::Result<String, (Stage, ConvertError)>,
    /// 읽어들인 텍스트 크기 (바이트)
    pub content_len: u64,
}

impl ProcessResult {
    /// 성공 결과 생성
    pub fn success(path: PathBuf, json_line: String, content_len: u64) -> Self {
        Self {
            path,
            outcome: Ok(json_line),
            content_len,
        }
    }

    /// 실패 결과 생성
    pub fn failure(path: PathBuf, stage: Stage, error: ConvertError) -> Self {
        Self {
            path,
            outcome: Err((stage, error)),
            content_len: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// 성공 시 JSON 라인
    pub fn json_line(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(String::as_str)
    }

    /// 실패 시 진단 메시지 (`Error reading file <path>: <error>` 형식)
    pub fn diagnostic(&self) -> Option<String> {
        let (stage, error) = self.outcome.as_ref().err()?;
        let path = self.path.display();
        Some(match stage {
            Stage::Read => format!("Error reading file {}: {}", path, error),
            Stage::Generate => format!("Error generating JSONL for {}: {}", path, error),
        })
    }
}

/// 단일 텍스트 파일 처리
///
/// # Arguments
/// * `path` - 처리할 파일 경로
/// * `options` - 읽기 옵션
///
/// # Returns
/// 처리 결과를 담은 `ProcessResult`
pub fn process_file(path: PathBuf, options: &ReadOptions) -> ProcessResult {
    let content = match read_file_content(&path, options) {
        Ok(content) => content,
        Err(e) => return ProcessResult::failure(path, Stage::Read, e),
    };

    match to_json_line(&path, &content) {
        Ok(json_line) => ProcessResult::success(path, json_line, content.len() as u64),
        Err(e) => ProcessResult::failure(path, Stage::Generate, e),
    }
}

fn to_json_line(path: &Path, content: &str) -> Result<String> {
    generate_jsonl(content).map_err(|e| ConvertError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })
}
