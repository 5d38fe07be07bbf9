//! 에러 타입 정의 모듈
//!
//! txt2jsonl에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 파일 접근 실패의 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// 경로가 존재하지 않음
    NotFound,
    /// 권한 부족
    PermissionDenied,
    /// 경로가 디렉토리임
    IsADirectory,
    /// 그 밖의 I/O 에러
    Other,
}

impl From<&io::Error> for FileErrorKind {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => FileErrorKind::PermissionDenied,
            io::ErrorKind::IsADirectory => FileErrorKind::IsADirectory,
            _ => FileErrorKind::Other,
        }
    }
}

/// txt2jsonl에서 발생할 수 있는 에러 타입
///
/// `Open`/`Read`의 메시지는 운영체제 메시지를 그대로 사용합니다.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 파일 열기 실패
    #[error("{source}")]
    Open {
        path: PathBuf,
        kind: FileErrorKind,
        #[source]
        source: io::Error,
    },

    /// 파일 읽기 실패
    #[error("{source}")]
    Read {
        path: PathBuf,
        kind: FileErrorKind,
        #[source]
        source: io::Error,
    },

    /// JSON 직렬화 실패
    #[error("{source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 출력 쓰기 실패
    #[error("failed to write output: {source}")]
    Write {
        #[from]
        source: io::Error,
    },
}

impl ConvertError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Open {
            path: path.into(),
            kind: FileErrorKind::from(&source),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Read {
            path: path.into(),
            kind: FileErrorKind::from(&source),
            source,
        }
    }

    /// 파일 접근 에러의 분류 (파일 접근 에러가 아니면 None)
    pub fn file_kind(&self) -> Option<FileErrorKind> {
        match self {
            ConvertError::Open { kind, .. } | ConvertError::Read { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// txt2jsonl 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
