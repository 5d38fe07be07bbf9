//! 텍스트 파일 읽기 모듈
//!
//! 파일 내용을 줄 단위로 읽어 `\n`으로 다시 합치고,
//! 마지막 줄바꿈 하나를 제거한 텍스트를 반환합니다.

use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

use crate::error::{ConvertError, Result};

/// 기본 메모리 매핑 임계값 (10MB)
pub const DEFAULT_MMAP_THRESHOLD: u64 = 10 * 1024 * 1024;

/// 파일 읽기 옵션
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }
}

/// 파일을 읽어 정규화된 텍스트를 반환
///
/// 파일이 없거나, 디렉토리이거나, 권한이 없으면 운영체제 에러를 그대로 담아 실패합니다.
pub fn read_file_content(path: &Path, options: &ReadOptions) -> Result<String> {
    let file = File::open(path).map_err(|e| ConvertError::open(path, e))?;

    // 디렉토리는 열기에 성공하고 읽기에서 실패하므로 여기서는 판단하지 않음
    let (is_file, file_size) = file
        .metadata()
        .map(|m| (m.is_file(), m.len()))
        .unwrap_or((false, 0));

    if is_file && file_size > 0 && file_size >= options.mmap_threshold {
        trace!(path = %path.display(), file_size, "reading with mmap");
        read_with_mmap(path, &file)
    } else {
        read_with_reader(path, file)
    }
}

/// 버퍼 리더를 사용한 줄 단위 읽기
fn read_with_reader(path: &Path, file: File) -> Result<String> {
    let reader = BufReader::new(file);
    let mut joiner = LineJoiner::default();

    for line in reader.split(b'\n') {
        let line = line.map_err(|e| ConvertError::read(path, e))?;
        joiner.push(&line);
    }

    Ok(joiner.finish())
}

/// 메모리 매핑을 사용한 읽기 (대용량 파일용)
fn read_with_mmap(path: &Path, file: &File) -> Result<String> {
    let mmap = unsafe { Mmap::map(file).map_err(|e| ConvertError::read(path, e))? };
    Ok(normalize_text(&mmap))
}

/// 메모리에 있는 바이트를 파일 읽기와 같은 규칙으로 정규화
///
/// # Examples
/// ```
/// use txt2jsonl::reader::normalize_text;
///
/// assert_eq!(normalize_text(b"hello\nworld\n"), "hello\nworld");
/// assert_eq!(normalize_text(b"a\r\nb"), "a\nb");
/// assert_eq!(normalize_text(b""), "");
/// ```
pub fn normalize_text(data: &[u8]) -> String {
    let mut joiner = LineJoiner::default();
    // 마지막 줄바꿈 뒤의 빈 조각은 줄이 아님
    let body = data.strip_suffix(b"\n").unwrap_or(data);
    for line in body.split(|&b| b == b'\n') {
        joiner.push(line);
    }
    joiner.finish()
}

/// 줄을 모아 `\n`으로 합치는 버퍼
#[derive(Default)]
struct LineJoiner {
    buf: Vec<u8>,
}

impl LineJoiner {
    fn push(&mut self, line: &[u8]) {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        self.buf.extend_from_slice(line);
        self.buf.push(b'\n');
    }

    fn finish(mut self) -> String {
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        match String::from_utf8(self.buf) {
            Ok(text) => text,
            // 잘못된 UTF-8은 거부하지 않고 U+FFFD로 치환
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}
