//! 일괄 변환 모듈
//!
//! 인자 순서대로 파일을 하나씩 변환하여 JSON 라인과 진단 메시지를 출력합니다.
//! 개별 파일의 실패는 보고만 하고 다음 파일로 넘어갑니다.

use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::processor::process_file;
use crate::reader::ReadOptions;

/// 일괄 변환 결과
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// 변환된 파일 수
    pub converted: usize,
    /// 실패한 파일 경로 (입력 순서)
    pub failed: Vec<PathBuf>,
}

/// 파일 목록을 순서대로 변환
///
/// 성공한 파일은 `out`에 JSON 한 줄씩, 실패한 파일은 `err`에 진단 한 줄씩 씁니다.
/// 출력 스트림 자체에 쓸 수 없을 때만 에러를 반환합니다.
pub fn run_batch<O, E>(
    files: &[PathBuf],
    options: &ReadOptions,
    out: &mut O,
    err: &mut E,
) -> Result<BatchReport>
where
    O: Write,
    E: Write,
{
    let mut report = BatchReport::default();

    for path in files {
        debug!(path = %path.display(), "converting");
        let result = process_file(path.clone(), options);

        if let Some(json_line) = result.json_line() {
            writeln!(out, "{}", json_line)?;
            report.converted += 1;
        } else if let Some(diagnostic) = result.diagnostic() {
            writeln!(err, "{}", diagnostic)?;
            report.failed.push(result.path);
        }
    }

    out.flush()?;
    debug!(
        converted = report.converted,
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}
