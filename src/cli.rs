//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// 바이너리 이름
pub const BIN_NAME: &str = "txt2jsonl";

/// txt2jsonl CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    author = "YourName <your@email.com>",
    version,
    about = "TEXT FILES TO JSONL CONVERTER - 텍스트 파일을 채팅 형식 JSONL 레코드로 변환하는 CLI 도구",
    long_about = r#"
TEXT FILES TO JSONL CONVERTER
=============================

각 텍스트 파일의 전체 내용을 "user" 메시지 하나로 감싸
파일당 한 줄의 JSON 레코드를 표준 출력에 씁니다.

  {"messages":[{"role":"user","content":"..."}]}

읽을 수 없는 파일은 표준 에러에 보고하고 다음 파일을 계속 처리합니다.

예제:
  txt2jsonl a.txt b.txt > out.jsonl
  txt2jsonl -- --help
"#
)]
pub struct Args {
    /// 변환할 텍스트 파일 경로 (입력 순서대로 출력, `-`로 시작하는 이름 허용)
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}

/// 파일 인자가 없을 때 출력할 사용법 한 줄
pub fn usage_line() -> String {
    format!("Usage: {} <file1> <file2> ...", BIN_NAME)
}
