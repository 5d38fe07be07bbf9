//! 통합 테스트 모듈
//!
//! txt2jsonl의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// 테스트용 텍스트 파일 생성 헬퍼
fn create_text_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 레코드에서 content 필드 추출
fn content_of(line: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    messages[0]["content"].as_str().unwrap().to_string()
}

/// 빌드된 바이너리 실행
fn run_bin<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_txt2jsonl"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

mod roundtrip_tests {
    use super::*;
    use txt2jsonl::{generate_jsonl, read_file_content, ReadOptions};

    #[test]
    fn test_escaped_characters_survive() {
        let temp_dir = TempDir::new().unwrap();
        let original = "say \"hi\"\n\tpath C:\\dir\n\u{1}\u{1f}\n한국어 ✓";
        let path = create_text_file(temp_dir.path(), "mixed.txt", original.as_bytes());

        let content = read_file_content(&path, &ReadOptions::new()).unwrap();
        let line = generate_jsonl(&content).unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(content_of(&line), original);
    }

    #[test]
    fn test_single_trailing_newline_is_canonicalized() {
        let temp_dir = TempDir::new().unwrap();
        let with = create_text_file(temp_dir.path(), "with.txt", b"line one\n\nline three\n");
        let without = create_text_file(temp_dir.path(), "without.txt", b"line one\n\nline three");

        let options = ReadOptions::new();
        let a = read_file_content(&with, &options).unwrap();
        let b = read_file_content(&without, &options).unwrap();

        assert_eq!(a, "line one\n\nline three");
        assert_eq!(a, b);
    }
}

mod batch_tests {
    use super::*;
    use txt2jsonl::{run_batch, ReadOptions};

    #[test]
    fn test_n_files_with_failures() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_text_file(temp_dir.path(), "a.txt", b"hello\nworld\n");
        let empty = create_text_file(temp_dir.path(), "empty.txt", b"");
        let missing = temp_dir.path().join("missing.txt");
        let dir = temp_dir.path().join("subdir");
        fs::create_dir(&dir).unwrap();

        let files = vec![missing.clone(), a, dir.clone(), empty];
        let mut out = Vec::new();
        let mut err = Vec::new();

        let report = run_batch(&files, &ReadOptions::new(), &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"{"messages":[{"role":"user","content":"hello\nworld"}]}"#,
                "\n",
                r#"{"messages":[{"role":"user","content":""}]}"#,
                "\n",
            )
        );

        let err = String::from_utf8(err).unwrap();
        let diagnostics: Vec<&str> = err.lines().collect();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].starts_with(&format!("Error reading file {}: ", missing.display())));
        assert!(diagnostics[1].starts_with(&format!("Error reading file {}: ", dir.display())));

        assert_eq!(report.converted, 2);
        assert_eq!(report.failed, vec![missing, dir]);
    }

    #[test]
    fn test_mmap_threshold_does_not_change_output() {
        let temp_dir = TempDir::new().unwrap();
        let body: Vec<u8> = (0..2000)
            .flat_map(|i| format!("row {}\r\n", i).into_bytes())
            .collect();
        let path = create_text_file(temp_dir.path(), "big.txt", &body);
        let files = vec![path];

        let run = |options: ReadOptions| {
            let mut out = Vec::new();
            let mut err = Vec::new();
            run_batch(&files, &options, &mut out, &mut err).unwrap();
            assert!(err.is_empty());
            String::from_utf8(out).unwrap()
        };

        let buffered = run(ReadOptions::new());
        let mapped = run(ReadOptions::new().with_mmap_threshold(1));

        assert_eq!(buffered, mapped);
        let content = content_of(buffered.trim_end());
        assert!(content.starts_with("row 0\nrow 1\n"));
        assert!(content.ends_with("row 1999"));
    }
}

mod error_tests {
    use super::*;
    use txt2jsonl::{read_file_content, ConvertError, FileErrorKind, ReadOptions};

    #[test]
    fn test_missing_file_kind_and_message() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = read_file_content(&path, &ReadOptions::new()).unwrap_err();

        assert_eq!(err.file_kind(), Some(FileErrorKind::NotFound));
        assert!(matches!(err, ConvertError::Open { .. }));
        // 운영체제 메시지를 가공하지 않음
        assert!(!err.to_string().contains("missing.txt"));
        assert!(!err.to_string().is_empty());
    }
}

mod cli_tests {
    use super::*;

    #[test]
    fn test_no_arguments_prints_usage() {
        let output = run_bin(Vec::<String>::new());

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        assert_eq!(
            String::from_utf8(output.stderr).unwrap(),
            "Usage: txt2jsonl <file1> <file2> ...\n"
        );
    }

    #[test]
    fn test_concrete_scenarios() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_text_file(temp_dir.path(), "a.txt", b"hello\nworld\n");
        let empty = create_text_file(temp_dir.path(), "empty.txt", b"");
        let missing = temp_dir.path().join("missing.txt");

        let output = run_bin([&a, &missing, &empty]);

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            concat!(
                r#"{"messages":[{"role":"user","content":"hello\nworld"}]}"#,
                "\n",
                r#"{"messages":[{"role":"user","content":""}]}"#,
                "\n",
            )
        );

        let stderr = String::from_utf8(output.stderr).unwrap();
        assert_eq!(stderr.lines().count(), 1);
        assert!(stderr.starts_with(&format!("Error reading file {}: ", missing.display())));
    }

    #[test]
    fn test_hyphen_prefixed_file_name() {
        let temp_dir = TempDir::new().unwrap();
        create_text_file(temp_dir.path(), "-notes.txt", b"hi\n");
        create_text_file(temp_dir.path(), "plain.txt", b"there");

        let output = Command::new(env!("CARGO_BIN_EXE_txt2jsonl"))
            .current_dir(temp_dir.path())
            .args(["-notes.txt", "plain.txt"])
            .env_remove("RUST_LOG")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(output.stderr.is_empty());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            concat!(
                r#"{"messages":[{"role":"user","content":"hi"}]}"#,
                "\n",
                r#"{"messages":[{"role":"user","content":"there"}]}"#,
                "\n",
            )
        );
    }

    #[test]
    fn test_unknown_long_flag_is_a_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_text_file(temp_dir.path(), "a.txt", b"x");

        let output = run_bin([std::ffi::OsStr::new("--not-a-flag"), a.as_os_str()]);

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "{\"messages\":[{\"role\":\"user\",\"content\":\"x\"}]}\n"
        );
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.starts_with("Error reading file --not-a-flag: "));
        assert_eq!(stderr.lines().count(), 1);
    }
}
