//! txt2jsonl - TEXT FILES TO JSONL CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use tracing::debug;

use txt2jsonl::{
    batch::run_batch,
    cli::{usage_line, Args},
    reader::ReadOptions,
};

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    // 파일 인자가 없으면 사용법만 출력하고 정상 종료
    if args.files.is_empty() {
        eprintln!("{}", usage_line());
        return Ok(());
    }

    debug!(files = args.files.len(), "starting batch");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();

    run_batch(&args.files, &ReadOptions::new(), &mut out, &mut err)
        .context("JSONL 출력 실패")?;

    Ok(())
}

/// RUST_LOG로 제어되는 개발용 트레이싱 초기화 (기본값: 끔)
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
