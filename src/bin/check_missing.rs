//! 题号覆盖检查：加载题库 JSON，报告期望范围 1..=N 内缺失的题号
//!
//! 题号断档是正常数据，本工具只负责把断档暴露出来供人工核对。
//!
//! 用法：`check_missing [题库json] [期望最大题号]`

use anyhow::Result;
use exam_bank_extract::services::bank_writer;
use exam_bank_extract::Config;
use std::path::Path;

fn main() -> Result<()> {
    let default = Config::default();
    let mut args = std::env::args().skip(1);
    let json_path = args.next().unwrap_or(default.output_path);
    let expected_max: u32 = args.next().and_then(|v| v.parse().ok()).unwrap_or(280);

    let questions = bank_writer::load_bank(Path::new(&json_path))?;
    let missing = bank_writer::missing_ids(&questions, expected_max);

    println!("Total questions: {}", questions.len());
    println!("Missing IDs: {:?}", missing);
    Ok(())
}
