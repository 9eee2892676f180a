//! 题库读写服务 - 业务能力层
//!
//! 负责题库 JSON 的序列化落盘与加载。输出格式固定：
//! 4 空格缩进、字段顺序由记录结构决定、非 ASCII 字符原样保留。

use crate::models::Question;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// 序列化题库为 JSON 文本
///
/// 相同输入产生逐字节一致的输出，重跑结果可直接比对
pub fn to_json(questions: &[Question]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    questions
        .serialize(&mut serializer)
        .context("题库序列化失败")?;
    String::from_utf8(buf).context("序列化结果不是合法 UTF-8")
}

/// 写出题库文件
///
/// 文件句柄在函数作用域内持有，任何失败路径都会释放
pub fn write_bank(questions: &[Question], path: &Path) -> Result<()> {
    let json = to_json(questions)?;
    let mut file = File::create(path)
        .with_context(|| format!("无法创建输出文件: {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("写入输出文件失败: {}", path.display()))?;
    Ok(())
}

/// 从 JSON 文件加载题库
pub fn load_bank(path: &Path) -> Result<Vec<Question>> {
    let file = File::open(path)
        .with_context(|| format!("无法打开题库文件: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("题库文件解析失败: {}", path.display()))
}

/// 统计期望范围 `1..=expected_max` 中缺失的题号
///
/// 题号断档是正常数据而非损坏，这里只做报告
pub fn missing_ids(questions: &[Question], expected_max: u32) -> Vec<u32> {
    let present: HashSet<u32> = questions.iter().map(|q| q.id).collect();
    (1..=expected_max)
        .filter(|id| !present.contains(id))
        .collect()
}
