//! 答案表解析服务 - 业务能力层
//!
//! 只负责把答案区文本逐行解析为"题号 → 答案字母"条目

use crate::models::AnswerEntry;
use anyhow::Result;
use regex::Regex;

/// 答案行："12. 其余内容"
const ANSWER_LINE_PATTERN: &str = r"^(\d+)\.\s*(.*)$";

/// 答案字母标记："a)" 到 "e)"
const LETTER_PATTERN: &str = r"([a-e])\)";

/// 解析答案区文本
///
/// 每个匹配 "数字. 内容" 的行产生一个条目，内容里的字母标记
/// 按出现顺序收集；没有任何字母的行保留原文用于诊断，
/// 其余行直接跳过。题号对不上题目的条目由装配层忽略。
pub fn parse_answer_key(answers_part: &str) -> Result<Vec<AnswerEntry>> {
    let line_re = Regex::new(ANSWER_LINE_PATTERN)?;
    let letter_re = Regex::new(LETTER_PATTERN)?;

    let mut entries = Vec::new();
    for line in answers_part.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = line_re.captures(line) else {
            continue;
        };
        let (Some(digits), Some(rest)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Ok(id) = digits.as_str().parse::<u32>() else {
            continue;
        };
        let letters: Vec<char> = letter_re
            .captures_iter(rest.as_str())
            .filter_map(|c| c.get(1).and_then(|m| m.as_str().chars().next()))
            .collect();
        entries.push(AnswerEntry {
            id,
            raw: rest.as_str().to_string(),
            letters,
        });
    }
    Ok(entries)
}
