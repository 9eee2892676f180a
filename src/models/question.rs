//! 题目数据模型
//!
//! 从 PDF 提取出的题目记录及各解析阶段的中间结构

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 正确答案
///
/// 单选为一个字母，多选为按出现顺序排列的字母列表。
/// 序列化为 `"a"` 或 `["a", "b"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// 单选
    Single(char),
    /// 多选（保留答案行中的出现顺序）
    Multiple(Vec<char>),
}

/// 题目记录（最终输出单元）
///
/// 字段声明顺序即 JSON 输出顺序：
/// `{id, question, options, answer, explanation, image}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 题号（正整数，允许不连续）
    pub id: u32,
    /// 题干
    pub question: String,
    /// 选项表，键为 a-e
    pub options: BTreeMap<char, String>,
    /// 正确答案，缺失时输出 null
    pub answer: Option<Answer>,
    /// 解析说明（预留字段，始终为 null）
    pub explanation: Option<String>,
    /// 关联图片的相对路径，如 "images/q_12.png"
    pub image: Option<String>,
}

/// 原始题块
///
/// 一个题号标记结束到下一个标记开始之间的文本
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub id: u32,
    pub text: String,
}

/// 解析后的题块（题干 + 选项）
#[derive(Debug, Clone)]
pub struct ParsedBlock {
    pub id: u32,
    pub prompt: String,
    pub options: BTreeMap<char, String>,
}

/// 答案表条目
///
/// `raw` 只用于诊断日志，不参与序列化
#[derive(Debug, Clone)]
pub struct AnswerEntry {
    pub id: u32,
    pub raw: String,
    /// 识别出的答案字母，可能为空
    pub letters: Vec<char>,
}

impl AnswerEntry {
    /// 转为最终答案：无字母为 None，单个为单选，多个为多选
    pub fn to_answer(&self) -> Option<Answer> {
        match self.letters.as_slice() {
            [] => None,
            [single] => Some(Answer::Single(*single)),
            many => Some(Answer::Multiple(many.to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_entry_to_answer() {
        let entry = AnswerEntry {
            id: 1,
            raw: String::new(),
            letters: vec![],
        };
        assert_eq!(entry.to_answer(), None);

        let entry = AnswerEntry {
            id: 12,
            raw: "a) Correcta".to_string(),
            letters: vec!['a'],
        };
        assert_eq!(entry.to_answer(), Some(Answer::Single('a')));

        let entry = AnswerEntry {
            id: 34,
            raw: "a) b) ambas".to_string(),
            letters: vec!['a', 'b'],
        };
        assert_eq!(entry.to_answer(), Some(Answer::Multiple(vec!['a', 'b'])));
    }

    #[test]
    fn test_answer_serde_roundtrip() {
        // 无答案序列化为 null，反序列化回 None
        let json = serde_json::to_string(&None::<Answer>).unwrap();
        assert_eq!(json, "null");
        let back: Option<Answer> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, None);

        let json = serde_json::to_string(&Answer::Single('a')).unwrap();
        assert_eq!(json, "\"a\"");
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Answer::Single('a'));

        let json = serde_json::to_string(&Answer::Multiple(vec!['a', 'b'])).unwrap();
        assert_eq!(json, "[\"a\",\"b\"]");
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Answer::Multiple(vec!['a', 'b']));
    }
}
