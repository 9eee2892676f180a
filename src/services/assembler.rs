//! 装配服务 - 业务能力层
//!
//! 三路汇合点：解析后的题块、答案条目、图文匹配映射在这里
//! 合并为最终题目记录。输出按题号升序排列，装配后不再修改。

use crate::models::{AnswerEntry, ParsedBlock, Question};
use crate::utils::logging::truncate_text;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// 合并题块、答案与图片映射为题目记录
///
/// 答案按题号绑定，对不上任何题目的答案条目直接忽略；
/// 未识别出字母的答案行记 debug 日志后按缺失处理。
/// 图片映射按值传入，装配层是它的唯一消费者。
pub fn assemble(
    blocks: Vec<ParsedBlock>,
    entries: Vec<AnswerEntry>,
    image_map: BTreeMap<u32, String>,
) -> Vec<Question> {
    let mut answer_map: HashMap<u32, AnswerEntry> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if entry.letters.is_empty() {
            debug!(
                "题目 {} 的答案行未识别出字母: {}",
                entry.id,
                truncate_text(&entry.raw, 60)
            );
        }
        // 同一题号出现多行答案时，后出现的覆盖先出现的
        answer_map.insert(entry.id, entry);
    }

    let mut questions: Vec<Question> = blocks
        .into_iter()
        .map(|block| Question {
            answer: answer_map.get(&block.id).and_then(AnswerEntry::to_answer),
            image: image_map.get(&block.id).cloned(),
            id: block.id,
            question: block.prompt,
            options: block.options,
            explanation: None,
        })
        .collect();
    questions.sort_by_key(|q| q.id);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    fn block(id: u32, prompt: &str) -> ParsedBlock {
        ParsedBlock {
            id,
            prompt: prompt.to_string(),
            options: BTreeMap::new(),
        }
    }

    fn entry(id: u32, letters: Vec<char>) -> AnswerEntry {
        AnswerEntry {
            id,
            raw: String::new(),
            letters,
        }
    }

    #[test]
    fn test_assemble_sorts_by_id() {
        let blocks = vec![block(30, "c"), block(2, "a"), block(15, "b")];
        let questions = assemble(blocks, vec![], BTreeMap::new());
        assert_eq!(
            questions.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![2, 15, 30]
        );
    }

    #[test]
    fn test_assemble_binds_answers_by_id() {
        let blocks = vec![block(12, "p"), block(34, "q"), block(50, "r")];
        let entries = vec![
            entry(12, vec!['a']),
            entry(34, vec!['a', 'b']),
            entry(50, vec![]),
            entry(999, vec!['c']), // 没有对应题目，忽略
        ];
        let questions = assemble(blocks, entries, BTreeMap::new());
        assert_eq!(questions[0].answer, Some(Answer::Single('a')));
        assert_eq!(
            questions[1].answer,
            Some(Answer::Multiple(vec!['a', 'b']))
        );
        assert_eq!(questions[2].answer, None);
    }

    #[test]
    fn test_assemble_attaches_images() {
        let blocks = vec![block(7, "p"), block(8, "q")];
        let mut image_map = BTreeMap::new();
        image_map.insert(7, "images/q_7.png".to_string());
        let questions = assemble(blocks, vec![], image_map);
        assert_eq!(questions[0].image.as_deref(), Some("images/q_7.png"));
        assert_eq!(questions[1].image, None);
    }

    #[test]
    fn test_assemble_explanation_reserved() {
        let questions = assemble(vec![block(1, "p")], vec![], BTreeMap::new());
        assert_eq!(questions[0].explanation, None);
    }
}
