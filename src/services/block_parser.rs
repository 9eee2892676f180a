//! 题块解析服务 - 业务能力层
//!
//! 只负责单个题块的"题干 + 选项"拆分，不关心题块来源

use crate::models::{ParsedBlock, RawBlock};
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// 作答提示语（"Marque una/dos/tres/la/las respuesta(s)"，不区分大小写）
///
/// 属于模板固定的页脚说明，出现位置起的全部内容都不是题目内容
const FOOTER_PATTERN: &str = r"(?i)marque\s+(?:una|dos|tres|la|las)\s+respuestas?";

/// 行首选项标记："a) " 到 "e) "
const OPTION_PATTERN: &str = r"(?m)^\s*([a-e])\)\s";

/// 题块开头残留的题号标记（分段器已剥离，单独解析裸文本时兜底）
const LEADING_MARKER_PATTERN: &str = r"^(\d+)\s*[.\-]\s*-?\s*";

/// 解析单个题块为题干与选项表
///
/// 步骤：去掉残留题号标记 → 截掉作答提示语及其后全部内容 →
/// 定位行首选项标记 → 首个标记之前为题干（再次截提示语）→
/// 每个选项文本从标记结束延伸到下一个标记开始（或题块末尾）
pub fn parse_block(block: &RawBlock) -> Result<ParsedBlock> {
    let leading_re = Regex::new(LEADING_MARKER_PATTERN)?;
    let footer_re = Regex::new(FOOTER_PATTERN)?;
    let option_re = Regex::new(OPTION_PATTERN)?;

    let text = match leading_re.find(&block.text) {
        Some(m) => &block.text[m.end()..],
        None => block.text.as_str(),
    };
    let text = cut_footer(&footer_re, text);

    let mut options = BTreeMap::new();
    let matches: Vec<_> = option_re.captures_iter(text).collect();

    let prompt_end = matches
        .first()
        .and_then(|caps| caps.get(0))
        .map(|m| m.start())
        .unwrap_or(text.len());

    for (j, caps) in matches.iter().enumerate() {
        let (Some(whole), Some(letter)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(letter) = letter.as_str().chars().next() else {
            continue;
        };
        let option_end = matches
            .get(j + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        options.insert(letter, text[whole.end()..option_end].trim().to_string());
    }

    let prompt = cut_footer(&footer_re, &text[..prompt_end]).trim().to_string();

    Ok(ParsedBlock {
        id: block.id,
        prompt,
        options,
    })
}

/// 截掉提示语出现位置起的全部文本
fn cut_footer<'a>(footer_re: &Regex, text: &'a str) -> &'a str {
    match footer_re.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}
