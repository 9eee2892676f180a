//! 题块切分服务 - 业务能力层
//!
//! 只负责"切分"能力：把全文划分为题目区/答案区，
//! 再把题目区按题号标记切成原始题块。不解析题块内容。

use crate::models::RawBlock;
use anyhow::Result;
use regex::Regex;

/// 答案区完整标题（正则，标题跨行时中间为任意空白）
const ANSWER_SECTION_HEADER: &str = r"RESPUESTAS\s+EXAMEN TEORICO DE CONDUCCION";

/// 答案区降级分隔标记（标题不完整时按首次出现位置切分）
const ANSWER_SECTION_FALLBACK: &str = "RESPUESTAS";

/// 行首题号标记：数字后跟 `.` 或 `-`，可再跟一个 `-`
///
/// 形如 "1.-"、"12."、"3 -"；数字后无分隔符的行不是标记
const MARKER_PATTERN: &str = r"^(\d+)\s*[.\-]\s*-?\s*";

/// 把全文切分为题目区与答案区
///
/// 优先按完整标题切分；标题缺失时降级为按 "RESPUESTAS"
/// 首次出现位置切分；两者都没有时答案区为空
pub fn split_sections(full_text: &str) -> Result<(String, String)> {
    let header_re = Regex::new(ANSWER_SECTION_HEADER)?;
    if let Some(m) = header_re.find(full_text) {
        return Ok((
            full_text[..m.start()].to_string(),
            full_text[m.end()..].to_string(),
        ));
    }
    if let Some(pos) = full_text.find(ANSWER_SECTION_FALLBACK) {
        return Ok((
            full_text[..pos].to_string(),
            full_text[pos + ANSWER_SECTION_FALLBACK.len()..].to_string(),
        ));
    }
    Ok((full_text.to_string(), String::new()))
}

/// 判断某页文本是否进入答案区
///
/// 图文匹配扫描到答案区即停止，避免答案行里的题号被当作标签
pub fn is_answer_section_start(page_text: &str) -> bool {
    page_text.contains("RESPUESTAS") && page_text.contains("EXAMEN TEORICO")
}

/// 按行首题号标记把题目区切成原始题块
///
/// 逐行扫描：匹配标记的行开启一个新题块，题块内容从标记结束处
/// 延伸到下一个标记行的行首（最后一块到文本末尾）。文本开头视为行首。
/// 残缺标记（无分隔符、数字解析失败、题号为 0）不构成边界。
pub fn segment_blocks(questions_part: &str) -> Result<Vec<RawBlock>> {
    let marker_re = Regex::new(MARKER_PATTERN)?;

    // (题号, 内容起点, 标记行起点)
    let mut markers: Vec<(u32, usize, usize)> = Vec::new();
    let mut line_start = 0;
    for segment in questions_part.split_inclusive('\n') {
        let line = segment.strip_suffix('\n').unwrap_or(segment);
        if let Some(caps) = marker_re.captures(line) {
            if let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) {
                match digits.as_str().parse::<u32>() {
                    Ok(id) if id > 0 => {
                        markers.push((id, line_start + whole.end(), line_start));
                    }
                    _ => {}
                }
            }
        }
        line_start += segment.len();
    }

    let mut blocks = Vec::with_capacity(markers.len());
    for (k, &(id, content_start, _)) in markers.iter().enumerate() {
        let content_end = markers
            .get(k + 1)
            .map(|&(_, _, next_line_start)| next_line_start)
            .unwrap_or(questions_part.len());
        blocks.push(RawBlock {
            id,
            text: questions_part[content_start..content_end].trim().to_string(),
        });
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        let text = "1.- Primera pregunta\ntexto extra\n2.- Segunda pregunta\n3.- Tercera\n";
        let blocks = segment_blocks(text).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].id, 1);
        assert_eq!(blocks[0].text, "Primera pregunta\ntexto extra");
        assert_eq!(blocks[1].id, 2);
        assert_eq!(blocks[1].text, "Segunda pregunta");
        assert_eq!(blocks[2].id, 3);
        assert_eq!(blocks[2].text, "Tercera");
    }

    #[test]
    fn test_segment_marker_variants() {
        // "." 、"-"、".-" 以及分隔符前的空白都是合法标记
        let text = "1. uno\n2- dos\n3.- tres\n4 . cuatro\n";
        let blocks = segment_blocks(text).unwrap();
        assert_eq!(blocks.len(), 4);
        assert_eq!(
            blocks.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(blocks[3].text, "cuatro");
    }

    #[test]
    fn test_segment_block_count_equals_marker_count() {
        let text = "5.- a\n9.- b\n12.- c\n200.- d";
        let blocks = segment_blocks(text).unwrap();
        assert_eq!(blocks.len(), 4);
        // 题号允许不连续
        assert_eq!(
            blocks.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![5, 9, 12, 200]
        );
    }

    #[test]
    fn test_segment_malformed_markers_are_not_boundaries() {
        // 数字后没有分隔符、数字出现在行中、纯文字行都不是边界
        let text = "1.- Pregunta real\n12 sin separador\ntexto 3.- en medio\nabc.\n";
        let blocks = segment_blocks(text).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, 1);
        assert!(blocks[0].text.contains("12 sin separador"));
        assert!(blocks[0].text.contains("texto 3.- en medio"));
    }

    #[test]
    fn test_segment_start_of_blob_counts_as_line_start() {
        let text = "7.- Sin salto previo";
        let blocks = segment_blocks(text).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, 7);
        assert_eq!(blocks[0].text, "Sin salto previo");
    }

    #[test]
    fn test_segment_empty_input() {
        assert!(segment_blocks("").unwrap().is_empty());
        assert!(segment_blocks("sin marcadores\nde ningun tipo\n").unwrap().is_empty());
    }

    #[test]
    fn test_split_sections_full_header() {
        let text = "1.- Pregunta\nRESPUESTAS\nEXAMEN TEORICO DE CONDUCCION\n1. a)\n";
        let (questions, answers) = split_sections(text).unwrap();
        assert_eq!(questions, "1.- Pregunta\n");
        assert_eq!(answers, "\n1. a)\n");
    }

    #[test]
    fn test_split_sections_fallback_marker() {
        let text = "1.- Pregunta\nRESPUESTAS\n1. a)\n";
        let (questions, answers) = split_sections(text).unwrap();
        assert_eq!(questions, "1.- Pregunta\n");
        // 降级切分：首个标记之后的全部文本都是答案区
        assert_eq!(answers, "\n1. a)\n");
    }

    #[test]
    fn test_split_sections_absent() {
        let text = "1.- Pregunta\n2.- Otra\n";
        let (questions, answers) = split_sections(text).unwrap();
        assert_eq!(questions, text);
        assert!(answers.is_empty());
    }

    #[test]
    fn test_is_answer_section_start() {
        assert!(is_answer_section_start(
            "RESPUESTAS\nEXAMEN TEORICO DE CONDUCCION CLASE B"
        ));
        assert!(!is_answer_section_start("1.- Pregunta normal"));
        assert!(!is_answer_section_start("RESPUESTAS sueltas"));
    }
}
