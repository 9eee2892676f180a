//! 提取流程 - 编排层
//!
//! 调度两次独立扫描并在装配处汇合：
//!
//! 1. 图文匹配扫描（逐页，进入答案区即停止）→ 不可变匹配报告
//! 2. 全文扫描 → 分区 → 切块 → 题块解析 / 答案解析
//!
//! 汇合后装配、排序、落盘，并输出统计信息。本层只做调度和统计。

use crate::config::Config;
use crate::infrastructure::PdfSource;
use crate::models::{ParsedBlock, Question};
use crate::services::image_associator::{AssociationReport, ImageAssociator};
use crate::services::{answer_key, assembler, bank_writer, block_parser, segmenter};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);
        Ok(Self { config })
    }

    /// 运行完整提取流程
    pub fn run(&self) -> Result<()> {
        let source = PdfSource::open(&self.config.pdf_path, self.config.render_dpi)?;
        info!("📄 文档共 {} 页", source.page_count()?);

        // 第一遍：图文匹配与裁剪落盘
        let report = ImageAssociator::new(&self.config).run(&source)?;

        // 第二遍：全文提取与解析
        let full_text = source.read_full_text()?;
        let questions = build_questions(&full_text, report.path_map())?;

        bank_writer::write_bank(&questions, Path::new(&self.config.output_path))?;

        print_summary(&questions, &report, &self.config);
        Ok(())
    }
}

/// 纯文本侧流水线：全文 → 题目记录
///
/// 图片映射按值传入，是两次扫描唯一的交接点
pub fn build_questions(
    full_text: &str,
    image_map: BTreeMap<u32, String>,
) -> Result<Vec<Question>> {
    let normalized = full_text.replace('\r', "");
    let (questions_part, answers_part) = segmenter::split_sections(&normalized)?;

    let blocks = segmenter::segment_blocks(&questions_part)?;
    let parsed: Vec<ParsedBlock> = blocks
        .iter()
        .map(block_parser::parse_block)
        .collect::<Result<_>>()?;
    let entries = answer_key::parse_answer_key(&answers_part)?;

    Ok(assembler::assemble(parsed, entries, image_map))
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷题库提取");
    info!("📖 输入: {}", config.pdf_path);
    info!("📝 输出: {}", config.output_path);
    info!("{}", "=".repeat(60));
}

fn print_summary(questions: &[Question], report: &AssociationReport, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 提取完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目总数: {}", questions.len());
    info!("🖼️ 关联图片: {}", report.matched_count());
    if report.failed_count() > 0 {
        info!("❌ 图片保存失败: {}", report.failed_count());
    }
    info!("{}", "=".repeat(60));
    info!("\n题库已保存至: {}", config.output_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Answer;

    #[test]
    fn test_build_questions_end_to_end() {
        let text = "ENCABEZADO DEL CUESTIONARIO\n\
                    1.- ¿Qué indica la señal PARE?\n\
                    a) Detención obligatoria\n\
                    b) Ceda el paso\n\
                    Marque una respuesta.\n\
                    3.- Pregunta sin opciones\n\
                    RESPUESTAS\n\
                    EXAMEN TEORICO DE CONDUCCION\n\
                    1. a) Detención obligatoria\n\
                    3. Sin letras\n\
                    9. c) huérfana\n";
        let mut image_map = BTreeMap::new();
        image_map.insert(1, "images/q_1.png".to_string());

        let questions = build_questions(text, image_map).unwrap();
        assert_eq!(questions.len(), 2);

        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].question, "¿Qué indica la señal PARE?");
        assert_eq!(questions[0].options[&'a'], "Detención obligatoria");
        assert_eq!(questions[0].options[&'b'], "Ceda el paso");
        assert_eq!(questions[0].answer, Some(Answer::Single('a')));
        assert_eq!(questions[0].image.as_deref(), Some("images/q_1.png"));

        assert_eq!(questions[1].id, 3);
        assert!(questions[1].options.is_empty());
        assert_eq!(questions[1].answer, None);
        assert_eq!(questions[1].image, None);
    }

    #[test]
    fn test_build_questions_normalizes_carriage_returns() {
        let text = "1.- Pregunta\r\na) uno\r\nb) dos\r\n";
        let questions = build_questions(text, BTreeMap::new()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Pregunta");
        assert_eq!(questions[0].options[&'a'], "uno");
    }

    #[test]
    fn test_build_questions_without_answer_section() {
        let text = "1.- Pregunta\na) uno\n";
        let questions = build_questions(text, BTreeMap::new()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, None);
    }
}
