//! # Exam Bank Extract
//!
//! 把固定模板的多页驾考试卷 PDF 转换为结构化题库的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Pdfium 文档访问），只暴露能力
//! - `PdfSource` - 唯一的文档 owner，提供页文本 / 单词位置 / 图片区域 / 区域渲染
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个模块只处理单一关注点
//! - `segmenter` - 题目区/答案区切分与题块切分能力
//! - `block_parser` - 题干与选项拆分能力
//! - `answer_key` - 答案表解析能力
//! - `image_associator` - 图文几何匹配与裁剪落盘能力
//! - `assembler` / `bank_writer` - 装配与题库读写能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/extract_pipeline` - 调度两次扫描，装配、落盘、统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, DocumentError, ImageError};
pub use infrastructure::PdfSource;
pub use models::{Answer, Question};
pub use orchestrator::{build_questions, App};
pub use services::{AssociationReport, ImageAssociator};
