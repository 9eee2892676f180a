//! 业务能力层
//!
//! 每个模块只描述"我能做什么"，处理单一关注点，不关心流程顺序：
//! 切分、题块解析、答案解析、图文匹配、装配、题库读写

pub mod answer_key;
pub mod assembler;
pub mod bank_writer;
pub mod block_parser;
pub mod image_associator;
pub mod segmenter;

pub use image_associator::{AssociationReport, CropOutcome, ImageAssociator};
