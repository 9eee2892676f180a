//! 编排层（Orchestration Layer）
//!
//! 本层负责流程调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! extract_pipeline::App (两次扫描 + 汇合)
//!     ↓
//! services (能力层：segment / parse / associate / assemble / write)
//!     ↓
//! infrastructure (基础设施：PdfSource)
//! ```
//!
//! ## 设计原则
//!
//! 1. **显式数据流**：图文匹配报告按值传递，无跨阶段共享可变状态
//! 2. **向下依赖**：编排层 → services → infrastructure
//! 3. **无业务逻辑**：只做调度和统计

pub mod extract_pipeline;

pub use extract_pipeline::{build_questions, App};
