//! 基础设施层
//!
//! 持有稀缺资源（PDF 文档访问），只暴露类型化的读取能力

pub mod pdf_source;

pub use pdf_source::{PdfSource, RegionRenderer};
