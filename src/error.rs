//! 应用程序错误类型
//!
//! 按错误来源分类：文档访问错误是致命的，单张图片的渲染/保存错误
//! 由调用方捕获并继续处理

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档访问错误（致命，终止本次运行）
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
    /// 图片处理错误（按图片粒度隔离）
    #[error("图片错误: {0}")]
    Image(#[from] ImageError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 文档访问错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// PDF 渲染库加载失败
    #[error("无法加载 Pdfium 库: {message}")]
    LibraryLoadFailed { message: String },
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 打开 PDF 文件失败
    #[error("打开 PDF 失败 ({path}): {message}")]
    OpenFailed { path: String, message: String },
    /// 页面文本提取失败
    #[error("第 {page} 页文本提取失败: {message}")]
    TextExtractionFailed { page: usize, message: String },
}

/// 图片处理错误
#[derive(Debug, Error)]
pub enum ImageError {
    /// 页面渲染失败
    #[error("第 {page} 页渲染失败: {message}")]
    RenderFailed { page: usize, message: String },
    /// 图片保存失败
    #[error("图片保存失败 ({path}): {message}")]
    SaveFailed { path: String, message: String },
}

// ========== 便捷构造函数 ==========

impl DocumentError {
    /// 创建打开失败错误
    pub fn open_failed(path: impl Into<String>, err: impl std::fmt::Debug) -> Self {
        DocumentError::OpenFailed {
            path: path.into(),
            message: format!("{:?}", err),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
