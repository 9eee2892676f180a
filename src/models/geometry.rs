//! 几何数据模型
//!
//! 页面内文字与图片的位置信息。坐标系与 pdfplumber 一致：
//! 原点在页面左上角，`top` 越小越靠近页面顶部（单位为 PDF point）。

/// 矩形包围盒
///
/// `top < bottom`（自上而下坐标系）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        (self.x1 - self.x0).abs()
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).abs()
    }

    /// 合并两个包围盒为最小外接矩形
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// 带位置的单词
///
/// 由页面字符按空白分组得到，用于定位题号标签
#[derive(Debug, Clone)]
pub struct PositionedWord {
    pub text: String,
    pub bbox: BoundingBox,
}

/// 页面中的嵌入图片区域
#[derive(Debug, Clone, Copy)]
pub struct ImageRegion {
    pub bbox: BoundingBox,
}

/// 题号标签
///
/// 页面上形如 "12.-" 的单词，标记一道题的起始位置；
/// 只保留垂直方向范围，图文匹配只依赖纵向位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionLabel {
    pub id: u32,
    pub top: f64,
    pub bottom: f64,
}

/// 单页快照
///
/// 基础设施层对一页内容的一次性提取结果；
/// 页面处理完毕后即丢弃，不跨页累积
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// 页索引（0 起）
    pub index: usize,
    /// 整页文本
    pub text: String,
    /// 带位置的单词列表
    pub words: Vec<PositionedWord>,
    /// 嵌入图片区域列表
    pub images: Vec<ImageRegion>,
}
