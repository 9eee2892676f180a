//! PDF 文档访问 - 基础设施层
//!
//! 持有唯一的 Pdfium 绑定与文档路径，只暴露类型化的读取能力：
//! 页数、页文本、全文拼接、逐页快照与区域渲染。
//! 不认识 Question / 题块，不处理业务流程。
//!
//! 文档在每次操作内按作用域打开，离开作用域即释放底层资源，
//! 出错路径同样如此。坐标统一换算为自上而下（pdfplumber 风格）。

use crate::error::{DocumentError, ImageError};
use crate::models::{BoundingBox, ImageRegion, PageSnapshot, PositionedWord};
use anyhow::Result;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::warn;

/// PDF 数据源
pub struct PdfSource {
    pdfium: Pdfium,
    path: PathBuf,
    /// 渲染缩放系数（DPI / 72）
    render_scale: f32,
}

impl PdfSource {
    /// 打开数据源
    ///
    /// 绑定 Pdfium 动态库并校验文件存在；文档本身按需加载
    pub fn open(path: impl Into<PathBuf>, render_dpi: u32) -> Result<Self, DocumentError> {
        let path = path.into();
        if !path.exists() {
            return Err(DocumentError::NotFound {
                path: path.display().to_string(),
            });
        }
        let pdfium = bind_pdfium()?;
        Ok(Self {
            pdfium,
            path,
            render_scale: render_dpi as f32 / 72.0,
        })
    }

    fn load_document(&self) -> Result<PdfDocument<'_>, DocumentError> {
        self.pdfium
            .load_pdf_from_file(&self.path, None)
            .map_err(|e| DocumentError::open_failed(self.path.display().to_string(), e))
    }

    /// 文档页数
    pub fn page_count(&self) -> Result<usize, DocumentError> {
        Ok(self.load_document()?.pages().len() as usize)
    }

    /// 提取单页文本（页索引从 0 起）
    pub fn page_text(&self, index: usize) -> Result<String, DocumentError> {
        let document = self.load_document()?;
        let page = document.pages().get(index as u16).map_err(|e| {
            DocumentError::TextExtractionFailed {
                page: index + 1,
                message: format!("{:?}", e),
            }
        })?;
        let text = page
            .text()
            .map_err(|e| DocumentError::TextExtractionFailed {
                page: index + 1,
                message: format!("{:?}", e),
            })?;
        Ok(text.all())
    }

    /// 顺序拼接全部页面文本，页与页之间以换行分隔
    ///
    /// 无法提取文本的页面记 warn 后跳过，空页不产生分隔符
    pub fn read_full_text(&self) -> Result<String, DocumentError> {
        let document = self.load_document()?;
        let mut full_text = String::new();
        for (index, page) in document.pages().iter().enumerate() {
            match page.text() {
                Ok(text_page) => {
                    let page_text = text_page.all();
                    if page_text.is_empty() {
                        continue;
                    }
                    full_text.push_str(&page_text);
                    full_text.push('\n');
                }
                Err(e) => {
                    warn!("⚠️ 第 {} 页文本提取失败，跳过: {:?}", index + 1, e);
                }
            }
        }
        Ok(full_text)
    }

    /// 逐页回调：每页提供一次性快照与绑定到该页的区域渲染器
    ///
    /// 快照随回调结束丢弃，不跨页累积
    pub fn for_each_page<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&PageSnapshot, &RegionRenderer<'_, '_>) -> Result<()>,
    {
        let document = self.load_document()?;
        for (index, page) in document.pages().iter().enumerate() {
            let page_height = page.height().value as f64;
            let (text, words) = match page.text() {
                Ok(text_page) => (
                    text_page.all(),
                    words_from_chars(&text_page, page_height),
                ),
                Err(e) => {
                    warn!("⚠️ 第 {} 页无法提取文本: {:?}", index + 1, e);
                    (String::new(), Vec::new())
                }
            };
            let snapshot = PageSnapshot {
                index,
                text,
                words,
                images: image_regions(&page, page_height),
            };
            let renderer = RegionRenderer {
                page: &page,
                page_index: index,
                scale: self.render_scale,
            };
            f(&snapshot, &renderer)?;
        }
        Ok(())
    }
}

/// 页面区域渲染器
///
/// 生命周期绑定到打开中的页面，负责把一个包围盒区域
/// 渲染为高分辨率位图并落盘
pub struct RegionRenderer<'a, 'b> {
    page: &'b PdfPage<'a>,
    page_index: usize,
    scale: f32,
}

impl RegionRenderer<'_, '_> {
    /// 渲染包围盒区域并保存为图片文件
    ///
    /// 整页按配置分辨率渲染后裁剪到区域像素范围；
    /// 渲染或保存失败都以 ImageError 返回，由调用方按图片粒度隔离
    pub fn save_region(&self, bbox: &BoundingBox, out_path: &Path) -> Result<(), ImageError> {
        let config = PdfRenderConfig::new().scale_page_by_factor(self.scale);
        let bitmap =
            self.page
                .render_with_config(&config)
                .map_err(|e| ImageError::RenderFailed {
                    page: self.page_index + 1,
                    message: format!("{:?}", e),
                })?;
        let rendered = bitmap.as_image();

        let scale = self.scale as f64;
        let x = (bbox.x0 * scale).max(0.0) as u32;
        let y = (bbox.top * scale).max(0.0) as u32;
        let width = (bbox.width() * scale).round().max(1.0) as u32;
        let height = (bbox.height() * scale).round().max(1.0) as u32;

        rendered
            .crop_imm(x, y, width, height)
            .save(out_path)
            .map_err(|e| ImageError::SaveFailed {
                path: out_path.display().to_string(),
                message: e.to_string(),
            })
    }
}

/// 绑定 Pdfium 动态库
///
/// 先找当前目录下的库文件，再退回系统库路径
fn bind_pdfium() -> Result<Pdfium, DocumentError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| DocumentError::LibraryLoadFailed {
            message: format!("{:?}", e),
        })
}

/// 把页面字符按空白分组为带位置的单词
///
/// 单词包围盒取成员字符包围盒的并集；题号标签匹配只用纵向范围
fn words_from_chars(text_page: &PdfPageText<'_>, page_height: f64) -> Vec<PositionedWord> {
    let mut words = Vec::new();
    let mut current_text = String::new();
    let mut current_bbox: Option<BoundingBox> = None;

    for ch in text_page.chars().iter() {
        let Some(c) = ch.unicode_char() else {
            flush_word(&mut words, &mut current_text, &mut current_bbox);
            continue;
        };
        if c.is_whitespace() {
            flush_word(&mut words, &mut current_text, &mut current_bbox);
            continue;
        }
        let Ok(rect) = ch.loose_bounds() else {
            flush_word(&mut words, &mut current_text, &mut current_bbox);
            continue;
        };
        let char_bbox = to_top_down(&rect, page_height);
        current_bbox = Some(match current_bbox {
            Some(bbox) => bbox.union(&char_bbox),
            None => char_bbox,
        });
        current_text.push(c);
    }
    flush_word(&mut words, &mut current_text, &mut current_bbox);
    words
}

fn flush_word(
    words: &mut Vec<PositionedWord>,
    text: &mut String,
    bbox: &mut Option<BoundingBox>,
) {
    if let Some(word_bbox) = bbox.take() {
        if !text.is_empty() {
            words.push(PositionedWord {
                text: std::mem::take(text),
                bbox: word_bbox,
            });
            return;
        }
    }
    text.clear();
}

/// 收集页面上的嵌入图片区域
fn image_regions(page: &PdfPage<'_>, page_height: f64) -> Vec<ImageRegion> {
    let mut regions = Vec::new();
    for object in page.objects().iter() {
        if !matches!(object.object_type(), PdfPageObjectType::Image) {
            continue;
        }
        let Ok(bounds) = object.bounds() else {
            continue;
        };
        let rect = bounds.to_rect();
        regions.push(ImageRegion {
            bbox: to_top_down(&rect, page_height),
        });
    }
    regions
}

/// PDF 坐标（原点左下、y 向上）换算为自上而下坐标
fn to_top_down(rect: &PdfRect, page_height: f64) -> BoundingBox {
    BoundingBox {
        x0: rect.left.value as f64,
        x1: rect.right.value as f64,
        top: page_height - rect.top.value as f64,
        bottom: page_height - rect.bottom.value as f64,
    }
}
