/// 程序配置
///
/// 图文匹配的容差与最小尺寸是针对该试卷模板调好的启发式参数，
/// 以命名字段保留并允许环境变量覆盖，不做自动推断
#[derive(Clone, Debug)]
pub struct Config {
    /// 待提取的 PDF 文件路径
    pub pdf_path: String,
    /// 题库 JSON 输出路径
    pub output_path: String,
    /// 图片目录名（位于输出文件同级目录下）
    pub images_dir_name: String,
    /// 参与匹配的图片最小宽度（point）
    pub min_image_width: f64,
    /// 参与匹配的图片最小高度（point）
    pub min_image_height: f64,
    /// 题号标签与图片的纵向匹配容差（point）
    pub label_tolerance: f64,
    /// 图片渲染分辨率（DPI）
    pub render_dpi: u32,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pdf_path: "cuestionario clase b.pdf".to_string(),
            output_path: "cuestionario_ordenado.json".to_string(),
            images_dir_name: "images".to_string(),
            min_image_width: 50.0,
            min_image_height: 50.0,
            label_tolerance: 10.0,
            render_dpi: 300,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            pdf_path: std::env::var("PDF_PATH").unwrap_or(default.pdf_path),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(default.output_path),
            images_dir_name: std::env::var("IMAGES_DIR_NAME").unwrap_or(default.images_dir_name),
            min_image_width: std::env::var("MIN_IMAGE_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_image_width),
            min_image_height: std::env::var("MIN_IMAGE_HEIGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_image_height),
            label_tolerance: std::env::var("LABEL_TOLERANCE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.label_tolerance),
            render_dpi: std::env::var("RENDER_DPI").ok().and_then(|v| v.parse().ok()).unwrap_or(default.render_dpi),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 用命令行位置参数覆盖输入/输出路径
    ///
    /// 用法：`exam_bank_extract [pdf路径] [输出路径]`
    pub fn apply_cli_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(pdf_path) = args.next() {
            self.pdf_path = pdf_path;
        }
        if let Some(output_path) = args.next() {
            self.output_path = output_path;
        }
        self
    }
}
