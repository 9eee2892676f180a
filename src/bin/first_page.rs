//! 打印 PDF 首页文本，用于人工核对模板格式
//!
//! 用法：`first_page [pdf路径]`

use anyhow::Result;
use exam_bank_extract::infrastructure::PdfSource;
use exam_bank_extract::Config;

fn main() -> Result<()> {
    let default = Config::default();
    let pdf_path = std::env::args().nth(1).unwrap_or(default.pdf_path);

    let source = PdfSource::open(pdf_path.as_str(), default.render_dpi)?;
    if source.page_count()? == 0 {
        println!("PDF is empty.");
        return Ok(());
    }

    println!("--- First Page Text ---");
    println!("{}", source.page_text(0)?);
    println!("-----------------------");
    Ok(())
}
