//! 把若干页的原始文本写入纯文本文件，用于排查提取问题
//!
//! 默认转储前 3 页加最后 1 页；查答案区时可用 `--tail 10` 只看末尾几页。
//!
//! 用法：`dump_text [pdf路径] [输出文件] [--head N] [--tail N]`

use anyhow::Result;
use exam_bank_extract::infrastructure::PdfSource;
use exam_bank_extract::Config;
use std::fs::File;
use std::io::Write;

struct DumpArgs {
    pdf_path: String,
    out_path: String,
    head: usize,
    tail: usize,
}

fn parse_args() -> DumpArgs {
    let default = Config::default();
    let mut parsed = DumpArgs {
        pdf_path: default.pdf_path,
        out_path: "pdf_dump.txt".to_string(),
        head: 3,
        tail: 1,
    };

    let mut positional = 0;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--head" => {
                if let Some(n) = args.next().and_then(|v| v.parse().ok()) {
                    parsed.head = n;
                }
            }
            "--tail" => {
                if let Some(n) = args.next().and_then(|v| v.parse().ok()) {
                    parsed.tail = n;
                }
            }
            _ => {
                match positional {
                    0 => parsed.pdf_path = arg,
                    1 => parsed.out_path = arg,
                    _ => {}
                }
                positional += 1;
            }
        }
    }
    parsed
}

fn main() -> Result<()> {
    let args = parse_args();
    let default = Config::default();

    let source = PdfSource::open(args.pdf_path.as_str(), default.render_dpi)?;
    let page_count = source.page_count()?;

    // 选中前 head 页和后 tail 页，去重后保持页序
    let mut selected: Vec<usize> = (0..args.head.min(page_count)).collect();
    for index in page_count.saturating_sub(args.tail)..page_count {
        if !selected.contains(&index) {
            selected.push(index);
        }
    }

    let mut file = File::create(&args.out_path)?;
    for index in &selected {
        writeln!(file, "--- Page {} ---", index + 1)?;
        writeln!(file, "{}", source.page_text(*index)?)?;
        writeln!(file)?;
    }

    println!("已写入 {} 页文本到 {}", selected.len(), args.out_path);
    Ok(())
}
