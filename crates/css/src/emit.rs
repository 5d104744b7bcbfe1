use crate::ir::{create_stylesheet, ClassRule};
use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig, IndentType, LineFeed},
    CodeGenerator, CodegenConfig, Emit,
};

/// 输出选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub minify: bool,
    pub indent_width: i32,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            minify: false,
            indent_width: 2,
        }
    }
}

/// 使用 swc_css_codegen 生成 CSS 字符串
pub fn emit_css(stylesheet: &Stylesheet) -> Result<String, std::fmt::Error> {
    emit_css_with(stylesheet, EmitOptions::default())
}

pub fn emit_css_with(stylesheet: &Stylesheet, options: EmitOptions) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: IndentType::Space,
        indent_width: options.indent_width,
        linefeed: LineFeed::LF,
    };

    let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
    let mut gen = CodeGenerator::new(
        &mut wr,
        CodegenConfig {
            minify: options.minify,
        },
    );

    gen.emit(stylesheet)?;

    Ok(output)
}

/// ClassRule 列表 → CSS 字符串
pub fn emit_rules(rules: &[ClassRule]) -> Result<String, std::fmt::Error> {
    emit_css(&create_stylesheet(rules))
}
