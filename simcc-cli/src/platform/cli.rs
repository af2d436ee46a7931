//! CLI 格式化输出
//!
//! Result printing, the program list, numbered source listings and the
//! delete confirmation. Writers are passed in so the formatting can be
//! checked against a buffer.

use simcc_api::{CompilationResult, ProgramRecord};
use std::io::{self, BufRead, Write};

pub const EMPTY_LIST_TEXT: &str = "No programs yet. Use `simcc new` to add one!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this program? [y/N] ";

const NO_DESCRIPTION: &str = "No description";

/// Print a finished compilation
///
/// Success goes to `out`, error-kind results to `err`.
pub fn print_compilation(
    result: &CompilationResult,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    if result.is_success() {
        writeln!(out, "{}", result.output_text())
    } else {
        writeln!(err, "{}", result.output_text())
    }
}

/// 打印程序列表（1-based 编号）
pub fn print_program_list(programs: &[ProgramRecord], out: &mut impl Write) -> io::Result<()> {
    if programs.is_empty() {
        return writeln!(out, "{EMPTY_LIST_TEXT}");
    }

    let width = programs.len().to_string().len();
    for (i, program) in programs.iter().enumerate() {
        writeln!(out, "{:>width$}. {}", i + 1, program.title)?;
        writeln!(out, "{:>width$}  {}", "", description_or_default(program))?;
    }
    Ok(())
}

/// Title, description and numbered source of one program
pub fn print_program(program: &ProgramRecord, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", program.title)?;
    writeln!(out, "{}", description_or_default(program))?;
    writeln!(out)?;
    print_source_listing(&program.code, out)
}

/// 打印带行号的源码
pub fn print_source_listing(source: &str, out: &mut impl Write) -> io::Result<()> {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len().max(3);

    for (i, line) in lines.iter().enumerate() {
        writeln!(out, "{:>width$} | {}", i + 1, line)?;
    }
    Ok(())
}

/// Ask a yes/no question; only "y" or "yes" (any case) confirms
pub fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn description_or_default(program: &ProgramRecord) -> &str {
    if program.description.is_empty() {
        NO_DESCRIPTION
    } else {
        &program.description
    }
}
