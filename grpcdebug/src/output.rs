//! Writes an [`Output`] to a byte sink.
//!
//! Documents are pretty printed JSON. Reports are written block by block with
//! a `---` line in between; within a block every column is padded to the
//! widest cell plus [`PADDING`], and never narrower than [`MIN_WIDTH`].

use crate::error::Result;
use crate::render::{Block, Field, Output, Report, Row, Table};
use std::io::Write;

pub const MIN_WIDTH: usize = 10;
pub const PADDING: usize = 3;

const DIVIDER: &str = "---";

pub fn write_output<W: Write>(out: &mut W, output: &Output) -> Result<()> {
    match output {
        Output::Document(value) => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        Output::Report(report) => write_report(out, report)?,
    }
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    for (i, block) in report.blocks.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{DIVIDER}")?;
        }
        let lines = match block {
            Block::Fields(fields) => field_lines(fields),
            Block::Table(table) => table_lines(table),
        };
        write_aligned(out, &lines)?;
    }
    Ok(())
}

/// Aligned cells, optionally followed by text that takes no part in the
/// alignment.
struct Line {
    cells: Vec<String>,
    tail: Option<String>,
}

fn field_lines(fields: &[Field]) -> Vec<Line> {
    fields
        .iter()
        .map(|field| Line {
            cells: vec![format!("{}:", field.label), field.value.clone()],
            tail: None,
        })
        .collect()
}

fn table_lines(table: &Table) -> Vec<Line> {
    let header = Line {
        cells: table.header.iter().map(|h| h.to_string()).collect(),
        tail: None,
    };
    let rows = table.rows.iter().map(|row| match row {
        Row::Cells(cells) => Line {
            cells: cells.clone(),
            tail: None,
        },
        Row::Failed { id, reason } => Line {
            cells: vec![id.clone()],
            tail: Some(format!("error: {reason}")),
        },
    });
    std::iter::once(header).chain(rows).collect()
}

fn write_aligned<W: Write>(out: &mut W, lines: &[Line]) -> std::io::Result<()> {
    let mut widths: Vec<usize> = Vec::new();
    for line in lines {
        for (i, cell) in line.cells.iter().enumerate() {
            let width = (cell.chars().count() + PADDING).max(MIN_WIDTH);
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => widths.push(width),
            }
        }
    }

    for line in lines {
        let mut text = String::new();
        for (cell, width) in line.cells.iter().zip(&widths) {
            text.push_str(&format!("{cell:<width$}"));
        }
        if let Some(tail) = &line.tail {
            text.push_str(tail);
        }
        writeln!(out, "{}", text.trim_end())?;
    }
    Ok(())
}
