//! Turns fetched entities into something to print.
//!
//! A command produces an [`Output`]: either a structured [`Output::Document`]
//! that mirrors the remote entities field for field, or a tabular
//! [`Report`] made of blocks. The [`output`](crate::output) module decides how
//! either is written.

use crate::error::Result;
use crate::graph::Skipped;
use serde::Serialize;

pub mod channelz;
mod time;

pub use self::time::{RenderOptions, TimeFormat};

/// Structured or tabular rendering, chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Structured,
    Tabular(RenderOptions),
}

/// What a command hands to the output sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Document(serde_json::Value),
    Report(Report),
}

impl Output {
    /// Serializes `value` as is, oneof variants included.
    pub fn document<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Output::Document(serde_json::to_value(value)?))
    }
}

/// A tabular report: blocks printed in order, separated by a divider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub blocks: Vec<Block>,
    /// Children that vanished while the report was built.
    pub skipped: Vec<Skipped>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// One `Label: value` line per field.
    Fields(Vec<Field>),
    Table(Table),
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

impl From<Vec<Field>> for Block {
    fn from(fields: Vec<Field>) -> Self {
        Block::Fields(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Vec<&'static str>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Cells(Vec<String>),
    /// A row that could not be rendered; siblings are unaffected.
    Failed {
        id: String,
        reason: String,
    },
}

/// `started/succeeded/failed`, or any other slash separated counter group.
pub fn counters(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("/")
}
