//! Mask decoding: textual rows into a cell grid.
//!
//! A mask is the seed shape template for a sprite, pre-mirroring. Each row
//! is taken literally (no trimming); the four-symbol alphabet maps onto
//! [`MaskCell`]. Decoding has no side effects and fails fast on ragged or
//! empty input, before any randomness is consumed.

use anyhow::{anyhow, Result};
use serde_json::json;

use crate::error_codes::{CodedError, CODE_MALFORMED_MASK};

/// One undecided cell of a mask template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskCell {
    /// `'0'` or `' '` — guaranteed empty.
    Empty,
    /// `'1'` or `'.'` — randomly resolved to empty or body.
    MaybeBody,
    /// `'2'` or `'+'` — randomly resolved to border or body.
    MaybeBorder,
    /// `'3'`, `'*'`, or any unrecognized character — always border.
    AlwaysBorder,
}

impl MaskCell {
    pub fn from_char(c: char) -> Self {
        match c {
            '0' | ' ' => Self::Empty,
            '1' | '.' => Self::MaybeBody,
            '2' | '+' => Self::MaybeBorder,
            _ => Self::AlwaysBorder,
        }
    }
}

/// An immutable decoded mask grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<MaskCell>,
}

impl Mask {
    /// Decode literal pattern rows. All rows must have the same length.
    pub fn parse<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut width = 0usize;
        let mut height = 0usize;
        let mut cells = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let row_len = row.chars().count();
            if index == 0 {
                width = row_len;
            } else if row_len != width {
                return Err(anyhow!(CodedError::usage(
                    CODE_MALFORMED_MASK,
                    format!(
                        "mask row {index} is {row_len} cells wide, expected {width}"
                    ),
                )
                .with_details(json!({
                    "row": index,
                    "expected": width,
                    "actual": row_len,
                }))));
            }
            cells.extend(row.chars().map(MaskCell::from_char));
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(anyhow!(CodedError::usage(
                CODE_MALFORMED_MASK,
                "mask must contain at least one non-empty row",
            )));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a mask from a pre-decoded cell grid.
    pub fn from_cells(width: usize, height: usize, cells: Vec<MaskCell>) -> Result<Self> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return Err(anyhow!(CodedError::usage(
                CODE_MALFORMED_MASK,
                format!(
                    "cell grid of {} entries does not fill {width}x{height}",
                    cells.len()
                ),
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Decode compile-time catalog rows. Callers guarantee rectangular,
    /// non-empty input; the public fallible paths are `parse`/`from_cells`.
    pub(crate) fn from_static_rows(rows: &[&str]) -> Self {
        let width = rows[0].chars().count();
        debug_assert!(width > 0 && !rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.chars().count() == width));
        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(MaskCell::from_char))
            .collect();
        Self {
            width,
            height: rows.len(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> MaskCell {
        self.cells[y * self.width + x]
    }
}
