//! Indentation-aware source writer.
//!
//! [`CodeWriter`] keeps the headers of open blocks on a stack. The nesting
//! depth is the stack height, so indentation can never drift from the block
//! structure, and [`CodeWriter::finish`] refuses to hand out text while a
//! block is still open.

use crate::error::CodegenError;

/// Default indentation unit.
pub const DEFAULT_INDENT: &str = "    ";

/// Builder for brace-delimited source text.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    output: String,
    indent: String,
    open_blocks: Vec<String>,
    pending_blank: bool,
    at_block_start: bool,
}

impl CodeWriter {
    /// Creates a writer indenting with four spaces.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Creates a writer with a custom indentation unit.
    #[must_use]
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            indent: indent.into(),
            open_blocks: Vec::new(),
            pending_blank: false,
            at_block_start: true,
        }
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open_blocks.len()
    }

    /// Writes one line at the current depth.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if self.pending_blank {
            self.output.push('\n');
            self.pending_blank = false;
        }
        for _ in 0..self.depth() {
            self.output.push_str(&self.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
        self.at_block_start = false;
        self
    }

    /// Requests a blank line before the next line.
    ///
    /// Blank lines are never emitted right after a block opens, right before
    /// it closes, or at the end of the output.
    pub fn blank_line(&mut self) -> &mut Self {
        if !self.at_block_start {
            self.pending_blank = true;
        }
        self
    }

    /// Opens a block: writes `header {` and nests one level deeper.
    pub fn open(&mut self, header: &str) -> &mut Self {
        self.line(&format!("{header} {{"));
        self.open_blocks.push(header.to_string());
        self.at_block_start = true;
        self
    }

    /// Closes the innermost block.
    ///
    /// # Errors
    /// Returns `CodegenError::UnmatchedClose` if no block is open.
    pub fn close(&mut self) -> Result<&mut Self, CodegenError> {
        self.open_blocks.pop().ok_or(CodegenError::UnmatchedClose)?;
        self.pending_blank = false;
        self.line("}");
        Ok(self)
    }

    /// Writes a block whose body is produced by `body`.
    ///
    /// # Errors
    /// Propagates errors from `body`.
    pub fn block<F>(&mut self, header: &str, body: F) -> Result<&mut Self, CodegenError>
    where
        F: FnOnce(&mut Self) -> Result<(), CodegenError>,
    {
        self.open(header);
        body(self)?;
        self.close()
    }

    /// Returns the rendered text.
    ///
    /// # Errors
    /// Returns `CodegenError::Unbalanced` if any block is still open.
    pub fn finish(self) -> Result<String, CodegenError> {
        match self.open_blocks.last() {
            Some(innermost) => Err(CodegenError::Unbalanced {
                depth: self.open_blocks.len(),
                innermost: innermost.clone(),
            }),
            None => Ok(self.output),
        }
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
