//! Output Builder
//!
//! Line-buffered text output with scoped indentation and vertical spacing.
//!
//! Text collects in a current line that reaches the output only when a line
//! break is appended. Committing a line strips its trailing whitespace and
//! appends any staged trailing documentation, so the writer never has to
//! revisit text it already produced.
//!
//! Indentation and spacing modes are scoped to closures and restored when
//! the closure returns.

use crate::config::FormatConfig;

/// How grouped sub-items are separated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VerticalSpacing {
    /// No line breaks are inserted.
    None,
    /// A non-empty current line is broken before the next item.
    MultipleLines,
    /// Items are separated by a blank line.
    Whitespace,
}

pub struct OutputBuilder {
    /// Finished lines.
    output: String,
    /// The line under construction, indentation included.
    current_line: String,
    /// Spaces added per indentation level.
    indent_width: usize,
    /// Indentation prefixes; the last one applies to new lines.
    indents: Vec<String>,
    /// Written after the current line when it is committed.
    trailing_documentation: Vec<String>,
    spacing: Vec<VerticalSpacing>,
}

impl Default for OutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuilder {
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    pub fn with_config(config: FormatConfig) -> Self {
        OutputBuilder {
            output: String::new(),
            current_line: String::new(),
            indent_width: config.indent_width,
            indents: vec![String::new()],
            trailing_documentation: Vec::new(),
            spacing: vec![VerticalSpacing::None],
        }
    }

    /// Append `text`, which may contain line breaks. Every line that starts
    /// with visible text is indented to the current level.
    pub fn append(&mut self, text: &str) {
        let mut rest = text;
        while let Some(end) = rest.find('\n') {
            self.append_to_current_line(&rest[..end]);
            self.accept_current_line();
            self.output.push('\n');
            rest = &rest[end + 1..];
        }
        self.append_to_current_line(rest);
    }

    pub fn append_new_line(&mut self) {
        self.append("\n");
    }

    pub fn append_new_line_if(&mut self, condition: bool) {
        if condition {
            self.append_new_line();
        }
    }

    /// Break the current line unless it is empty.
    pub fn start_on_new_line(&mut self) {
        if !self.current_line.is_empty() {
            self.append_new_line();
        }
    }

    /// Emit the line breaks called for by the innermost spacing mode.
    pub fn append_vertical_spacing(&mut self) {
        match self.vertical_spacing() {
            VerticalSpacing::None => {}
            VerticalSpacing::MultipleLines => self.start_on_new_line(),
            VerticalSpacing::Whitespace => {
                self.start_on_new_line();
                self.append_new_line();
            }
        }
    }

    /// Stage documentation to follow the current line when it is committed.
    /// Replaces anything staged before.
    pub fn set_trailing_documentation(&mut self, lines: Vec<String>) {
        self.trailing_documentation = lines;
    }

    /// The innermost spacing mode.
    pub fn vertical_spacing(&self) -> VerticalSpacing {
        self.spacing.last().copied().unwrap_or(VerticalSpacing::None)
    }

    pub fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let indent = format!("{}{}", self.indent(), " ".repeat(self.indent_width));
        self.indents.push(indent);
        let result = f(self);
        self.unindent();
        result
    }

    pub fn indented_if<R>(&mut self, condition: bool, f: impl FnOnce(&mut Self) -> R) -> R {
        if condition {
            self.indented(f)
        } else {
            f(self)
        }
    }

    /// Indent when the innermost spacing mode breaks lines.
    pub fn indented_if_vertically_spaced<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let spaced = self.vertical_spacing() != VerticalSpacing::None;
        self.indented_if(spaced, f)
    }

    /// Run `f` with new lines aligned under the end of the current line.
    /// On an empty line the current indentation is kept.
    pub fn indented_to_current_column<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let indent = if self.current_line.is_empty() {
            self.indent().to_owned()
        } else {
            " ".repeat(self.current_line.chars().count())
        };
        self.indents.push(indent);
        let result = f(self);
        self.indents.pop();
        result
    }

    pub fn vertically_spaced<R>(
        &mut self,
        spacing: VerticalSpacing,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.spacing.push(spacing);
        let result = f(self);
        self.spacing.pop();
        result
    }

    /// The finished text: trailing whitespace removed, exactly one final
    /// line break.
    pub fn into_output(mut self) -> String {
        if !self.current_line.is_empty() || !self.trailing_documentation.is_empty() {
            self.accept_current_line();
        }
        let mut output = self.output;
        output.truncate(output.trim_end().len());
        output.push('\n');
        output
    }

    fn indent(&self) -> &str {
        self.indents.last().map_or("", String::as_str)
    }

    fn unindent(&mut self) {
        if self.indents.len() > 1 {
            self.indents.pop();
        }
        if self.current_line.trim().is_empty() {
            self.current_line.clear();
        }
    }

    fn append_to_current_line(&mut self, fragment: &str) {
        if self.current_line.is_empty() && !fragment.trim_end().is_empty() {
            let indent = self.indents.last().map_or("", String::as_str);
            self.current_line.push_str(indent);
            self.current_line.push_str(fragment.trim_start());
        } else {
            self.current_line.push_str(fragment);
        }
    }

    /// Move the current line to the output, followed by its trailing
    /// documentation. Continuation lines of the documentation are padded to
    /// start where the first one did.
    fn accept_current_line(&mut self) {
        let code = self.current_line.trim_end();
        self.output.push_str(code);

        let mut documentation = std::mem::take(&mut self.trailing_documentation).into_iter();
        if let Some(first) = documentation.next() {
            let column = code.chars().count();
            self.output.push_str(first.trim_end());
            for line in documentation {
                self.output.push('\n');
                self.output.extend(std::iter::repeat(' ').take(column));
                self.output.push_str(line.trim_end());
            }
        }

        self.current_line.clear();
    }
}

#[cfg(test)]
mod tests;
