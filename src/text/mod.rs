//! Source text and span bookkeeping.
//!
//! Every diagnostic carries a [`TextSpan`] over the original input, and the
//! host resolves spans back to line/column pairs through [`SourceText`]. The
//! text itself is borrowed, never copied; tokens and spans index into it.

/// A half-open range over the source text: `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
	pub start:  usize,
	pub length: usize,
}

impl TextSpan {
	pub fn new(start: usize, length: usize) -> Self { Self { start, length } }

	/// Build a span from inclusive start and exclusive end offsets.
	pub fn from_bounds(start: usize, end: usize) -> Self { Self { start, length: end - start } }

	pub fn end(&self) -> usize { self.start + self.length }
}

/// One physical line of the source, without its line break.
#[derive(Debug, Clone, Copy)]
pub struct TextLine {
	/// Offset of the first character of the line.
	pub start:  usize,
	/// Length of the line excluding the line break.
	pub length: usize,
	/// Length of the line including the line break.
	pub length_with_break: usize,
}

impl TextLine {
	pub fn end(&self) -> usize { self.start + self.length }

	pub fn span(&self) -> TextSpan { TextSpan::new(self.start, self.length) }
}

/// Borrowed source text with precomputed line boundaries.
#[derive(Debug)]
pub struct SourceText<'a> {
	text:  &'a str,
	lines: Vec<TextLine>,
}

impl<'a> SourceText<'a> {
	pub fn new(text: &'a str) -> Self { Self { text, lines: parse_lines(text) } }

	pub fn as_str(&self) -> &'a str { self.text }

	pub fn lines(&self) -> &[TextLine] { &self.lines }

	/// Slice of the text covered by `span`.
	pub fn slice(&self, span: TextSpan) -> &'a str { &self.text[span.start..span.end()] }

	/// Index of the line containing the absolute offset `position`.
	pub fn line_index(&self, position: usize) -> usize {
		let mut lower = 0;
		let mut upper = self.lines.len() - 1;
		while lower < upper {
			let index = lower + (upper - lower + 1) / 2;
			if self.lines[index].start <= position {
				lower = index;
			} else {
				upper = index - 1;
			}
		}
		lower
	}
}

/// Split `text` into line records. CR, LF and CRLF all end a line; CRLF
/// counts as a single break of width two. The final line is always present,
/// even when empty, so offset lookup never goes out of bounds.
fn parse_lines(text: &str) -> Vec<TextLine> {
	let mut lines = Vec::new();
	let mut start = 0;
	let mut chars = text.char_indices().peekable();
	while let Some((index, c)) = chars.next() {
		let break_width = match c {
			'\r' if matches!(chars.peek(), Some(&(_, '\n'))) => {
				chars.next();
				2
			}
			'\r' | '\n' => 1,
			_ => continue,
		};
		lines.push(TextLine { start, length: index - start, length_with_break: index - start + break_width });
		start = index + break_width;
	}
	lines.push(TextLine { start, length: text.len() - start, length_with_break: text.len() - start });
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	fn line_starts(text: &str) -> Vec<usize> {
		SourceText::new(text).lines().iter().map(|l| l.start).collect()
	}

	#[test]
	fn single_line() {
		let text = SourceText::new("1 + 2");
		assert_eq!(text.lines().len(), 1);
		assert_eq!(text.line_index(0), 0);
		assert_eq!(text.line_index(4), 0);
	}

	#[test]
	fn line_breaks() {
		assert_eq!(line_starts("a\nb"), vec![0, 2]);
		assert_eq!(line_starts("a\rb"), vec![0, 2]);
		assert_eq!(line_starts("a\r\nb"), vec![0, 3]);
		assert_eq!(line_starts("a\n"), vec![0, 2]);
		assert_eq!(line_starts(""), vec![0]);
	}

	#[test]
	fn line_index_lookup() {
		let text = SourceText::new("x = 1\ny = 2\nx + y");
		assert_eq!(text.line_index(0), 0);
		assert_eq!(text.line_index(5), 0);
		assert_eq!(text.line_index(6), 1);
		assert_eq!(text.line_index(12), 2);
		assert_eq!(text.line_index(16), 2);
	}

	#[test]
	fn span_bounds() {
		let span = TextSpan::from_bounds(3, 7);
		assert_eq!(span.start, 3);
		assert_eq!(span.length, 4);
		assert_eq!(span.end(), 7);
	}

	#[test]
	fn slicing() {
		let text = SourceText::new("x = 10");
		assert_eq!(text.slice(TextSpan::new(4, 2)), "10");
	}
}
