use annotate_snippets::{
	display_list::{DisplayList, FormatOptions},
	snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use std::fmt::Display;
use std::ops::Range;

/// Byte range in the whole input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GlobalSpan(pub Range<usize>);

/// Byte range inside one line of the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LocalSpan(pub Range<usize>);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spanned<T> {
	pub span: GlobalSpan,
	pub inner: T,
}

impl LocalSpan {
	pub fn globalize_span(self, start: usize) -> GlobalSpan {
		GlobalSpan(self.0.start + start..self.0.end + start)
	}
}

impl<T> Spanned<T> {
	pub fn new(t: T, span: GlobalSpan) -> Self {
		Spanned {
			span,
			inner: t,
		}
	}
}

impl<T: Display> Spanned<T> {
	pub fn render_error_snippet(&self, string: &str) -> String {
		let text = self.inner.to_string();
		let (line_no, line_range) = find_line(string, self.span.0.start);
		let line = &string[line_range.clone()];
		let start = char_offset(line, self.span.0.start - line_range.start);
		let end = char_offset(line, self.span.0.end.min(line_range.end) - line_range.start).max(start + 1);
		let snippet = Snippet {
			title: Some(Annotation {
				label: Some(&text),
				id: None,
				annotation_type: AnnotationType::Error,
			}),
			footer: vec![],
			slices: vec![
				Slice {
					source: line,
					line_start: line_no,
					origin: None,
					fold: false,
					annotations: vec![
						SourceAnnotation {
							label: "",
							annotation_type: AnnotationType::Error,
							range: (start, end),
						},
					],
				},
			],
			opt: FormatOptions {
				color: colored::control::SHOULD_COLORIZE.should_colorize(),
				..Default::default()
			},
		};
		DisplayList::from(snippet).to_string()
	}

	pub fn print_error_snippet(&self, string: &str) {
		println!("{}", self.render_error_snippet(string));
	}
}

fn char_offset(line: &str, byte_pos: usize) -> usize {
	line.char_indices()
		.take_while(|(index, _)| *index < byte_pos)
		.count()
}

/// 1-based line number and byte range (without `\n`) of the line containing `pos`.
fn find_line(string: &str, pos: usize) -> (usize, Range<usize>) {
	let mut start = 0;
	for (line_no, line) in string.split('\n').enumerate() {
		let end = start + line.len();
		if pos <= end {
			return (line_no + 1, start..end);
		}
		start = end + 1;
	}
	(1, 0..string.len())
}
