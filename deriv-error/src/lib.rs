//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the source regions it points at.

// lets `#[derive(ErrorKind)]` refer to `deriv_error` from within this crate's own tests
extern crate self as deriv_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that the concrete kind can be recovered by the caller.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    ///
    /// This can be empty if the error was produced by a stage that has no access to the source
    /// code, such as the simplifier.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Replaces the spans of this error if it has none.
    pub fn with_spans(mut self, spans: Vec<Range<usize>>) -> Self {
        if self.spans.is_empty() {
            self.spans = spans;
        }
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    ///
    /// The spans of the error are passed to the report as they are. Use [`Error::write_report`]
    /// or [`Error::report_to_stderr`] to render the report against the source code.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Builds the report against the given source code. Byte offsets are converted to the
    /// character offsets that `ariadne` expects, and empty source code is replaced with a single
    /// space so that there is a line to point at.
    fn build_source_report<'a>(
        &self,
        src_id: &'a str,
        input: &str,
    ) -> (Report<(&'a str, Range<usize>)>, Source) {
        let spans = self.spans
            .iter()
            .map(|span| char_offset(input, span.start)..char_offset(input, span.end))
            .collect::<Vec<_>>();
        let source = if input.is_empty() { " " } else { input };
        (self.kind.build_report(src_id, &spans), Source::from(source))
    }

    /// Writes the report of this error to the given writer.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        let (report, source) = self.build_source_report(src_id, input);
        report.write((src_id, source), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        let (report, source) = self.build_source_report(src_id, input);
        report.eprint((src_id, source))
    }
}

/// Converts a byte offset into `input` to the number of characters before it. Offsets past the
/// end of the input are clamped to its length.
fn char_offset(input: &str, byte: usize) -> usize {
    input
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
