//! Comment collection.

use grove_ir::{Comment, CommentKind, CommentList, LineCol, Span};

/// Records every comment the scanner matches, whatever its channel.
#[derive(Clone, Debug, Default)]
pub(crate) struct CommentCollector {
    comments: CommentList,
}

impl CommentCollector {
    pub(crate) fn new() -> Self {
        CommentCollector {
            comments: CommentList::new(),
        }
    }

    pub(crate) fn collect(
        &mut self,
        kind: CommentKind,
        span: Span,
        start: LineCol,
        end: LineCol,
        text: &str,
    ) {
        self.comments.push(Comment {
            kind,
            span,
            start,
            end,
            text: text.to_owned(),
        });
    }

    pub(crate) fn list(&self) -> &CommentList {
        &self.comments
    }

    pub(crate) fn finish(self) -> CommentList {
        self.comments
    }
}

#[cfg(test)]
mod tests {
    use grove_ir::{CommentKind, LineCol, Span};
    use pretty_assertions::assert_eq;

    use super::CommentCollector;

    #[test]
    fn collects_in_order() {
        let mut collector = CommentCollector::new();
        collector.collect(
            CommentKind::Line,
            Span::new(0, 4),
            LineCol::new(1, 1),
            LineCol::new(1, 5),
            "// a",
        );
        collector.collect(
            CommentKind::Block,
            Span::new(5, 10),
            LineCol::new(2, 1),
            LineCol::new(2, 6),
            "/*b*/",
        );
        assert_eq!(collector.list().len(), 2);
        let comments = collector.finish();
        assert_eq!(comments[0].text, "// a");
        assert!(comments[1].is_block());
    }
}
