//! Comments captured by the lexer.
//!
//! Comments are collected into a [`CommentList`] no matter which channel the
//! corresponding token lands on, so tools that need the exact comment text
//! (formatters, doc extractors) never have to re-scan the source.

use std::fmt;

use crate::{LineCol, Span};

/// Line (`// ...`) or block (`/* ... */`) comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    Line,
    Block,
}

/// A source comment with its location and full text, delimiters included.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub kind: CommentKind,
    pub span: Span,
    pub start: LineCol,
    pub end: LineCol,
    pub text: String,
}

impl Comment {
    #[inline]
    pub fn is_block(&self) -> bool {
        matches!(self.kind, CommentKind::Block)
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.span)
    }
}

/// Append-only list of comments in source order.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CommentList {
    comments: Vec<Comment>,
}

impl CommentList {
    #[inline]
    pub fn new() -> Self {
        CommentList {
            comments: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Comment] {
        &self.comments
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Comment> {
        self.comments
    }

    /// Comments that end at or before `pos`.
    pub fn comments_before(&self, pos: u32) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(move |c| c.span.end <= pos)
    }
}

impl fmt::Debug for CommentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommentList({} comments)", self.comments.len())
    }
}

impl std::ops::Index<usize> for CommentList {
    type Output = Comment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.comments[index]
    }
}

impl<'a> IntoIterator for &'a CommentList {
    type Item = &'a Comment;
    type IntoIter = std::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(kind: CommentKind, start: u32, text: &str) -> Comment {
        #[allow(clippy::cast_possible_truncation, reason = "test text is short")]
        let end = start + text.len() as u32;
        Comment {
            kind,
            span: Span::new(start, end),
            start: LineCol::START,
            end: LineCol::START,
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_comment_list_keeps_order() {
        let mut list = CommentList::new();
        list.push(comment(CommentKind::Line, 0, "// a"));
        list.push(comment(CommentKind::Block, 10, "/* b */"));

        assert_eq!(list.len(), 2);
        assert!(!list[0].is_block());
        assert!(list.get(1).is_some_and(Comment::is_block));
        let texts: Vec<&str> = list.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["// a", "/* b */"]);
    }

    #[test]
    fn test_comments_before() {
        let mut list = CommentList::new();
        list.push(comment(CommentKind::Line, 0, "// a"));
        list.push(comment(CommentKind::Line, 10, "// b"));
        assert_eq!(list.comments_before(5).count(), 1);
        assert_eq!(list.comments_before(14).count(), 2);
    }

    #[test]
    fn test_debug_format() {
        let list = CommentList::new();
        assert_eq!(format!("{list:?}"), "CommentList(0 comments)");
        assert!(list.is_empty());
    }
}
