//! Comments and comment groups.
//!
//! A [`CommentGroup`] is a shared handle: the node it documents and the
//! file-wide [`File::comments`](crate::File::comments) list hold the same
//! group, so clearing it through one owner is visible through the other.
//! Handles are `!Send`; a tree is mutated by one thread at a time.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A single `//`-style or `/*`-style comment.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Comment {
    /// Comment text, including the comment markers.
    pub text: String,
}

impl Comment {
    /// Creates a comment with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A sequence of comments with no other tokens and no blank lines between.
///
/// Cloning the handle shares the underlying group. Equality compares
/// contents, not identity; use [`CommentGroup::same_group`] for identity.
#[derive(Clone, Default)]
pub struct CommentGroup(Rc<RefCell<Vec<Comment>>>);

impl CommentGroup {
    /// Creates a group holding the given comments.
    #[must_use]
    pub fn new(comments: impl IntoIterator<Item = Comment>) -> Self {
        Self(Rc::new(RefCell::new(comments.into_iter().collect())))
    }

    /// Creates a group with one comment per line of text.
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(lines.into_iter().map(Comment::new))
    }

    /// Returns the number of comments in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if the group holds no comments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Borrows the comments in this group.
    ///
    /// # Panics
    ///
    /// Panics if the group is being rewritten at the same time.
    #[must_use]
    pub fn comments(&self) -> Ref<'_, [Comment]> {
        Ref::map(self.0.borrow(), Vec::as_slice)
    }

    /// The comment texts joined by newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.0
            .borrow()
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Appends a comment to the group.
    pub fn push(&self, comment: Comment) {
        self.0.borrow_mut().push(comment);
    }

    /// Removes every comment from the group, for every holder of the handle.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Takes the comments out, leaving the group empty.
    #[must_use]
    pub fn take(&self) -> Vec<Comment> {
        self.0.take()
    }

    /// Replaces the comments in the group.
    pub fn replace(&self, comments: Vec<Comment>) {
        *self.0.borrow_mut() = comments;
    }

    /// Returns true if both handles refer to the same group.
    #[must_use]
    pub fn same_group(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for CommentGroup {
    fn eq(&self, other: &Self) -> bool {
        self.same_group(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for CommentGroup {}

impl fmt::Debug for CommentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommentGroup")
            .field(&*self.0.borrow())
            .finish()
    }
}
