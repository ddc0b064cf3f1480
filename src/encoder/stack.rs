//! # Relationship Path Stack
//!
//! Records the chain of relationship names from the top-level resource to the
//! relationship being processed. Its length is the include depth the encoder
//! compares against a schema's limit.
//!
//! Names are pushed with [`LinkStack::enter`], which returns a [`StackFrame`]
//! guard. Dropping the guard pops the name, so the stack is unwound on every
//! exit path, including an early `?` return.

use std::ops::{Deref, DerefMut};

#[derive(Debug, Default)]
pub struct LinkStack {
    names: Vec<String>,
}

impl LinkStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `name` for the lifetime of the returned frame.
    pub fn enter(&mut self, name: &str) -> StackFrame<'_> {
        self.names.push(name.to_string());
        StackFrame { stack: self }
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Dotted path, e.g. `author.publisher.country`.
    pub fn path(&self) -> String {
        self.names.join(".")
    }
}

/// One pushed relationship name. Derefs to the stack so nested traversal can
/// push further frames through it.
#[derive(Debug)]
pub struct StackFrame<'s> {
    stack: &'s mut LinkStack,
}

impl Deref for StackFrame<'_> {
    type Target = LinkStack;

    fn deref(&self) -> &LinkStack {
        self.stack
    }
}

impl DerefMut for StackFrame<'_> {
    fn deref_mut(&mut self) -> &mut LinkStack {
        self.stack
    }
}

impl Drop for StackFrame<'_> {
    fn drop(&mut self) {
        self.stack.names.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descend(stack: &mut LinkStack, names: &[&str], fail_at: usize) -> Result<(), String> {
        let Some((name, rest)) = names.split_first() else {
            return Ok(());
        };
        let mut frame = stack.enter(name);
        if frame.depth() == fail_at {
            return Err(frame.path());
        }
        descend(&mut frame, rest, fail_at)
    }

    #[test]
    fn test_frames_nest_and_unwind() {
        let mut stack = LinkStack::new();
        {
            let mut author = stack.enter("author");
            assert_eq!(author.depth(), 1);
            {
                let publisher = author.enter("publisher");
                assert_eq!(publisher.depth(), 2);
                assert_eq!(publisher.path(), "author.publisher");
            }
            assert_eq!(author.depth(), 1);
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn test_early_return_pops_every_frame() {
        let mut stack = LinkStack::new();
        let err = descend(&mut stack, &["author", "publisher", "country"], 3).unwrap_err();
        assert_eq!(err, "author.publisher.country");
        assert_eq!(stack.depth(), 0);

        assert!(descend(&mut stack, &["author", "publisher"], 3).is_ok());
        assert!(stack.is_empty());
    }
}
