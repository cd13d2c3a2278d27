//! Persistent type sequences.
//!
//! [`Seq`] is the runtime twin of the `Nil`/`Cons` lists in
//! `beautiful-types`: an immutable cons list whose nodes live in a
//! [`Bump`] arena. Growing a sequence allocates new nodes and leaves the
//! original untouched, so a sequence can be shared freely while it is built.

use alloc::vec::Vec;
use bumpalo::Bump;

use crate::error::{DeclError, Span};

#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Seq<'a, T> {
    Nil,
    Cons(T, &'a Seq<'a, T>),
}

/// A constructor a sequence can be applied to.
pub trait SeqCtor<'a, T> {
    type Output;

    /// Build the output from the whole argument list, in order.
    fn construct(&self, arena: &'a Bump, args: &'a [T]) -> Result<Self::Output, DeclError>;
}

impl<'a, T: Copy> Seq<'a, T> {
    pub fn nil(arena: &'a Bump) -> &'a Seq<'a, T> {
        arena.alloc(Seq::Nil)
    }

    pub fn from_slice(arena: &'a Bump, items: &[T]) -> &'a Seq<'a, T> {
        items
            .iter()
            .rev()
            .fold(Seq::nil(arena), |tail, &item| tail.push_front(arena, item))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Seq::Nil)
    }

    pub fn iter(&self) -> SeqIter<'_, 'a, T> {
        SeqIter { next: self }
    }

    pub fn push_front(&'a self, arena: &'a Bump, item: T) -> &'a Seq<'a, T> {
        arena.alloc(Seq::Cons(item, self))
    }

    pub fn push_back(&'a self, arena: &'a Bump, item: T) -> &'a Seq<'a, T> {
        match self {
            Seq::Nil => Seq::nil(arena).push_front(arena, item),
            Seq::Cons(head, tail) => tail.push_back(arena, item).push_front(arena, *head),
        }
    }

    /// Feed the elements, in order, to `ctor`.
    pub fn apply<C>(&self, arena: &'a Bump, ctor: &C) -> Result<C::Output, DeclError>
    where
        C: SeqCtor<'a, T>,
    {
        let args: Vec<T> = self.iter().collect();
        ctor.construct(arena, arena.alloc_slice_copy(&args))
    }

    /// `[x1, .., xn]` to `[xn, x1, .., x(n-1)]`.
    ///
    /// Fails with [`DeclError::EmptySequence`] (blamed on `span`) when there
    /// is no last element to move.
    pub fn rotate_last_to_front(
        &'a self,
        arena: &'a Bump,
        span: &Span,
    ) -> Result<&'a Seq<'a, T>, DeclError> {
        self.last_as_first(arena, Seq::nil(arena))
            .ok_or_else(|| DeclError::EmptySequence { span: span.clone() })
    }

    fn last_as_first(&'a self, arena: &'a Bump, acc: &'a Seq<'a, T>) -> Option<&'a Seq<'a, T>> {
        match self {
            Seq::Nil => None,
            Seq::Cons(last, Seq::Nil) => Some(acc.push_front(arena, *last)),
            Seq::Cons(head, tail) => tail.last_as_first(arena, acc.push_back(arena, *head)),
        }
    }
}

pub struct SeqIter<'s, 'a, T> {
    next: &'s Seq<'a, T>,
}

impl<'s, 'a, T: Copy> Iterator for SeqIter<'s, 'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.next {
            Seq::Nil => None,
            Seq::Cons(head, tail) => {
                self.next = *tail;
                Some(*head)
            }
        }
    }
}
