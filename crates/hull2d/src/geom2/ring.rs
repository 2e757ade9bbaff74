//! Circular indexing over a vertex slice.
//!
//! All wrap-around arithmetic on hull indices goes through `Ring`: the
//! tangent search, the splice, the chain's tidy pass and `Hull::edges`.

use super::kernel::Pt2;

/// Read-only circular view of a non-empty vertex sequence.
#[derive(Clone, Copy, Debug)]
pub struct Ring<'a> {
    pts: &'a [Pt2],
}

impl<'a> Ring<'a> {
    /// Panics (debug) on an empty slice; every hull reaching the merger has a vertex.
    #[inline]
    pub fn new(pts: &'a [Pt2]) -> Self {
        debug_assert!(!pts.is_empty(), "ring over empty slice");
        Self { pts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        if i + 1 == self.pts.len() {
            0
        } else {
            i + 1
        }
    }

    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.pts.len() - 1
        } else {
            i - 1
        }
    }

    #[inline]
    pub fn at(&self, i: usize) -> Pt2 {
        self.pts[i]
    }

    /// Vertices from `from` to `to` inclusive, stepping forward.
    /// `from == to` yields a single vertex, never the full loop.
    pub fn walk(&self, from: usize, to: usize) -> Walk<'a> {
        Walk {
            ring: *self,
            cur: from,
            end: to,
            done: false,
        }
    }

    /// Index of the best vertex, where `better(a, b)` means `a` beats `b`.
    /// The first one wins on ties.
    pub fn argmax_by<F>(&self, mut better: F) -> usize
    where
        F: FnMut(&Pt2, &Pt2) -> bool,
    {
        let mut best = 0;
        for i in 1..self.pts.len() {
            if better(&self.pts[i], &self.pts[best]) {
                best = i;
            }
        }
        best
    }
}

/// Iterator returned by [`Ring::walk`].
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    ring: Ring<'a>,
    cur: usize,
    end: usize,
    done: bool,
}

impl Iterator for Walk<'_> {
    type Item = Pt2;

    fn next(&mut self) -> Option<Pt2> {
        if self.done {
            return None;
        }
        let p = self.ring.at(self.cur);
        if self.cur == self.end {
            self.done = true;
        } else {
            self.cur = self.ring.next(self.cur);
        }
        Some(p)
    }
}
