//! In-place rewriting of record content.
//!
//! The rewriter owns the progressively mutated content together with the
//! substitution counter and per-record cap. Callers check [`at_capacity`]
//! before resolving the next reference, which stops the whole pipeline for
//! that record once the cap is reached rather than merely suppressing the
//! replacement.
//!
//! [`at_capacity`]: ContentRewriter::at_capacity

/// Rewrites one record's content, one reference at a time.
#[derive(Debug)]
pub struct ContentRewriter {
    content: String,
    replaced: usize,
    max_images: Option<usize>,
}

impl ContentRewriter {
    /// Wrap `content` for rewriting, with an optional cap on the number of
    /// references substituted.
    #[must_use]
    pub fn new(content: String, max_images: Option<usize>) -> Self {
        Self {
            content,
            replaced: 0,
            max_images,
        }
    }

    /// True once the per-record cap has been reached.
    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.max_images.is_some_and(|max| self.replaced >= max)
    }

    /// Replace every literal occurrence of `from` in the current content.
    ///
    /// The counter increments once per call, not once per occurrence: a URL
    /// repeated in the content counts as a single substitution. Intentional
    /// per-reference counting.
    pub fn substitute(&mut self, from: &str, to: &str) {
        self.content = self.content.replace(from, to);
        self.replaced += 1;
    }

    /// Number of references substituted so far.
    #[must_use]
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Final content and substitution count.
    #[must_use]
    pub fn finish(self) -> (String, usize) {
        (self.content, self.replaced)
    }
}
