//! The generic ordered registry.

use crate::tester::{Rank, ResolveContext, Tester};
use serde_json::Value;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::{debug, warn};

struct Entry<T> {
    /// `None` marks the sentinel.
    candidate: Option<T>,
    tester: Tester,
}

/// Outcome of [`Registry::find_best`].
#[derive(Debug, PartialEq)]
pub enum Resolution<'a, T> {
    /// A registered candidate won.
    Match(&'a T),
    /// The sentinel won — no registered entry applies.
    Fallback,
}

impl<'a, T> Resolution<'a, T> {
    /// The matched candidate, if any.
    #[must_use]
    pub fn candidate(self) -> Option<&'a T> {
        match self {
            Self::Match(candidate) => Some(candidate),
            Self::Fallback => None,
        }
    }
}

/// Ordered collection of (candidate, tester) pairs resolving to the
/// highest-priority applicable candidate.
///
/// Entry 0 is a synthetic sentinel whose tester unconditionally returns
/// priority 0 and whose candidate is absent; it is created on construction
/// and can never be deregistered. Ties on priority go to the most recently
/// registered entry, so any applicable registration outranks or shadows
/// the sentinel and later registrations shadow earlier equal-priority
/// ones.
///
/// The registry is plain mutable state with no internal locking; callers
/// must serialize `register`/`deregister` against `find_best` (one thread,
/// or one mutex around the whole surface — see `formcore-host`).
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
}

impl<T: PartialEq> Registry<T> {
    /// Creates a registry holding only the sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![Entry {
                candidate: None,
                tester: Arc::new(|_: &ResolveContext<'_>, _: &Value, _: Option<&Value>| {
                    Rank::Applicable(0)
                }),
            }],
        }
    }

    /// Number of registered entries, excluding the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// True when nothing beyond the sentinel is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 1
    }

    /// Appends a (candidate, tester) entry.
    ///
    /// No uniqueness check: duplicate registrations are permitted and all
    /// are evaluated, with the later one winning ties.
    pub fn register(&mut self, candidate: T, tester: Tester) {
        self.entries.push(Entry {
            candidate: Some(candidate),
            tester,
        });
        debug!(entries = self.len(), "registered candidate");
    }

    /// Removes every entry whose tester is the same shared tester (pointer
    /// identity) and whose candidate is structurally equal to `candidate`.
    ///
    /// No-op when nothing matches; the sentinel is never removed.
    pub fn deregister(&mut self, candidate: &T, tester: &Tester) {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            !(Arc::ptr_eq(&entry.tester, tester) && entry.candidate.as_ref() == Some(candidate))
        });
        if self.entries.len() != before {
            debug!(removed = before - self.entries.len(), "deregistered candidate");
        }
    }

    /// Evaluates every entry's tester against `(context, schema, root)` and
    /// returns the best applicable candidate.
    ///
    /// Entries are evaluated in registration order and the running maximum
    /// is replaced on ties, so the most recently registered entry of equal
    /// priority wins. A panicking tester is caught and treated as not
    /// applicable; resolution continues with the remaining entries. This is
    /// a pure query — the registry is never mutated.
    #[must_use]
    pub fn find_best(
        &self,
        context: &ResolveContext<'_>,
        schema: &Value,
        root: Option<&Value>,
    ) -> Resolution<'_, T> {
        let mut best: Option<(&Entry<T>, i32)> = None;
        for (position, entry) in self.entries.iter().enumerate() {
            let verdict = catch_unwind(AssertUnwindSafe(|| (entry.tester)(context, schema, root)))
                .unwrap_or_else(|_| {
                    warn!(position, "tester panicked; treating entry as not applicable");
                    Rank::NotApplicable
                });
            if let Rank::Applicable(priority) = verdict {
                match best {
                    Some((_, current)) if priority < current => {}
                    _ => best = Some((entry, priority)),
                }
            }
        }
        match best.and_then(|(entry, _)| entry.candidate.as_ref()) {
            Some(candidate) => Resolution::Match(candidate),
            None => Resolution::Fallback,
        }
    }
}

impl<T: PartialEq> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
