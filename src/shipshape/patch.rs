//! # Patch engine
//!
//! A [`Patch`] is a single idempotent content transformation: a guard
//! (`already_applied`) plus a transform (`apply`). The guard is what makes
//! re-running a batch safe — the runner consults it before every
//! application, so a patch that inserts markup can never insert it twice.
//!
//! Most patches are data: a [`RulePatch`] built from ordered [`Rule`]s
//! (regex + replacement + note) under a [`ApplyMode`] policy. Patches
//! that need real logic (deduplication, conditional attribute edits)
//! implement [`Patch`] directly.
//!
//! Matching is done over raw text, not a DOM. Patterns are written
//! permissively on purpose: either quote style, optional whitespace,
//! optional trailing slash on self-closing tags.

use crate::error::Result;

/// How a rule list is applied to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Try rules in order; the first rule that matches is applied to its
    /// first occurrence and the rest are skipped.
    FirstMatch,
    /// Every rule is applied to all of its non-overlapping matches.
    AllMatches,
}

/// One (pattern, replacement) pair with a human-readable change note.
#[derive(Debug)]
pub struct Rule {
    pub pattern: regex::Regex,
    pub replacement: String,
    pub note: String,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &str, note: &str) -> Result<Self> {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
            replacement: replacement.to_string(),
            note: note.to_string(),
        })
    }
}

/// Result of applying one patch to one file's content.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub content: String,
    /// One entry per applied change; empty means nothing matched.
    pub notes: Vec<String>,
}

impl PatchOutcome {
    pub fn unchanged(content: &str) -> Self {
        Self {
            content: content.to_string(),
            notes: Vec::new(),
        }
    }

    pub fn changed(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// A named, pure, idempotent content transformation.
///
/// Implementations must uphold `apply(apply(c)) == apply(c)`; for
/// insertion-style patches that is the guard's job, and the runner
/// refuses to apply any patch whose guard reports it is already in place.
pub trait Patch {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// The idempotency guard. Must never return false for content the
    /// patch has already been applied to.
    fn already_applied(&self, content: &str) -> bool;

    /// Transform `content`. Returns the (possibly unchanged) new content
    /// plus a note per applied change. No match is not an error.
    fn apply(&self, content: &str) -> Result<PatchOutcome>;
}

impl std::fmt::Debug for dyn Patch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Patch").field("name", &self.name()).finish()
    }
}

/// A patch defined entirely by data: a guard pattern plus an ordered rule list.
pub struct RulePatch {
    name: String,
    description: String,
    /// Guard pattern; a match means the patch is already applied. `None`
    /// means the rules themselves are idempotent (pure substitutions
    /// whose output no longer matches their own patterns).
    guard: Option<regex::Regex>,
    mode: ApplyMode,
    rules: Vec<Rule>,
}

impl RulePatch {
    pub fn new(name: &str, description: &str, mode: ApplyMode, rules: Vec<Rule>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            guard: None,
            mode,
            rules,
        }
    }

    pub fn with_guard(mut self, pattern: &str) -> Result<Self> {
        self.guard = Some(regex::Regex::new(pattern)?);
        Ok(self)
    }
}

impl Patch for RulePatch {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn already_applied(&self, content: &str) -> bool {
        self.guard.as_ref().is_some_and(|g| g.is_match(content))
    }

    fn apply(&self, content: &str) -> Result<PatchOutcome> {
        let mut outcome = PatchOutcome::unchanged(content);

        match self.mode {
            ApplyMode::FirstMatch => {
                for rule in &self.rules {
                    if rule.pattern.is_match(&outcome.content) {
                        outcome.content = rule
                            .pattern
                            .replace(&outcome.content, rule.replacement.as_str())
                            .into_owned();
                        outcome.notes.push(rule.note.clone());
                        break;
                    }
                }
            }
            ApplyMode::AllMatches => {
                for rule in &self.rules {
                    let matches = rule.pattern.find_iter(&outcome.content).count();
                    if matches == 0 {
                        continue;
                    }
                    let replaced = rule
                        .pattern
                        .replace_all(&outcome.content, rule.replacement.as_str())
                        .into_owned();
                    // A substitution that produces its own input (e.g. an
                    // already-rewritten reference) is not a change.
                    if replaced != outcome.content {
                        outcome.content = replaced;
                        outcome.notes.push(format!("{} ({} match(es))", rule.note, matches));
                    }
                }
            }
        }

        Ok(outcome)
    }
}
