//! Testing utilities for command tree assertions
//!
//! Parser tests want assurance on the full shape of the tree a template
//! compiles to: node types, option lists, bounds, separators, nested
//! values. Matching that shape by hand buries the intent in boilerplate:
//!
//! ```rust,ignore
//! match &command {
//!     Command::Variant(v) => {
//!         assert_eq!(v.options.len(), 2);
//!         match &v.options[0].value {
//!             Command::Literal(l) => assert_eq!(l.text, "red"),
//!             _ => panic!("Expected literal"),
//!         }
//!         // ... repeat for every option
//!     }
//!     _ => panic!("Expected variant"),
//! }
//! ```
//!
//! The [assert_command](fn@assert_command) builder expresses the same
//! checks as a chain that mirrors the tree:
//!
//! ```rust,ignore
//! use promptspin::testing::assert_command;
//!
//! assert_command(&command)
//!     .assert_variant()
//!     .option_count(2)
//!     .option(0, |option| {
//!         option.assert_literal().text("red");
//!     });
//! ```
//!
//! Failures carry the path from the root, so a broken nested check reads
//! like:
//!
//! ```text
//! root:options[1]:children[0]: Expected text to be 'blue', but got 'green'
//! ```
//!
//! and count mismatches summarize what was actually there:
//!
//! ```text
//! root: Expected 2 options, found 3 options: [Literal, Variant, Literal]
//! ```
//!
//! When a new command type joins the tree, give it an assertion struct in
//! `testing/testing_assertions.rs` and an `assert_*` entry on
//! `CommandAssertion`; the path plumbing comes along for free.

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{
    assert_command, AccessAssertion, AssignmentAssertion, BranchAssertion, ChildrenAssertion,
    CommandAssertion, CommentAssertion, ConditionAssertion, LiteralAssertion,
    ProbabilityAssertion, SequenceAssertion, VariantAssertion, WildcardAssertion, WrapAssertion,
};
pub use testing_matchers::TextMatch;
