//! Check registry: name to predicate, with derived variants
//!
//! Registering a check `foo` installs four entries:
//!
//! - `foo` - the predicate itself
//! - `otherFoo` - `foo` applied to another field's value, named by the first parameter
//! - `notFoo` - negation of `foo`
//! - `notOtherFoo` - negation of `otherFoo`

use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use crate::{evaluator::EvalContext, value::Value};

/// A check predicate.
///
/// Receives the evaluation context (for cross-field lookups), the subject
/// value, and the parameters from the identifier's `name:params` suffix.
pub type CheckFn = dyn Fn(&EvalContext, &Value, &[&str]) -> bool + Send + Sync;

/// Prefix of the cross-field variant
pub const OTHER_PREFIX: &str = "other";
/// Prefix of the negated variant
pub const NOT_PREFIX: &str = "not";

/// Joins a prefix to a name, upper-casing the name's first character.
///
/// `derived_name("other", "min")` is `otherMin`.
pub fn derived_name(prefix: &str, name: &str) -> String {
    let mut chars = name.chars();
    let mut derived = String::with_capacity(prefix.len() + name.len());
    derived.push_str(prefix);
    if let Some(first) = chars.next() {
        derived.extend(first.to_uppercase());
        derived.push_str(chars.as_str());
    }
    derived
}

fn shared<F>(check: F) -> Arc<CheckFn>
where
    F: Fn(&EvalContext, &Value, &[&str]) -> bool + Send + Sync + 'static,
{
    Arc::new(check)
}

/// The set of checks known to a validator.
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: HashMap<String, Arc<CheckFn>>,
}

impl CheckRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check and its three derived variants.
    ///
    /// Any existing entries under the same four names are replaced.
    pub fn register<F>(&mut self, name: &str, check: F)
    where
        F: Fn(&EvalContext, &Value, &[&str]) -> bool + Send + Sync + 'static,
    {
        let base = shared(check);

        let other_base = Arc::clone(&base);
        let other = shared(move |ctx, _value, params| {
            let (field, rest) = params.split_first().map_or(("", params), |(f, r)| (*f, r));
            match ctx.field(field) {
                Some(value) => other_base(ctx, value, rest),
                None => other_base(ctx, &Value::Absent, rest),
            }
        });

        let not_base = Arc::clone(&base);
        let not = shared(move |ctx, value, params| !not_base(ctx, value, params));

        let not_other_base = Arc::clone(&other);
        let not_other = shared(move |ctx, value, params| !not_other_base(ctx, value, params));

        let other_name = derived_name(OTHER_PREFIX, name);
        let not_name = derived_name(NOT_PREFIX, name);
        let not_other_name = derived_name(NOT_PREFIX, &other_name);

        if self.checks.contains_key(name) {
            debug!(check = name, "replacing registered check");
        } else {
            debug!(check = name, "registering check");
        }

        self.checks.insert(name.to_string(), base);
        self.checks.insert(other_name, other);
        self.checks.insert(not_name, not);
        self.checks.insert(not_other_name, not_other);
    }

    /// Look up a check by exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<CheckFn>> {
        self.checks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::Fields;

    fn is_yes(_: &EvalContext, value: &Value, _: &[&str]) -> bool {
        value.as_text().as_deref() == Some("yes")
    }

    #[test]
    fn derived_names_capitalize_first_char() {
        assert_eq!(derived_name("other", "min"), "otherMin");
        assert_eq!(derived_name("not", "otherMin"), "notOtherMin");
        assert_eq!(derived_name("not", "éclair"), "notÉclair");
        assert_eq!(derived_name("not", ""), "not");
    }

    #[test]
    fn register_installs_four_entries() {
        let mut registry = CheckRegistry::new();
        registry.register("yes", is_yes);

        assert_eq!(registry.names(), vec!["notOtherYes", "notYes", "otherYes", "yes"]);
    }

    #[test]
    fn derived_variants_negate_and_redirect() {
        let mut registry = CheckRegistry::new();
        registry.register("yes", is_yes);

        let mut table = Fields::new();
        table.insert("answer", Value::from("yes"));
        let ctx = EvalContext::new(&table);
        let subject = Value::from("no");

        let call = |name: &str, params: &[&str]| registry.get(name).unwrap()(&ctx, &subject, params);

        assert!(!call("yes", &[]));
        assert!(call("notYes", &[]));
        assert!(call("otherYes", &["answer"]));
        assert!(!call("notOtherYes", &["answer"]));
        assert!(!call("otherYes", &["missing"]));
    }

    #[test]
    fn reregistering_replaces_derivatives() {
        let mut registry = CheckRegistry::new();
        registry.register("flag", |_: &EvalContext, _: &Value, _: &[&str]| true);
        registry.register("flag", |_: &EvalContext, _: &Value, _: &[&str]| false);

        let table = Fields::new();
        let ctx = EvalContext::new(&table);

        assert_eq!(registry.len(), 4);
        assert!(registry.get("notFlag").unwrap()(&ctx, &Value::Absent, &[]));
    }
}
