use std::{mem, slice};

use tracing::{debug, info, trace};

use crate::{
    ast::{Combinator, Invocation, NodeId, NodeKind, Tree},
    batch::{Fields, RuleBatch, ValidationResults},
    checks,
    parser::{ParseError, Rule, parse},
    registry::CheckRegistry,
    value::Value,
};

/// Name the subject is stored under when validating a single value.
pub const SINGLE_FIELD: &str = "value";

/// Read-only context handed to every check.
///
/// Holds the cross-field table: the current value of every field in the batch
/// being validated, so a check on one field can read another by name.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    fields: &'a Fields<Value>,
}

impl<'a> EvalContext<'a> {
    pub fn new(fields: &'a Fields<Value>) -> Self {
        EvalContext { fields }
    }

    /// Value of another field in the same batch
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &'a Fields<Value> {
        self.fields
    }
}

/// Errors that can occur during rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An identifier names a check that isn't registered
    #[error("Validator function '{0}' was not found")]
    UnknownCheck(String),
}

/// Anything that can stop a validation call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Running fold state of one group.
///
/// OR can only switch the accumulator on; AND can switch it off. The
/// combinator in effect is the last one seen in the group, OR before any.
#[derive(Debug, Clone, Copy)]
struct Fold {
    accumulator: bool,
    combinator: Combinator,
    negate_next: bool,
}

impl Default for Fold {
    fn default() -> Self {
        Fold {
            accumulator: false,
            combinator: Combinator::Or,
            negate_next: false,
        }
    }
}

impl Fold {
    fn step(&mut self, result: bool) {
        let result = if mem::take(&mut self.negate_next) {
            !result
        } else {
            result
        };

        match self.combinator {
            Combinator::Or => {
                if result {
                    self.accumulator = true;
                }
            }
            Combinator::And => self.accumulator = self.accumulator && result,
        }
    }
}

struct Frame<'n> {
    children: slice::Iter<'n, NodeId>,
    fold: Fold,
}

impl<'n> Frame<'n> {
    fn new(group: &'n [NodeId]) -> Self {
        Frame {
            children: group.iter(),
            fold: Fold::default(),
        }
    }
}

/// Validates values against rules.
///
/// Owns its check registry; a new validator starts with the default checks.
/// Validation only borrows the validator, and the cross-field table lives
/// for one `validate` call, so one instance can serve many batches.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: CheckRegistry,
}

impl Default for Validator {
    fn default() -> Self {
        let mut registry = CheckRegistry::new();
        checks::install(&mut registry);
        Validator { registry }
    }
}

impl Validator {
    /// Creates a validator with the default checks installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator over an existing registry, without adding defaults.
    pub fn with_registry(registry: CheckRegistry) -> Self {
        Validator { registry }
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Register a check along with its `other`, `not` and `notOther` variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use pupil::{EvalContext, Validator, Value};
    ///
    /// let mut validator = Validator::new();
    /// validator.add_check("equals", |_: &EvalContext, value: &Value, params: &[&str]| {
    ///     value.as_text().as_deref() == params.first().copied()
    /// });
    ///
    /// assert!(validator.validate_one("abc", "equals:abc").unwrap());
    /// assert!(validator.validate_one("abc", "notEquals:xyz").unwrap());
    /// ```
    pub fn add_check<F>(&mut self, name: &str, check: F)
    where
        F: Fn(&EvalContext, &Value, &[&str]) -> bool + Send + Sync + 'static,
    {
        self.registry.register(name, check);
    }

    /// Validates every field of a batch.
    ///
    /// The values of all fields are collected into the cross-field table
    /// first, then each rule is parsed and evaluated in batch order. The
    /// first failure aborts the whole batch.
    ///
    /// # Examples
    ///
    /// ```
    /// use pupil::{Field, RuleBatch, Validator};
    ///
    /// let mut batch = RuleBatch::new();
    /// batch.insert("name", Field::new("Ada", "required && max:20"));
    /// batch.insert("age", Field::new("7", "between:18,130"));
    ///
    /// let results = Validator::new().validate(&batch).unwrap();
    /// assert_eq!(results.get("name"), Some(&true));
    /// assert_eq!(results.get("age"), Some(&false));
    /// ```
    pub fn validate(&self, batch: &RuleBatch) -> Result<ValidationResults, ValidationError> {
        let table: Fields<Value> = batch
            .iter()
            .map(|(name, field)| (name, field.value.clone()))
            .collect();
        let ctx = EvalContext::new(&table);

        let mut results = ValidationResults::new();
        for (name, field) in batch.iter() {
            let tree = parse(field.rule.clone())?;
            let outcome = self.evaluate(&field.value, &tree, &ctx)?;
            debug!(field = name, outcome, "validated field");
            results.insert(name, outcome);
        }

        let passed = results.iter().filter(|(_, outcome)| **outcome).count();
        info!(fields = ctx.fields().len(), passed, "validated batch");
        Ok(results)
    }

    /// Validates a single value. The cross-field table holds only this value,
    /// under [`SINGLE_FIELD`].
    pub fn validate_one(
        &self,
        value: impl Into<Value>,
        rule: impl Into<Rule>,
    ) -> Result<bool, ValidationError> {
        let value = value.into();
        let mut table = Fields::new();
        table.insert(SINGLE_FIELD, value.clone());

        let tree = parse(rule)?;
        Ok(self.evaluate(&value, &tree, &EvalContext::new(&table))?)
    }

    /// Evaluates a parsed rule against a value.
    ///
    /// Each group folds its children's results left to right; a nested group
    /// gets its own fold and contributes its final result to the parent.
    pub fn evaluate(
        &self,
        value: &Value,
        tree: &Tree,
        ctx: &EvalContext,
    ) -> Result<bool, EvalError> {
        let mut frames = vec![Frame::new(tree.root().children())];

        while let Some(frame) = frames.last_mut() {
            match frame.children.next() {
                Some(&id) => match &tree.node(id).kind {
                    NodeKind::Combinator(combinator) => frame.fold.combinator = *combinator,
                    NodeKind::Negation => frame.fold.negate_next = true,
                    NodeKind::Identifier(raw) => {
                        let outcome = self.invoke(raw, value, ctx)?;
                        frame.fold.step(outcome);
                    }
                    NodeKind::Group(children) => frames.push(Frame::new(children)),
                },
                None => {
                    let finished = frames.pop().is_some_and(|f| f.fold.accumulator);
                    match frames.last_mut() {
                        Some(parent) => parent.fold.step(finished),
                        None => return Ok(finished),
                    }
                }
            }
        }

        Ok(false)
    }

    fn invoke(&self, raw: &str, value: &Value, ctx: &EvalContext) -> Result<bool, EvalError> {
        let call = Invocation::parse(raw);
        let check = self
            .registry
            .get(call.name)
            .ok_or_else(|| EvalError::UnknownCheck(call.name.to_string()))?;

        let outcome = check(ctx, value, &call.params);
        trace!(
            check = call.name,
            value = value.type_name(),
            params = ?call.params,
            outcome,
            "invoked check"
        );
        Ok(outcome)
    }
}
