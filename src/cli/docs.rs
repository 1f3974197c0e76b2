//! Reference text for the pupil CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Grammar,
    Checks,
    CrossField,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "grammar" | "syntax" => Some(Self::Grammar),
            "checks" | "check" | "functions" => Some(Self::Checks),
            "cross_field" | "other" | "fields" => Some(Self::CrossField),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"PUPIL DOCUMENTATION

Pupil rules combine named checks on a value with && and ||, group them with
parentheses, and negate them with !.

DOCUMENTATION CATEGORIES

  grammar           Rule syntax and how results are combined
  checks            Built-in checks and their derived variants
  cross-field       Checking one field against another in a batch
  errors            What makes a rule fail to parse or evaluate

QUICK REFERENCE

  required              Check with no parameters
  between:3,10          Check with parameters
  a && b                Both
  a || b                Either
  !a                    Negation
  (a || b) && c         Grouping

Run 'pupil doc <category>' for details.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::parse(name) {
        Some(DocCategory::Grammar) => Ok(GRAMMAR_DOC),
        Some(DocCategory::Checks) => Ok(CHECKS_DOC),
        Some(DocCategory::CrossField) => Ok(CROSS_FIELD_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const GRAMMAR_DOC: &str = r#"GRAMMAR

  rule       := term (("&&" | "||") term)*
  term       := "!"? (identifier | "(" rule ")")
  identifier := name (":" param ("," param)*)?

  Parameters are raw text. There is no quoting: a parameter cannot contain
  a comma or a colon. A single & or | is ordinary identifier text.

COMBINING RESULTS

  There is no precedence. Inside each group results are folded left to
  right, starting from false under ||:

    ||   turns the running result true if the next result is true,
         and never turns it false
    &&   keeps the running result true only if the next result is true

  So "min:10 && max:1 || min:1" on "5" is true: the final || sees a true
  result and the running result becomes true regardless of what came before.

  Each group is folded on its own and contributes one result to its parent.
"#;

const CHECKS_DOC: &str = r#"BUILT-IN CHECKS

  required          Not absent, null or the empty string
  min:n             Number >= n, or length >= n for non-numbers
  max:n             Number <= n, or length <= n for non-numbers
  between:lo,hi     lo <= number <= hi, or the same bounds on length
  email             RFC 822 address syntax

  A value is a number if its text parses as a finite number. Lengths are
  counted in characters.

DERIVED VARIANTS

  Every check foo also registers:

    notFoo          Negation of foo
    otherFoo        foo applied to another field, named by the first parameter
    notOtherFoo     Negation of otherFoo

  Example: notEmail, otherMin:age,18, notOtherRequired:nickname
"#;

const CROSS_FIELD_DOC: &str = r#"CROSS-FIELD CHECKS

  In a batch every field's value is visible to every rule. The other*
  variants read a field by name instead of the value being validated:

    echo '{"pwd": ["secret", "required"],
           "confirm": ["secret", "otherRequired:pwd && min:6"]}' | pupil batch

  A field name that isn't in the batch reads as absent.

  'pupil check' validates a single value, stored under the name "value".
"#;

const ERRORS_DOC: &str = r#"ERRORS

  Unknown input type    A batch rule was neither a string nor a token array
  Unclosed blocks       A '(' was never closed
  No block to ascend to A ')' had no open group
  Function not found    A rule names a check that isn't registered

  Any error stops the whole batch. No partial results are returned.
"#;
