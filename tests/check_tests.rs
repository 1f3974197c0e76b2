use pupil::registry::derived_name;
use pupil::{CheckRegistry, EvalContext, Validator, Value};

fn check(value: impl Into<Value>, rule: &str) -> bool {
    Validator::new().validate_one(value, rule).unwrap()
}

// ============================================================================
// Registry contents
// ============================================================================

#[test]
fn test_defaults_and_variants_are_registered() {
    let validator = Validator::new();
    let registry = validator.registry();

    for base in ["required", "min", "max", "between", "email"] {
        assert!(registry.contains(base), "missing {}", base);
        for prefix in ["other", "not"] {
            let name = derived_name(prefix, base);
            assert!(registry.contains(&name), "missing {}", name);
        }
        let not_other = derived_name("not", &derived_name("other", base));
        assert!(registry.contains(&not_other), "missing {}", not_other);
    }

    assert_eq!(registry.len(), 20);
}

#[test]
fn test_variant_names() {
    let registry = Validator::new().registry().clone();
    assert!(registry.contains("otherMin"));
    assert!(registry.contains("notMin"));
    assert!(registry.contains("notOtherMin"));
    assert!(!registry.contains("othermin"));
}

#[test]
fn test_empty_validator_has_no_checks() {
    let validator = Validator::with_registry(CheckRegistry::new());
    assert!(validator.registry().is_empty());
    assert!(validator.validate_one("x", "required").is_err());
}

#[test]
fn test_replacing_a_default() {
    let mut validator = Validator::new();
    validator.add_check("required", |_: &EvalContext, value: &Value, _: &[&str]| {
        value.as_text().is_some_and(|s| !s.trim().is_empty())
    });

    assert!(!validator.validate_one("   ", "required").unwrap());
    assert!(validator.validate_one("   ", "notRequired").unwrap());
    assert_eq!(validator.registry().len(), 20);
}

// ============================================================================
// required
// ============================================================================

#[test]
fn test_required_values() {
    assert!(check("0", "required"));
    assert!(check(" ", "required"));
    assert!(check(false, "required"));
    assert!(check(0, "required"));
    assert!(!check("", "required"));
    assert!(!check(Value::Null, "required"));
    assert!(!check(Value::Absent, "required"));
    assert!(!check(None::<String>, "required"));
}

// ============================================================================
// min / max / between
// ============================================================================

#[test]
fn test_numeric_strings_compare_as_numbers() {
    // "100" has length 3 but is compared as the number 100.
    assert!(check("100", "min:50"));
    assert!(!check("100", "max:50"));
    assert!(check("-5", "max:0"));
    assert!(check("2.5", "between:2,3"));
    assert!(check(" 7 ", "between:7,7"));
}

#[test]
fn test_text_compares_by_length() {
    assert!(check("abcd", "min:4"));
    assert!(!check("abc", "min:4"));
    assert!(check("ab", "between:1,2"));
    assert!(check("", "max:0"));
}

#[test]
fn test_bounds_are_inclusive() {
    assert!(check("10", "min:10"));
    assert!(check("10", "max:10"));
    assert!(check("10", "between:10,10"));
}

#[test]
fn test_native_numbers() {
    assert!(check(3.5, "between:3,4"));
    assert!(!check(3.5, "min:4"));
    assert!(check(-1, "max:-1"));
}

#[test]
fn test_missing_bound_fails() {
    assert!(!check("abc", "min"));
    assert!(!check("abc", "between:1"));
    assert!(check("abc", "notMin"));
}

#[test]
fn test_bound_params_are_trimmed() {
    assert!(check("5", "between: 1 , 10 "));
}

// ============================================================================
// email
// ============================================================================

#[test]
fn test_email_accepts() {
    for addr in [
        "ada@example.com",
        "first.last@sub.example.org",
        "user+tag@example.co",
        "x@localhost",
        "\"quoted local\"@example.com",
        "ops@[10.0.0.1]",
    ] {
        assert!(check(addr, "email"), "expected valid: {}", addr);
    }
}

#[test]
fn test_email_rejects() {
    for addr in [
        "",
        "plain",
        "@example.com",
        "ada@",
        "ada@@example.com",
        "ada@example..com",
        ".ada@example.com",
        "a da@example.com",
        "ada@exa mple.com",
        "ada(comment)@example.com",
    ] {
        assert!(!check(addr, "email"), "expected invalid: {}", addr);
    }
}

#[test]
fn test_email_rejects_non_strings() {
    assert!(!check(Value::Absent, "email"));
    assert!(!check(42, "email"));
}
