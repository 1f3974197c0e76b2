use pupil::ast::{Combinator, Token};
use pupil::{Chain, Rule, Validator, parse, tokenize};

#[test]
fn test_single_check() {
    assert_eq!(Chain::check("required", &[]).tokens(), tokenize("required").as_slice());
    assert_eq!(
        Chain::check("between", &["3", "10"]).tokens(),
        tokenize("between:3,10").as_slice()
    );
}

#[test]
fn test_and_check_matches_rule_string() {
    let chain = Chain::check("required", &[]).and_check("min", &["3"]).and_check("email", &[]);
    assert_eq!(chain.into_tokens(), tokenize("required && min:3 && email"));
}

#[test]
fn test_or_wraps_in_group() {
    let chain = Chain::check("required", &[]).or(Chain::check("min", &["3"]).and_check("max", &["5"]));
    assert_eq!(chain.into_tokens(), tokenize("required || (min:3 && max:5)"));
}

#[test]
fn test_and_wraps_in_group() {
    let chain = Chain::check("a", &[]).and(Chain::check("b", &[]));
    assert_eq!(
        chain.into_tokens(),
        vec![
            Token::Identifier("a".to_string()),
            Token::Combinator(Combinator::And),
            Token::GroupOpen,
            Token::Identifier("b".to_string()),
            Token::GroupClose,
        ]
    );
}

#[test]
fn test_chain_validates() {
    let validator = Validator::new();
    let chain = Chain::check("min", &["3"]).or(Chain::check("email", &[]));

    assert!(chain.validate(&validator, "abcd").unwrap());
    assert!(chain.validate(&validator, "a@b.c").unwrap());
    assert!(!chain.validate(&validator, "ab").unwrap());
}

#[test]
fn test_chain_parses_as_rule() {
    let chain = Chain::check("a", &[]).or(Chain::check("b", &[]).or(Chain::check("c", &[])));
    let tree = parse(Rule::from(chain)).unwrap();

    assert_eq!(tree.root().children().len(), 3);
    let inner = tree.children(tree.root())[2];
    assert_eq!(inner.children().len(), 3);
    assert!(tree.children(inner)[2].is_group());
}

#[test]
fn test_unknown_check_in_chain() {
    let validator = Validator::new();
    let chain = Chain::check("required", &[]).and_check("bogus", &[]);
    assert!(chain.validate(&validator, "x").is_err());
}
