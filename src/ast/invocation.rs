/// An identifier split into its check name and parameters.
///
/// `between:3,10` becomes name `between` with parameters `["3", "10"]`. The
/// split happens on the first `:` only, and parameters are split on every `,`
/// and trimmed. There is no quoting, so a parameter can never contain a comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub params: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((name, params)) => Invocation {
                name: name.trim(),
                params: params.split(',').map(str::trim).collect(),
            },
            None => Invocation {
                name: raw.trim(),
                params: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_has_no_params() {
        let call = Invocation::parse("required");
        assert_eq!(call.name, "required");
        assert!(call.params.is_empty());
    }

    #[test]
    fn params_are_split_and_trimmed() {
        let call = Invocation::parse("between: 3 , 10");
        assert_eq!(call.name, "between");
        assert_eq!(call.params, vec!["3", "10"]);
    }

    #[test]
    fn only_first_colon_separates_name() {
        let call = Invocation::parse("equals:a:b");
        assert_eq!(call.name, "equals");
        assert_eq!(call.params, vec!["a:b"]);
    }

    #[test]
    fn trailing_colon_yields_one_empty_param() {
        let call = Invocation::parse("min:");
        assert_eq!(call.params, vec![""]);
    }
}
