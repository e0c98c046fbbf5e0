//! Property-based tests for validator invariants

use attr_validators::conditional::{NullIfAttributeIsOneOf, RequireIfAttributeIsOneOf};
use attr_validators::numeric::ZeroRemainder;
use attr_validators::path::{Path, PathExpression};
use attr_validators::prelude::*;
use attr_validators::string::{self, CaseType, Comparator, NetworkType, Rule};
use attr_validators::testing::{run, run_request};
use proptest::prelude::*;

fn network_rule() -> impl Strategy<Value = NetworkType> {
    prop::sample::select(NetworkType::ALL.to_vec())
}

fn case_rule() -> impl Strategy<Value = CaseType> {
    prop::sample::select(CaseType::ALL.to_vec())
}

fn network_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
        (any::<[u8; 4]>(), 0u8..40).prop_map(|(ip, bits)| {
            format!("{}.{}.{}.{}/{bits}", ip[0], ip[1], ip[2], ip[3])
        }),
        (0u32..70000, 0u32..70000).prop_map(|(a, b)| format!("{a}-{b}")),
        (0u32..70000).prop_map(|p| p.to_string()),
        "[a-z0-9./:-]{0,20}",
    ]
}

fn mode() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Unknown),
        Just(Value::string("dhcp")),
        Just(Value::string("static")),
        Just(Value::string("pool")),
    ]
}

fn attribute() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Unknown),
        "[a-z0-9.]{1,12}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn prop_null_and_unknown_never_report(
        rules in prop::collection::vec(network_rule(), 0..4),
        cases in prop::collection::vec(case_rule(), 0..4),
        any_of in any::<bool>(),
        divider in any::<i64>(),
    ) {
        let comparator = if any_of { Comparator::Any } else { Comparator::All };
        let validators: Vec<BoxedValidator> = vec![
            string::is_network(rules, comparator).boxed(),
            string::cases(cases).boxed(),
            ZeroRemainder::new(divider).boxed(),
            string::is_ip().not().boxed(),
        ];
        for validator in &validators {
            prop_assert!(run(validator, &Value::Null).is_empty());
            prop_assert!(run(validator, &Value::Unknown).is_empty());
        }
    }

    #[test]
    fn prop_leaf_reports_at_most_once(rule in network_rule(), text in network_text()) {
        prop_assert!(run(&rule, &Value::string(text)).len() <= 1);
    }

    #[test]
    fn prop_not_inverts(rule in network_rule(), text in network_text()) {
        let value = Value::string(text);
        let inner_fails = run(&rule, &value).has_error();
        let negated = run(&rule.not(), &value);
        prop_assert_eq!(negated.has_error(), !inner_fails);
        prop_assert!(negated.len() <= 1);
    }

    #[test]
    fn prop_any_and_all(
        rules in prop::collection::vec(network_rule(), 1..5),
        text in network_text(),
    ) {
        let value = Value::string(text);
        let failing = rules.iter().filter(|rule| run(*rule, &value).has_error()).count();
        let distinct: Diagnostics = rules.iter().flat_map(|rule| run(rule, &value)).collect();

        let all = run(&string::is_network(rules.clone(), Comparator::All), &value);
        prop_assert_eq!(all.error_count(), distinct.error_count());
        prop_assert_eq!(all.has_error(), failing > 0);

        let any = run(&string::is_network(rules.clone(), Comparator::Any), &value);
        if failing == rules.len() {
            prop_assert_eq!(any.error_count(), 1);
        } else {
            prop_assert!(any.is_empty());
        }
    }

    #[test]
    fn prop_repeated_rules_report_once(rule in case_rule(), text in "[A-Za-z0-9 ]{0,12}") {
        let value = Value::string(text);
        let once = run(&string::cases([rule]), &value);
        let twice = run(&string::cases([rule, rule]), &value);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_zero_remainder(value in any::<i64>(), divider in 1i64..1000) {
        let diags = run(&ZeroRemainder::new(divider), &Value::Int64(value));
        prop_assert_eq!(diags.is_empty(), value % divider == 0);
    }

    #[test]
    fn prop_require_and_null_are_exclusive(reference in mode(), target in attribute()) {
        let expected = [Value::string("static"), Value::string("pool")];
        let require = RequireIfAttributeIsOneOf::new(PathExpression::match_root("mode"), expected.clone());
        let null = NullIfAttributeIsOneOf::new(PathExpression::match_root("mode"), expected.clone());

        let config = Config::new([("mode", reference.clone()), ("address", target.clone())]);
        let req = ValidateRequest::from_config(&config, Path::root("address")).unwrap();
        let required = run_request(&require, &req);
        let nulled = run_request(&null, &req);

        let triggered = expected.contains(&reference);
        prop_assert_eq!(required.error_count(), usize::from(triggered && target.is_null()));
        prop_assert_eq!(nulled.error_count(), usize::from(triggered && target.is_known()));
        prop_assert!(!(required.has_error() && nulled.has_error()));
    }
}
