//! String validator families through the public API

use attr_validators::path::Path;
use attr_validators::prelude::*;
use attr_validators::string::{
    self, CaseType, Comparator, FormatType, HttpCodeParams, NetworkType, UnknownRule,
};
use attr_validators::testing::{run, run_request};
use attr_validators::{assert_diagnostics, assert_failure, assert_success};

fn check(validator: &impl Validator, text: &str) -> Validation<(), Diagnostics> {
    validator.check(&ValidateRequest::new(&Value::string(text)))
}

#[test]
fn test_every_leaf_skips_null_and_unknown() {
    let validators: Vec<BoxedValidator> = vec![
        string::disallow_upper().boxed(),
        string::formats([FormatType::Base64], Comparator::All).boxed(),
        string::is_network([NetworkType::Rfc1918], Comparator::Any).boxed(),
        string::is_ip().boxed(),
        string::http_code(HttpCodeParams::default()).boxed(),
        string::prefix_contains("x").boxed(),
        string::is_urn().boxed(),
        string::is_uuid().boxed(),
        string::is_mac_address().boxed(),
        string::is_netmask().boxed(),
        string::cases([]).boxed(),
        string::is_network([], Comparator::All).boxed(),
    ];
    for validator in &validators {
        assert!(run(validator, &Value::Null).is_empty(), "{}", validator.description());
        assert!(run(validator, &Value::Unknown).is_empty(), "{}", validator.description());
    }
}

#[test]
fn test_wrong_kind_is_a_conversion_error() {
    let diags = run(&string::is_ip(), &Value::Int64(10));
    assert_eq!(diags.len(), 1);
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.summary, "Value Conversion Error");
    assert_eq!(diag.detail, "expected a string value, got int64");
}

#[test]
fn test_network_table() {
    let cases: &[(NetworkType, &str, bool)] = &[
        (NetworkType::Ipv4, "192.168.1.1", true),
        (NetworkType::Ipv4, "192.168.1.256", false),
        (NetworkType::Ipv4WithCidr, "192.168.1.0/24", true),
        (NetworkType::Ipv4WithCidr, "192.168.1.0/33", false),
        (NetworkType::Ipv4WithNetmask, "192.168.1.1/255.255.255.0", true),
        (NetworkType::Ipv4WithNetmask, "192.168.1.1/255.255.0.255", false),
        (NetworkType::Ipv4Range, "192.168.0.1-192.168.0.10", true),
        (NetworkType::Ipv4Range, "192.168.0.10-192.168.0.1", false),
        (NetworkType::Rfc1918, "172.20.0.1", true),
        (NetworkType::Rfc1918, "172.15.0.1", false),
        (NetworkType::TcpUdpPort, "8443", true),
        (NetworkType::TcpUdpPort, "0", false),
        (NetworkType::TcpUdpPortRange, "1024-2048", true),
        (NetworkType::TcpUdpPortRange, "2048-1024", false),
    ];
    for (rule, text, valid) in cases {
        let diags = run(rule, &Value::string(*text));
        assert_eq!(diags.is_empty(), *valid, "{rule} on {text}");
    }
}

#[test]
fn test_named_rules_from_configuration() {
    let v = string::IsNetwork::from_names(["ipv4", "tcpudp_port"], Comparator::Any);
    assert_success!(check(&v, "10.0.0.1"));
    assert_success!(check(&v, "22"));
    assert_diagnostics!(
        check(&v, "ssh"),
        [("Invalid configuration for attribute ", "Set at least one valid network type")]
    );

    let v = string::Formats::from_names(["is_base64", "is_sha256"], Comparator::All);
    assert_diagnostics!(
        check(&v, "dGVzdA=="),
        [("Invalid formats type", "invalid formats type: is_sha256")]
    );

    let err: UnknownRule = "disallow_emoji".parse::<CaseType>().unwrap_err();
    assert_eq!(err.to_string(), "invalid case type: disallow_emoji");
}

#[test]
fn test_empty_rule_sets() {
    let value = Value::string("anything");
    let req = ValidateRequest::new(&value).at(Path::root("name"));

    let diags = run_request(&string::cases([]), &req);
    assert_eq!(diags.iter().next().unwrap().detail, "Set at least one case type");

    let diags = run_request(&string::formats([], Comparator::Any), &req);
    assert_eq!(diags.iter().next().unwrap().detail, "Set at least one formats type");

    let diags = run_request(&string::is_network([], Comparator::Any), &req);
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.summary, "Invalid configuration for attribute name");
    assert_eq!(diag.detail, "Set at least one network type");
}

#[test]
fn test_cases_match_configuration_names() {
    let v = string::cases([CaseType::DisallowUpper, CaseType::DisallowSpace]);
    assert_success!(check(&v, "my-bucket"));
    assert_diagnostics!(
        check(&v, "My Bucket"),
        [
            ("uppercase characters are not allowed", "invalid value: My Bucket"),
            ("space characters are not allowed", "invalid value: My Bucket"),
        ]
    );

    let repeated = string::cases([CaseType::DisallowUpper, CaseType::DisallowUpper]);
    assert_diagnostics!(
        check(&repeated, "Bucket"),
        [("uppercase characters are not allowed", "invalid value: Bucket")]
    );
}

#[test]
fn test_http_code_classes() {
    let v = string::http_code(HttpCodeParams {
        allow_2xx: true,
        allow_3xx: true,
        ..Default::default()
    });
    assert_success!(check(&v, "200"));
    assert_success!(check(&v, "301"));
    assert_failure!(check(&v, "404"));
    assert_failure!(check(&v, "2xx"));
    assert_eq!(
        v.markdown_description(),
        "The following HTTP status codes patterns are allowed: `2xx`, `3xx`"
    );
}

#[test]
fn test_not_inverts_leaf() {
    let not_rfc1918 = string::is_network([NetworkType::Rfc1918], Comparator::All).not();
    assert_success!(check(&not_rfc1918, "8.8.8.8"));
    assert_diagnostics!(
        check(&not_rfc1918, "10.0.0.1"),
        [(
            "Invalid Attribute Value",
            "the value must not satisfy: The value must be a valid RFC1918 IPV4 address (Ex: 10.0.0.1)"
        )]
    );
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;
    use attr_validators::string::HttpCode;

    #[test]
    fn test_rule_names_deserialize() {
        let rules: Vec<NetworkType> =
            serde_json::from_str(r#"["ipv4_with_cidr", "tcpudp_port_range", "rfc1918"]"#).unwrap();
        assert_eq!(
            rules,
            vec![NetworkType::Ipv4WithCidr, NetworkType::TcpUdpPortRange, NetworkType::Rfc1918]
        );

        let formats: Vec<FormatType> = serde_json::from_str(r#"["is_uuid_v4"]"#).unwrap();
        assert_eq!(formats, vec![FormatType::UuidV4]);

        let comparator: Comparator = serde_json::from_str(r#""any""#).unwrap();
        assert_eq!(comparator, Comparator::Any);
    }

    #[test]
    fn test_http_params_default_missing_fields() {
        let params: HttpCodeParams = serde_json::from_str(r#"{"allow_4xx": true}"#).unwrap();
        let v = HttpCode::new(params);
        assert_eq!(v.description(), "The allowed HTTP status code pattern is 4xx");
    }

    #[test]
    fn test_diagnostics_serialize() {
        let diags = run(&string::is_ip(), &Value::string("nope"));
        let json = serde_json::to_value(&diags).unwrap();
        assert_eq!(json[0]["severity"], "error");
        assert_eq!(json[0]["summary"], "Failed to parse IP address");
        assert!(json[0].get("path").is_none() || json[0]["path"] == "");
    }
}
