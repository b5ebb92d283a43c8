use oab_core::parse;
use oab_core::parse::parameter::ParameterOrRef;
use oab_core::parse::schema::SchemaOrRef;

const PETSTORE: &str = include_str!("fixtures/petstore-3.0.yaml");
const BILLING: &str = include_str!("fixtures/billing-2.0.yaml");

#[test]
fn parse_petstore_yaml() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    assert_eq!(doc.openapi.as_deref(), Some("3.0.0"));
    assert_eq!(doc.info.title, "Petstore");
    assert_eq!(doc.paths.len(), 2);
    assert_eq!(doc.components.schemas.len(), 6);
    assert_eq!(doc.components.security_schemes.len(), 2);

    // Property declaration order must survive decoding.
    let pet = doc.components.schemas.get("Pet").unwrap();
    match pet {
        SchemaOrRef::Schema(s) => {
            let names: Vec<&String> = s.properties.keys().collect();
            assert_eq!(names[0], "id");
            assert_eq!(names[1], "name");
            assert_eq!(s.required, vec!["id", "name"]);
        }
        _ => panic!("expected inline schema for Pet"),
    }
}

#[test]
fn parse_billing_yaml() {
    let doc = parse::from_yaml(BILLING).expect("should parse billing");
    assert_eq!(doc.swagger.as_deref(), Some("2.0"));
    assert_eq!(doc.host.as_deref(), Some("api.billing.io"));
    assert_eq!(doc.base_path.as_deref(), Some("/v1"));
    assert_eq!(doc.definitions.len(), 1);
    assert_eq!(doc.security_definitions.len(), 1);

    match doc.parameters.get("AccountId") {
        Some(ParameterOrRef::Parameter(p)) => {
            assert_eq!(p.name, "account_id");
            assert_eq!(p.location, "query");
            assert!(p.required);
        }
        _ => panic!("expected inline AccountId parameter"),
    }
}

#[test]
fn parse_swagger_parameter_type_fields() {
    let doc = parse::from_yaml(BILLING).unwrap();
    let item = doc.paths.get("/invoices").unwrap();
    let get = item.get.as_ref().unwrap();
    match &get.parameters[0] {
        ParameterOrRef::Parameter(p) => {
            assert_eq!(p.param_type.as_ref().and_then(|t| t.primary()), Some("string"));
            assert_eq!(p.enum_values.len(), 3);
            assert!(p.schema.is_none());
        }
        _ => panic!("expected inline parameter"),
    }
}

#[test]
fn parse_parameter_ignores_format_key() {
    // Swagger 2.0 allows `format` on a parameter; it is never rendered,
    // so the model skips it rather than carrying a dead field.
    let doc = parse::from_yaml(
        "swagger: '2.0'\n\
         paths:\n  \
           /w:\n    \
             get:\n      \
               parameters:\n        \
                 - name: since\n          \
                   in: query\n          \
                   type: string\n          \
                   format: date-time\n",
    )
    .expect("format key should be ignored, not rejected");
    let get = doc.paths.get("/w").unwrap().get.as_ref().unwrap();
    match &get.parameters[0] {
        ParameterOrRef::Parameter(p) => {
            assert_eq!(p.name, "since");
            assert_eq!(p.param_type.as_ref().and_then(|t| t.primary()), Some("string"));
        }
        _ => panic!("expected inline parameter"),
    }
}

#[test]
fn parse_minimal_json() {
    let doc = parse::from_json(
        r#"{"openapi": "3.1.0", "info": {"title": "T", "version": "1"}, "paths": {}}"#,
    )
    .expect("should parse minimal JSON");
    assert_eq!(doc.info.title, "T");
    assert!(doc.paths.is_empty());
}

#[test]
fn parse_malformed_input_fails() {
    assert!(parse::from_yaml("paths: ]").is_err());
    assert!(parse::from_json("{\"paths\": ").is_err());
}
