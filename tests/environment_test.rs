use medivoice::presentation::config::Environment;

#[test]
fn given_known_names_when_parsing_then_environment_matches() {
    assert_eq!(
        Environment::try_from("local".to_string()).unwrap(),
        Environment::Local
    );
    assert_eq!(
        Environment::try_from("TEST".to_string()).unwrap(),
        Environment::Test
    );
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
}

#[test]
fn given_unknown_name_when_parsing_then_error_names_the_value() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(err.contains("staging"));
}

#[test]
fn given_environment_when_displayed_then_uses_canonical_name() {
    assert_eq!(Environment::Prod.to_string(), "Prod");
}
