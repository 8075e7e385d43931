use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlagError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FlagError::mode("x").to_string().contains("mode error:"));
    assert!(FlagError::cache("x").to_string().contains("cache error:"));
    assert!(
        FlagError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn flag_limit_message_names_the_limit() {
    let err = FlagError::FlagLimit { max: 8 };
    assert!(err.to_string().contains("at most 8"));
    assert_eq!(err.user_message(), "You can not add more than 8 flags!");
}

#[test]
fn solver_user_message_is_the_mapped_text() {
    let err = FlagError::Solver {
        code: 1,
        message: "The tuple of flags is not positive.".to_owned(),
    };
    assert_eq!(err.user_message(), "The tuple of flags is not positive.");
    assert!(err.to_string().starts_with("solver error 1:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlagError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
