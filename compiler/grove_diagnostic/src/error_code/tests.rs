use super::*;

#[test]
fn test_all_codes_round_trip_through_from_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        assert!(code.is_lexer_error());
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e0003".parse::<ErrorCode>(), Ok(ErrorCode::E0003));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_display_and_description() {
    assert_eq!(ErrorCode::E0004.to_string(), "E0004");
    assert_eq!(ErrorCode::E0006.description(), "unbalanced delimiter");
}
