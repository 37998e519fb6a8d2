use anyhow::Result;
use nested_sum::{
    depth, nested, parse_str, stats, sum_bounded, sum_bounded_auto, sum_recursive,
    sum_recursive_from, ErrorKind, Nested, Number, Stats, SumError,
};

#[test]
fn test_recursive_sum_examples() -> Result<()> {
    assert_eq!(sum_recursive(&nested!([1, 2, [3, 4, [5]]]))?, Number::Int(15));
    assert_eq!(sum_recursive(&nested!([]))?, Number::Int(0));
    assert_eq!(sum_recursive(&nested!([[[[42]]]]))?, Number::Int(42));
    assert_eq!(
        sum_recursive(&nested!([1, 2, [3, 4, [5, 6]], 7, [8, [9]]]))?,
        Number::Int(45)
    );
    Ok(())
}

#[test]
fn test_bounded_sum_examples() -> Result<()> {
    let value = nested!([1, 2, [3, 4, [5, [6, 8]]]]);
    assert_eq!(depth(&value), 4);
    assert_eq!(sum_bounded(&value, 4)?, Number::Int(29));
    assert_eq!(sum_bounded_auto(&value)?, Number::Int(29));

    let err = sum_bounded(&value, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    Ok(())
}

#[test]
fn test_flat_sequence_with_depth_one() -> Result<()> {
    let value = nested!([1, 2.25, 3, (-4)]);
    let expected: Number = [
        Number::from(1),
        Number::from(2.25),
        Number::from(3),
        Number::from(-4),
    ]
    .into_iter()
    .sum();
    assert_eq!(expected, Number::Float(2.25));
    assert_eq!(sum_bounded(&value, 1)?, expected);
    assert_eq!(sum_recursive(&value)?, expected);
    Ok(())
}

#[test]
fn test_accumulator_is_threaded_through() -> Result<()> {
    let value = nested!([1, [2, [3]]]);
    assert_eq!(sum_recursive_from(&value, Number::Int(100))?, Number::Int(106));
    Ok(())
}

#[test]
fn test_larger_original_examples() -> Result<()> {
    let value = parse_str("[1,2,[3,4,[5,3,3,213123,345345], [[[1,[1000,[1010]]]]]]]")?;
    assert_eq!(sum_recursive(&value)?, Number::Int(560500));
    assert_eq!(sum_bounded_auto(&value)?, Number::Int(560500));

    let value = parse_str(
        "[1,2,3, [4,5,6], [7,8,9], [10,11,12,[13,14,15,[16,17,18,[19,[20]]]]]]",
    )?;
    assert_eq!(sum_recursive(&value)?, Number::Int(210));
    assert_eq!(sum_bounded(&value, depth(&value))?, Number::Int(210));
    Ok(())
}

#[test]
fn test_mixed_int_and_float() -> Result<()> {
    let value = parse_str("[1, [0.5, [2]], 0.25]")?;
    assert_eq!(sum_recursive(&value)?, Number::Float(3.75));
    assert_eq!(sum_bounded(&value, 3)?, Number::Float(3.75));
    Ok(())
}

#[test]
fn test_non_numeric_leaf_is_type_mismatch() {
    let err = parse_str(r#"[1, [2, "three"]]"#).unwrap_err();
    match err {
        SumError::TypeMismatch { path, found, .. } => {
            assert_eq!(path, "$[1][1]");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    for input in ["[null]", "[[false]]", r#"[{"a": 1}]"#] {
        let err = parse_str(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch, "input: {}", input);
    }
}

#[test]
fn test_deeply_nested_input() -> Result<()> {
    let mut value = Nested::leaf(2);
    for _ in 0..100_000 {
        value = Nested::seq(vec![Nested::leaf(1), value]);
    }

    assert_eq!(depth(&value), 100_000);
    assert_eq!(sum_recursive(&value)?, Number::Int(100_002));
    assert_eq!(
        stats(&value),
        Stats {
            leaves: 100_001,
            sequences: 100_000,
            depth: 100_000,
        }
    );
    Ok(())
}
