use crate::assert_err;
use crate::data::DataError;
use crate::errors::ComparisonOperator;
use crate::nn::NetworkError;

#[test]
fn test_assert_err_macro() {
    let result: Result<(), DataError> = Err(DataError::UnknownLabel("#123456".to_string()));
    assert_err!(result);
    assert_err!(result, DataError::UnknownLabel("#123456"));

    let result: Result<(), NetworkError> = Err(NetworkError::InputSizeMismatch {
        expected: 2,
        got: 3,
    });
    assert_err!(result, NetworkError::InputSizeMismatch(2, 3));
    assert_err!(result, NetworkError::InputSizeMismatch { .. });

    let result: Result<(), DataError> = Err(DataError::ValueMustSatisfyComparison {
        value_name: "噪声".to_string(),
        operator: ComparisonOperator::LessOrEqual,
        threshold: 50.0,
    });
    assert_err!(
        result,
        DataError::ValueMustSatisfyComparison { operator, .. } if *operator == ComparisonOperator::LessOrEqual
    );
}

#[test]
#[should_panic(expected = "错误类型不匹配")]
fn test_assert_err_macro_with_wrong_variant() {
    let result: Result<(), DataError> = Err(DataError::EmptyDataset);
    assert_err!(result, DataError::UnknownLabel("#123456"));
}
