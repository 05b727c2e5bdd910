/// 错误断言宏 - 灵活粒度验证 Result 错误
///
/// # 用法
/// - `assert_err!(expr)`：只验证是 Err
/// - `assert_err!(expr, Variant(literal))`：验证错误类型 + 精确内容（单字段变体）
/// - `assert_err!(expr, SizeMismatchVariant(expected, got))`：验证带`expected`/`got`字段的变体
/// - `assert_err!(expr, Pattern { .. })`：验证错误类型
/// - `assert_err!(expr, Pattern { field, .. } if condition)`：验证类型 + 条件
///
/// # 示例
/// ```ignore
/// // 只验证是错误
/// assert_err!(result);
///
/// // 验证错误类型 + 精确内容
/// assert_err!(result, DataError::UnknownLabel("#123456"));
///
/// // expected/got 简洁语法
/// assert_err!(result, NetworkError::InputSizeMismatch(2, 3));
///
/// // 验证错误类型（忽略所有字段）
/// assert_err!(result, NetworkError::NotRebuilt { .. });
///
/// // 验证类型 + 关键字段
/// assert_err!(result, NetworkError::NotRebuilt { wired, .. } if wired == &[2, 3, 2]);
/// ```
#[macro_export]
macro_rules! assert_err {
    // 只验证是 Err
    ($expr:expr) => {
        assert!($expr.is_err(), "预期 Err，实际得到 {:?}", $expr);
    };
    // 简洁语法：Variant(字面量) - 精确匹配单字段内容
    ($expr:expr, $err_type:ident :: $variant:ident ( $expected:literal )) => {
        match &$expr {
            Err($err_type::$variant(actual)) => assert_eq!(
                actual, $expected,
                "错误内容不匹配：预期 `{}`，实际得到 `{}`",
                $expected, actual
            ),
            Err(e) => panic!(
                "错误类型不匹配：预期 `{}::{}`，实际得到 `{:?}`",
                stringify!($err_type), stringify!($variant), e
            ),
            Ok(v) => panic!(
                "预期 Err({}::{})，实际得到 Ok({:?})",
                stringify!($err_type), stringify!($variant), v
            ),
        }
    };
    // 简洁语法：Variant(expected, got) - 匹配带 expected/got 字段的变体
    ($expr:expr, $err_type:ident :: $variant:ident ( $exp:literal, $got:literal )) => {
        match &$expr {
            Err($err_type::$variant { expected, got, .. }) => {
                assert_eq!(*expected, $exp, "expected 不匹配");
                assert_eq!(*got, $got, "got 不匹配");
            }
            Err(e) => panic!(
                "错误类型不匹配：预期 `{}::{}`，实际得到 `{:?}`",
                stringify!($err_type), stringify!($variant), e
            ),
            Ok(v) => panic!(
                "预期 Err({}::{})，实际得到 Ok({:?})",
                stringify!($err_type), stringify!($variant), v
            ),
        }
    };
    // 通用模式匹配（带 if guard 或复杂 pattern）
    ($expr:expr, $($pattern:tt)+) => {
        match &$expr {
            Err(e) => assert!(
                matches!(e, $($pattern)+),
                "错误类型不匹配：预期 `{}`，实际得到 `{:?}`",
                stringify!($($pattern)+),
                e
            ),
            Ok(v) => panic!(
                "预期 Err 匹配 `{}`，实际得到 Ok({:?})",
                stringify!($($pattern)+),
                v
            ),
        }
    };
}
