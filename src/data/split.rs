use super::error::DataError;
use super::sample::Sample2D;
use crate::errors::ComparisonOperator;
use rand::seq::SliceRandom;
use rand::Rng;

/// 打乱样本并划分为(训练集, 测试集)
///
/// 测试集取打乱后的前`round(size_per_class / kfold) * num_classes`个样本，
/// 即一折的数据；样本不足时测试集取全部样本。
pub fn split_train_test<R: Rng + ?Sized>(
    samples: &[Sample2D],
    kfold: usize,
    size_per_class: usize,
    num_classes: usize,
    rng: &mut R,
) -> Result<(Vec<Sample2D>, Vec<Sample2D>), DataError> {
    if kfold < 1 {
        return Err(DataError::must_satisfy(
            "折数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
        ));
    }

    let mut shuffled = samples.to_vec();
    shuffled.shuffle(rng);

    let per_fold = (size_per_class as f64 / kfold as f64).round() as usize * num_classes;
    let test_len = per_fold.min(shuffled.len());
    let train = shuffled.split_off(test_len);
    Ok((train, shuffled))
}
