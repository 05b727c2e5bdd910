/*
 * @Description  : 训练集/测试集划分的单元测试
 */

use crate::assert_err;
use crate::data::{DataError, Dataset, DatasetConfig, Sample2D, split_train_test};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sorted_xs(samples: &[Sample2D]) -> Vec<f64> {
    let mut xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    xs.sort_by(f64::total_cmp);
    xs
}

#[test]
fn test_split_sizes() {
    let mut rng = StdRng::seed_from_u64(11);
    let samples = Dataset::Gaussian
        .generate(&DatasetConfig::new(50, 0.0), &mut rng)
        .unwrap();

    let (train, test) = split_train_test(&samples, 5, 50, 2, &mut rng).unwrap();
    assert_eq!(test.len(), 20);
    assert_eq!(train.len(), 80);

    // 50 / 3 = 16.67 → 17，每类一份
    let (train, test) = split_train_test(&samples, 3, 50, 2, &mut rng).unwrap();
    assert_eq!(test.len(), 34);
    assert_eq!(train.len(), 66);
}

#[test]
fn test_split_keeps_every_sample() {
    let mut rng = StdRng::seed_from_u64(12);
    let samples: Vec<Sample2D> = (0..30)
        .map(|i| Sample2D::new(i as f64, 0.0, "#0877BD"))
        .collect();
    let (train, test) = split_train_test(&samples, 5, 15, 2, &mut rng).unwrap();

    let mut all = train.clone();
    all.extend(test);
    assert_eq!(sorted_xs(&all), sorted_xs(&samples));
    // 打乱后的训练集一般不会保持原顺序
    assert_ne!(train, samples[6..].to_vec());
}

#[test]
fn test_split_small_dataset() {
    let mut rng = StdRng::seed_from_u64(13);
    let samples = vec![
        Sample2D::new(0.0, 0.0, "#0877BD"),
        Sample2D::new(1.0, 1.0, "#FFA500"),
    ];
    // 一折需要 round(150 / 2) * 2 = 150个样本，超过了样本总数
    let (train, test) = split_train_test(&samples, 2, 150, 2, &mut rng).unwrap();
    assert!(train.is_empty());
    assert_eq!(test.len(), 2);

    let (train, test) = split_train_test(&[], 5, 50, 2, &mut rng).unwrap();
    assert!(train.is_empty() && test.is_empty());
}

#[test]
fn test_split_invalid_kfold() {
    let mut rng = StdRng::seed_from_u64(14);
    assert_err!(
        split_train_test(&[], 0, 50, 2, &mut rng),
        DataError::ValueMustSatisfyComparison { .. }
    );
}
