/*
 * @Description  : 高斯数据集二分类：两团中心在(2, 2)与(-2, -2)的点，
 *                 网络结构：Input(2) -> Hidden(4, Tanh) -> Hidden(2, Tanh) -> Output(2, Tanh)
 */
use neural_playground::data::{DataGenerator, Dataset};
use neural_playground::nn::{
    Activation, NetworkConfig, NeuralNetwork, TrainerOptions, TrainingSession,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn accuracy(session: &mut TrainingSession) -> f64 {
    let colors = session.dataset().colors();
    let samples = session.test_data().to_vec();
    let network = session.network_mut();
    let correct = samples
        .iter()
        .filter(|sample| {
            network.forward_prop(&[sample.x, sample.y]).unwrap();
            colors[network.get_decision().unwrap()] == sample.label
        })
        .count();
    correct as f64 / samples.len() as f64
}

#[test]
fn test_gaussian_classification() {
    let config = NetworkConfig::default()
        .with_activation(Activation::TANH)
        .with_learning_rate(0.03)
        .with_seed(42);
    let network = NeuralNetwork::new(2, &[4, 2], 2, config);
    let options = TrainerOptions {
        noise: 0.0,
        ..TrainerOptions::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = TrainingSession::new(network, Dataset::Gaussian, options, &mut rng).unwrap();

    // 300个样本，测试集 round(150 / 5) * 2 = 60
    assert_eq!(session.test_data().len(), 60);
    assert_eq!(session.train_data().len(), 240);

    let first = session.step().unwrap();
    assert_eq!(first.epoch, 1);
    assert_eq!(first.updates, 24);

    let mut last = first;
    for _ in 0..99 {
        last = session.step().unwrap();
    }
    assert_eq!(last.epoch, 100);
    assert!(last.train_loss < first.train_loss);
    assert!(last.test_loss < first.test_loss);
    assert!(accuracy(&mut session) >= 0.95);

    // 热力图的两个角分别落在两团点一侧
    let grid = session.decision_grid(11).unwrap();
    assert_eq!(grid.len(), 11);
    assert!(grid.iter().all(|row| row.len() == 11));
    let colors = session.dataset().colors();
    assert_eq!(colors[grid[0][10]], DataGenerator::SUPPORTED_COLORS[0]); // (6, 6)
    assert_eq!(colors[grid[10][0]], DataGenerator::SUPPORTED_COLORS[1]); // (-6, -6)
}

#[test]
fn test_grow_network_between_epochs() {
    let config = NetworkConfig::default()
        .with_activation(Activation::TANH)
        .with_learning_rate(0.03)
        .with_seed(7);
    let network = NeuralNetwork::new(2, &[2], 2, config);
    let options = TrainerOptions {
        samples_per_class: 50,
        noise: 0.0,
        ..TrainerOptions::default()
    };
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = TrainingSession::new(network, Dataset::Gaussian, options, &mut rng).unwrap();
    session.step().unwrap();

    // 改结构后未重建则拒绝训练
    session.network_mut().push_layer(3);
    assert!(session.step().is_err());

    session.network_mut().rebuild();
    assert_eq!(session.network().shape(), vec![2, 2, 3, 2]);
    assert_eq!(session.network().links().len(), 2 * 2 + 2 * 3 + 3 * 2);
    let report = session.step().unwrap();
    assert!(report.train_loss.is_finite());
}
