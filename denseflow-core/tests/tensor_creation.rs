use denseflow_core::error::DenseFlowError;
use denseflow_core::tensor::{self, Tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::create_test_tensor;

#[test]
fn test_new_validates_length_and_shape() {
    assert!(matches!(
        Tensor::new(vec![1.0, 2.0, 3.0], vec![2, 2]),
        Err(DenseFlowError::TensorCreationError { data_len: 3, .. })
    ));
    assert!(matches!(
        Tensor::new(vec![], vec![]),
        Err(DenseFlowError::InvalidShape { .. })
    ));
    assert!(matches!(
        Tensor::new(vec![], vec![2, 0]),
        Err(DenseFlowError::InvalidShape { .. })
    ));
}

#[test]
fn test_fill_constructors() {
    let z = tensor::zeros(&[2, 3]).unwrap();
    assert_eq!(z.shape(), &[2, 3]);
    assert!(z.data().iter().all(|&v| v == 0.0));

    let f = tensor::full(&[4], 2.5).unwrap();
    assert_eq!(f.data(), &[2.5; 4]);

    let like = tensor::zeros_like(&create_test_tensor(vec![1.0; 6], vec![3, 2]));
    assert_eq!(like, tensor::zeros(&[3, 2]).unwrap());
}

#[test]
fn test_random_is_seeded_and_bounded() {
    let a = tensor::random_with_rng(&[10, 10], &mut StdRng::seed_from_u64(5)).unwrap();
    let b = tensor::random_with_rng(&[10, 10], &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
    assert!(a.data().iter().all(|v| (-1.0..1.0).contains(v)));

    let c = tensor::random(&[3, 3]).unwrap();
    assert_eq!(c.numel(), 9);
}

#[test]
fn test_position_encoding() {
    assert_eq!(tensor::encode_position(&[1, 2], &[4, 3]).unwrap(), 5);
    assert!(matches!(
        tensor::encode_position(&[1, 5], &[4, 3]),
        Err(DenseFlowError::IndexOutOfBounds { .. })
    ));
    for index in 0..24 {
        let coords = tensor::decode_position(index, &[2, 3, 4]).unwrap();
        assert_eq!(tensor::encode_position(&coords, &[2, 3, 4]).unwrap(), index);
    }
}
