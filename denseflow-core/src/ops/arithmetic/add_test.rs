use crate::error::DenseFlowError;
use crate::ops::arithmetic::add_op;
use crate::tensor::Tensor;

#[test]
fn test_add_tensors_ok() {
    let t1 = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let t2 = Tensor::new(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();
    let result = add_op(&t1, &t2).unwrap();
    assert_eq!(result.data(), &[6.0, 8.0, 10.0, 12.0]);
    assert_eq!(result.shape(), &[2, 2]);
}

#[test]
fn test_add_tensors_shape_mismatch() {
    let t1 = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    let t2 = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let result = add_op(&t1, &t2);
    assert!(matches!(result, Err(DenseFlowError::ShapeMismatch { .. })));
}

#[test]
fn test_add_does_not_broadcast() {
    let matrix = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let row_vector = Tensor::new(vec![10.0, 20.0], vec![1, 2]).unwrap();
    assert!(add_op(&matrix, &row_vector).is_err());
}

#[test]
fn test_add_same_elements_different_rank() {
    let a = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    let b = Tensor::new(vec![1.0, 2.0], vec![1, 2]).unwrap();
    assert!(add_op(&a, &b).is_err());
}
