use super::*;
use crate::tensor::Tensor;

#[test]
fn test_calculate_strides() {
    assert_eq!(calculate_strides(&[2, 3]), vec![3, 1]);
    assert_eq!(calculate_strides(&[2, 2, 2]), vec![4, 2, 1]);
    assert_eq!(calculate_strides(&[5]), vec![1]);
}

#[test]
fn test_encode_position() {
    assert_eq!(encode_position(&[1, 2], &[4, 3]).unwrap(), 5);
    assert_eq!(encode_position(&[0, 0], &[4, 3]).unwrap(), 0);
    assert_eq!(encode_position(&[3, 2], &[4, 3]).unwrap(), 11);
}

#[test]
fn test_encode_position_out_of_range() {
    let err = encode_position(&[1, 5], &[4, 3]).unwrap_err();
    assert_eq!(
        err,
        DenseFlowError::IndexOutOfBounds {
            index: vec![1, 5],
            shape: vec![4, 3],
        }
    );
    assert!(encode_position(&[1], &[4, 3]).is_err());
}

#[test]
fn test_decode_position() {
    assert_eq!(decode_position(5, &[4, 3]).unwrap(), vec![1, 2]);
    assert_eq!(decode_position(11, &[4, 3]).unwrap(), vec![3, 2]);
    assert!(matches!(
        decode_position(12, &[4, 3]),
        Err(DenseFlowError::FlatIndexOutOfBounds { index: 12, .. })
    ));
}

#[test]
fn test_positions_reject_overflowing_shape() {
    let huge = [usize::MAX, 2];
    assert!(matches!(
        decode_position(3, &huge),
        Err(DenseFlowError::FlatIndexOutOfBounds { index: 3, .. })
    ));
    assert!(matches!(
        encode_position(&[1, 1], &[2, usize::MAX]),
        Err(DenseFlowError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_position_round_trip() {
    let shape = [2, 3, 4];
    for i in 0..shape[0] {
        for j in 0..shape[1] {
            for k in 0..shape[2] {
                let coords = vec![i, j, k];
                let flat = encode_position(&coords, &shape).unwrap();
                assert_eq!(decode_position(flat, &shape).unwrap(), coords);
            }
        }
    }
}

#[test]
fn test_same_shape_properties() {
    let a = Tensor::new(vec![1.0; 6], vec![2, 3]).unwrap();
    let b = Tensor::new(vec![2.0; 6], vec![2, 3]).unwrap();
    let c = Tensor::new(vec![2.0; 6], vec![3, 2]).unwrap();
    let d = Tensor::new(vec![2.0; 6], vec![6]).unwrap();

    assert!(same_shape(&a, &a));
    assert!(same_shape(&a, &b) && same_shape(&b, &a));
    assert!(!same_shape(&a, &c) && !same_shape(&c, &a));
    assert!(!same_shape(&a, &d));
}

#[test]
fn test_same_shape_absent_never_matches() {
    let a = Tensor::new(vec![1.0], vec![1, 1]).unwrap();
    assert!(same_shape_opt(Some(&a), Some(&a)));
    assert!(!same_shape_opt(None, None));
    assert!(!same_shape_opt(Some(&a), None));
    assert!(!same_shape_opt(None, Some(&a)));
}
