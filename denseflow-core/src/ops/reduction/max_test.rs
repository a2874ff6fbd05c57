use crate::error::DenseFlowError;
use crate::ops::reduction::{max_op, min_op};
use crate::tensor::Tensor;

#[test]
fn test_max_min_per_row() -> Result<(), DenseFlowError> {
    let t = Tensor::new(vec![3.0, -1.0, 2.0, -4.0, 0.5, -7.0], vec![2, 3])?;
    let max = max_op(&t)?;
    let min = min_op(&t)?;
    assert_eq!(max.shape(), &[2, 1]);
    assert_eq!(max.data(), &[3.0, 0.5]);
    assert_eq!(min.data(), &[-1.0, -7.0]);
    Ok(())
}

#[test]
fn test_max_rejects_rank_three() -> Result<(), DenseFlowError> {
    let t = Tensor::new(vec![0.0; 8], vec![2, 2, 2])?;
    assert!(matches!(
        max_op(&t),
        Err(DenseFlowError::UnsupportedShape { rank: 3, .. })
    ));
    assert!(matches!(
        min_op(&t),
        Err(DenseFlowError::UnsupportedShape { rank: 3, .. })
    ));
    Ok(())
}
