use crate::error::DenseFlowError;
use crate::nn::{Gradients, ParamKind, Parameter};
use crate::optim::{Optimizer, Sgd};
use crate::tensor::Tensor;
use crate::utils::testing::check_tensor_near;

fn create_param(data: Vec<f64>, shape: Vec<usize>) -> Result<Parameter, DenseFlowError> {
    Ok(Parameter::new(Tensor::new(data, shape)?, ParamKind::Weight))
}

#[test]
fn test_sgd_single_step() -> Result<(), DenseFlowError> {
    let param = create_param(vec![1.0], vec![1, 1])?;
    let mut grads = Gradients::new();
    grads.set(param.id(), Tensor::new(vec![2.0], vec![1, 1])?);

    let mut optimizer = Sgd::new(vec![param.clone()], 0.1)?;
    optimizer.step(&grads)?;

    check_tensor_near(&param.snapshot()?, &[1, 1], &[0.8], 1e-12);
    // Gradients survive the step.
    assert_eq!(grads.get(param.id()).unwrap().item()?, 2.0);
    Ok(())
}

#[test]
fn test_sgd_updates_each_parameter_from_its_own_gradient() -> Result<(), DenseFlowError> {
    let w = create_param(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    let b = Parameter::new(Tensor::new(vec![0.5, -0.5], vec![1, 2])?, ParamKind::Bias);
    let mut grads = Gradients::new();
    grads.set(w.id(), Tensor::new(vec![0.1, 0.2, 0.3, 0.4], vec![2, 2])?);
    grads.set(b.id(), Tensor::new(vec![1.0, -1.0], vec![1, 2])?);

    let mut optimizer = Sgd::new(vec![w.clone(), b.clone()], 0.5)?;
    optimizer.step(&grads)?;

    check_tensor_near(&w.snapshot()?, &[2, 2], &[0.95, 1.9, 2.85, 3.8], 1e-12);
    check_tensor_near(&b.snapshot()?, &[1, 2], &[0.0, 0.0], 1e-12);
    Ok(())
}

#[test]
fn test_sgd_rejects_bad_learning_rate() {
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Sgd::new(Vec::new(), lr),
            Err(DenseFlowError::InvalidConfig(_))
        ));
    }
}

#[test]
fn test_sgd_missing_gradient_leaves_params_untouched() -> Result<(), DenseFlowError> {
    let first = create_param(vec![1.0], vec![1, 1])?;
    let second = create_param(vec![2.0], vec![1, 1])?;
    let mut grads = Gradients::new();
    grads.set(first.id(), Tensor::scalar(1.0));

    let mut optimizer = Sgd::new(vec![first.clone(), second], 0.1)?;
    assert!(matches!(
        optimizer.step(&grads),
        Err(DenseFlowError::NilOperand { .. })
    ));
    assert_eq!(first.snapshot()?.item()?, 1.0);
    Ok(())
}

#[test]
fn test_sgd_gradient_shape_mismatch() -> Result<(), DenseFlowError> {
    let param = create_param(vec![1.0, 2.0], vec![1, 2])?;
    let mut grads = Gradients::new();
    grads.set(param.id(), Tensor::new(vec![1.0, 2.0], vec![2, 1])?);
    let mut optimizer = Sgd::new(vec![param], 0.1)?;
    assert!(matches!(
        optimizer.step(&grads),
        Err(DenseFlowError::ShapeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), DenseFlowError> {
    let param = create_param(vec![1.0, 2.0, 3.0], vec![3, 1])?;
    let mut grads = Gradients::new();
    grads.set(param.id(), Tensor::new(vec![5.0, 5.0, 5.0], vec![3, 1])?);
    let mut optimizer = Sgd::new(vec![param.clone()], 0.01)?;
    optimizer.zero_grad(&mut grads)?;
    check_tensor_near(grads.get(param.id()).unwrap(), &[3, 1], &[0.0; 3], 0.0);
    assert_eq!(optimizer.learning_rate(), 0.01);
    Ok(())
}
