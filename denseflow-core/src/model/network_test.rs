use crate::error::DenseFlowError;
use crate::model::Network;
use crate::nn::{Activation, Dense, Gradients, Loss, MseLoss, ParamKind};
use crate::tensor::Tensor;
use crate::utils::testing::check_tensor_near;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn layer(weights: Vec<f64>, w_shape: Vec<usize>, bias: Vec<f64>) -> Dense {
    let out = w_shape[1];
    Dense::from_tensors(
        Tensor::new(weights, w_shape).unwrap(),
        Tensor::new(bias, vec![1, out]).unwrap(),
    )
    .unwrap()
}

fn two_layer_identity() -> Network {
    let first = layer(vec![1.0, 1.0], vec![2, 1], vec![0.0]);
    let second = layer(vec![2.0], vec![1, 1], vec![1.0]);
    Network::from_layers(vec![first, second], Activation::Identity).unwrap()
}

#[test]
fn test_new_rejects_bad_topologies() {
    assert!(matches!(
        Network::new(&[3], Activation::Relu),
        Err(DenseFlowError::InvalidConfig(_))
    ));
    assert!(matches!(
        Network::new(&[3, 0, 1], Activation::Relu),
        Err(DenseFlowError::InvalidConfig(_))
    ));
    assert!(matches!(
        Network::from_layers(Vec::new(), Activation::Identity),
        Err(DenseFlowError::InvalidConfig(_))
    ));
}

#[test]
fn test_from_layers_checks_chaining() {
    let first = layer(vec![1.0, 1.0], vec![2, 1], vec![0.0]);
    let second = layer(vec![1.0, 1.0], vec![2, 1], vec![0.0]);
    assert!(matches!(
        Network::from_layers(vec![first, second], Activation::Identity),
        Err(DenseFlowError::InvalidConfig(_))
    ));
}

#[test]
fn test_forward_chains_layers() -> Result<(), DenseFlowError> {
    let mut net = two_layer_identity();
    let out = net.forward(&Tensor::new(vec![3.0, 4.0], vec![1, 2])?)?;
    // [[3, 4]] -> [[7]] -> [[15]]
    assert_eq!(out, Tensor::new(vec![15.0], vec![1, 1])?);
    assert_eq!(net.in_features(), 2);
    assert_eq!(net.out_features(), 1);
    Ok(())
}

#[test]
fn test_forward_surfaces_first_error() -> Result<(), DenseFlowError> {
    let mut net = two_layer_identity();
    let result = net.forward(&Tensor::new(vec![1.0, 2.0, 3.0], vec![1, 3])?);
    match result {
        Err(DenseFlowError::ShapeMismatch { operation, .. }) => {
            assert_eq!(operation, "Dense::forward")
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_backward_identity_feeds_input_gradient() -> Result<(), DenseFlowError> {
    let mut net = two_layer_identity();
    net.forward(&Tensor::new(vec![3.0, 4.0], vec![1, 2])?)?;
    let mut grads = Gradients::new();
    let d_input = net.backward(&Tensor::new(vec![1.0], vec![1, 1])?, &mut grads)?;

    let params = net.parameters();
    check_tensor_near(grads.get(params[0].id()).unwrap(), &[2, 1], &[6.0, 8.0], 1e-12);
    check_tensor_near(grads.get(params[1].id()).unwrap(), &[1, 1], &[2.0], 1e-12);
    check_tensor_near(grads.get(params[2].id()).unwrap(), &[1, 1], &[7.0], 1e-12);
    check_tensor_near(grads.get(params[3].id()).unwrap(), &[1, 1], &[1.0], 1e-12);
    check_tensor_near(&d_input, &[1, 2], &[2.0, 2.0], 1e-12);
    assert_eq!(grads.input_grad(), Some(&d_input));
    Ok(())
}

#[test]
fn test_backward_relu_masks_inactive_units() -> Result<(), DenseFlowError> {
    let only = layer(vec![-1.0], vec![1, 1], vec![0.0]);
    let mut net = Network::from_layers(vec![only], Activation::Relu)?;
    let out = net.forward(&Tensor::new(vec![1.0], vec![1, 1])?)?;
    assert_eq!(out.item()?, 0.0);

    let mut grads = Gradients::new();
    net.backward(&Tensor::new(vec![1.0], vec![1, 1])?, &mut grads)?;
    let weight_id = net.parameters()[0].id();
    assert_eq!(grads.get(weight_id).unwrap().item()?, 0.0);
    Ok(())
}

#[test]
fn test_backward_before_forward() -> Result<(), DenseFlowError> {
    let mut net = two_layer_identity();
    let mut grads = Gradients::new();
    assert!(matches!(
        net.backward(&Tensor::scalar(1.0), &mut grads),
        Err(DenseFlowError::NilOperand { .. })
    ));
    Ok(())
}

#[test]
fn test_backward_matches_finite_difference() -> Result<(), DenseFlowError> {
    let mut rng = StdRng::seed_from_u64(3);
    let mut net = Network::with_rng(&[2, 3, 1], Activation::Sigmoid, &mut rng)?;
    let x = Tensor::new(vec![0.5, -1.0, 1.5, 0.25], vec![2, 2])?;
    let y = Tensor::new(vec![1.0, 0.0], vec![2, 1])?;

    let pred = net.forward(&x)?;
    let mut grads = Gradients::new();
    net.backward(&MseLoss.gradient(&pred, &y)?, &mut grads)?;

    let h = 1e-6;
    for param in net.parameters() {
        let analytic = grads.get(param.id()).unwrap().get_value(&[0, 0])?;
        let original = param.read()?.get_value(&[0, 0])?;

        param.write()?.set_value(original + h, &[0, 0])?;
        let plus = MseLoss.loss(&net.forward(&x)?, &y)?.item()?;
        param.write()?.set_value(original - h, &[0, 0])?;
        let minus = MseLoss.loss(&net.forward(&x)?, &y)?.item()?;
        param.write()?.set_value(original, &[0, 0])?;

        assert_relative_eq!(analytic, (plus - minus) / (2.0 * h), epsilon = 1e-7);
    }
    Ok(())
}

#[test]
fn test_zero_grad_and_parameter_order() -> Result<(), DenseFlowError> {
    let mut rng = StdRng::seed_from_u64(11);
    let net = Network::with_rng(&[3, 4, 2], Activation::Relu, &mut rng)?;
    let params = net.parameters();
    assert_eq!(params.len(), 4);
    let kinds: Vec<ParamKind> = params.iter().map(|p| p.kind()).collect();
    assert_eq!(
        kinds,
        vec![ParamKind::Weight, ParamKind::Bias, ParamKind::Weight, ParamKind::Bias]
    );
    assert_eq!(params[0].shape()?, vec![3, 4]);
    assert_eq!(params[3].shape()?, vec![1, 2]);

    let names: Vec<String> = net.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["layer0.weight", "layer0.bias", "layer1.weight", "layer1.bias"]);

    let mut grads = Gradients::new();
    net.zero_grad(&mut grads)?;
    for param in &params {
        let grad = grads.get(param.id()).unwrap();
        assert_eq!(grad.shape(), param.shape()?.as_slice());
        assert!(grad.data().iter().all(|&g| g == 0.0));
    }
    Ok(())
}
