use crate::error::DenseFlowError;
use crate::ops::{
    apply_unary_op, relu_derivative_op, relu_op, sigmoid_derivative_op, sigmoid_op,
};
use crate::tensor::Tensor;
use std::fmt;
use std::str::FromStr;

/// Non-linearity a [`Network`](crate::model::Network) applies after every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Identity,
    Relu,
    Sigmoid,
}

impl Activation {
    pub fn apply(&self, pre_activation: &Tensor) -> Tensor {
        match self {
            Activation::Identity => pre_activation.clone(),
            Activation::Relu => relu_op(pre_activation),
            Activation::Sigmoid => sigmoid_op(pre_activation),
        }
    }

    /// Local derivative evaluated at `pre_activation`, same shape as the input.
    pub fn derivative(&self, pre_activation: &Tensor) -> Tensor {
        match self {
            Activation::Identity => apply_unary_op(pre_activation, |_| 1.0),
            Activation::Relu => relu_derivative_op(pre_activation),
            Activation::Sigmoid => sigmoid_derivative_op(pre_activation),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Identity => "identity",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
        };
        f.write_str(name)
    }
}

impl FromStr for Activation {
    type Err = DenseFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "linear" | "none" => Ok(Activation::Identity),
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            other => Err(DenseFlowError::InvalidConfig(format!(
                "unknown activation '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Activation;
    use crate::error::DenseFlowError;
    use crate::tensor::Tensor;

    #[test]
    fn test_identity_derivative_is_ones() {
        let z = Tensor::new(vec![-3.0, 0.0, 4.0], vec![1, 3]).unwrap();
        assert_eq!(Activation::Identity.apply(&z), z);
        assert_eq!(Activation::Identity.derivative(&z).data(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_relu_apply_and_derivative() {
        let z = Tensor::new(vec![-1.0, 2.0], vec![1, 2]).unwrap();
        assert_eq!(Activation::Relu.apply(&z).data(), &[0.0, 2.0]);
        assert_eq!(Activation::Relu.derivative(&z).data(), &[0.0, 1.0]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("ReLU".parse::<Activation>(), Ok(Activation::Relu));
        assert_eq!(" sigmoid ".parse::<Activation>(), Ok(Activation::Sigmoid));
        assert_eq!("linear".parse::<Activation>(), Ok(Activation::Identity));
        assert!(matches!(
            "tanh".parse::<Activation>(),
            Err(DenseFlowError::InvalidConfig(_))
        ));
        assert_eq!(Activation::Sigmoid.to_string(), "sigmoid");
    }
}
