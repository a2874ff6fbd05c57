use denseflow_core::tensor::Tensor;

// Not every test binary uses every helper.
#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn rows(data: &[&[f64]]) -> Vec<Tensor> {
    data.iter()
        .map(|row| create_test_tensor(row.to_vec(), vec![1, row.len()]))
        .collect()
}

/// Routes `log` output to the test harness when `RUST_LOG` is set.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
