use gradient_optimizer::{
    config::RunConfigDraft,
    optimize,
    trace::{parse_trace, WriterSink},
    Algorithm, ObjectiveFunction, OptimizerErr, RunConfig, Status,
};

const UNIT: f64 = 0.00001;

fn config(
    function: ObjectiveFunction,
    algorithm: Algorithm,
    iterations: usize,
    tolerance: f64,
    step_size: f64,
    initial_point: Vec<f64>,
) -> RunConfig {
    RunConfig::new(
        function,
        algorithm,
        iterations,
        tolerance,
        step_size,
        initial_point,
    )
    .unwrap()
}

fn trace_of(cfg: &RunConfig) -> Vec<String> {
    let mut lines = Vec::new();
    optimize(cfg, &mut lines).unwrap();
    lines
}

fn values(lines: &[String]) -> Vec<f64> {
    lines
        .iter()
        .filter_map(|l| l.strip_prefix("Objective Function Value: "))
        .map(|v| v.parse().unwrap())
        .collect()
}

#[test]
fn quadratic_at_origin_converges_on_the_first_step() {
    let cfg = config(
        ObjectiveFunction::Quadratic,
        Algorithm::Steepest,
        100,
        1e-9,
        0.1,
        vec![0.0, 0.0],
    );

    let mut lines = Vec::new();
    let result = optimize(&cfg, &mut lines).unwrap();

    assert_eq!(result.status, Status::Converged);
    assert_eq!(result.iters, 2);
    assert_eq!(result.f, 0.0);
    assert_eq!(result.grad_norm, Some(0.0));
    assert!(lines.contains(&"Convergence reached after 2 iterations.".to_string()));
}

#[test]
fn steepest_descent_on_quadratic_contracts_and_converges() {
    let cfg = config(
        ObjectiveFunction::Quadratic,
        Algorithm::Steepest,
        100,
        0.001,
        0.1,
        vec![5.0, 5.0],
    );

    let mut lines = Vec::new();
    let result = optimize(&cfg, &mut lines).unwrap();

    assert!(result.converged());
    assert!(result.iters < 50, "converged after {} iterations", result.iters);

    // Values are floored to five decimals, so near the minimum consecutive values
    // can share the smallest displayable unit and a strict decrease is impossible.
    let values = values(&lines);
    assert_eq!(values.len(), result.iters);
    assert_eq!(values[0], 50.0);
    for pair in values.windows(2) {
        assert!(
            pair[1] < pair[0] || (pair[1] == pair[0] && pair[0] <= UNIT),
            "objective went from {} to {}",
            pair[0],
            pair[1]
        );
    }
    assert!(values
        .windows(2)
        .any(|pair| pair[0] == UNIT && pair[1] == UNIT));
}

#[test]
fn steepest_descent_first_steps_match_the_contraction_rate() {
    let cfg = config(
        ObjectiveFunction::Quadratic,
        Algorithm::Steepest,
        3,
        0.001,
        0.1,
        vec![5.0, 5.0],
    );

    let lines = trace_of(&cfg);

    assert_eq!(
        &lines[9..],
        [
            "Iteration 1:",
            "Objective Function Value: 50.00000",
            "x-values: 5.00000 5.00000",
            "",
            "Iteration 2:",
            "Objective Function Value: 32.00000",
            "x-values: 4.00000 4.00000",
            "Current Tolerance: 14.14213",
            "",
            "Iteration 3:",
            "Objective Function Value: 20.48000",
            "x-values: 3.20000 3.20000",
            "Current Tolerance: 11.31370",
            "",
            "Maximum iterations reached without satisfying the tolerance.",
            "",
            "Optimization process completed.",
        ]
    );
}

#[test]
fn momentum_with_zero_beta_reproduces_steepest_descent() {
    for function in ObjectiveFunction::ALL {
        let start = vec![1.5, -0.75, 2.25];
        let steepest = config(function, Algorithm::Steepest, 40, 1e-4, 0.0001, start.clone());
        let momentum = config(
            function,
            Algorithm::Momentum { beta: 0.0 },
            40,
            1e-4,
            0.0001,
            start,
        );

        let steepest = trace_of(&steepest);
        let momentum = trace_of(&momentum);

        // Only the algorithm line of the header differs.
        assert_eq!(steepest.len(), momentum.len());
        for (i, (s, m)) in steepest.iter().zip(&momentum).enumerate() {
            if s.starts_with("Algorithm:") {
                assert_eq!(m, "Algorithm: Momentum Descent (beta=0.0)");
            } else {
                assert_eq!(s, m, "{function}: line {i} differs");
            }
        }
    }
}

#[test]
fn momentum_differs_from_steepest_when_beta_is_positive() {
    let start = vec![3.0, -2.0];
    let steepest = trace_of(&config(
        ObjectiveFunction::Quadratic,
        Algorithm::Steepest,
        10,
        1e-6,
        0.1,
        start.clone(),
    ));
    let momentum = trace_of(&config(
        ObjectiveFunction::Quadratic,
        Algorithm::Momentum { beta: 0.9 },
        10,
        1e-6,
        0.1,
        start,
    ));

    assert_ne!(values(&steepest)[1..], values(&momentum)[1..]);
}

#[test]
fn out_of_bounds_start_emits_nothing() {
    let draft = RunConfigDraft {
        function: "quadratic".into(),
        algorithm: "steepest".into(),
        dimensionality: 1,
        iterations: 10,
        tolerance: 0.001,
        step_size: 0.1,
        beta: None,
        initial_point: vec![10.0],
    };

    let err = RunConfig::try_from(draft).unwrap_err();
    assert!(matches!(
        err,
        OptimizerErr::OutOfBounds { index: 0, value, .. } if value == 10.0
    ));
}

#[test]
fn rastrigin_accepts_its_wider_domain() {
    let cfg = config(
        ObjectiveFunction::Rastrigin,
        Algorithm::Steepest,
        5,
        0.001,
        0.001,
        vec![5.12, -5.12],
    );
    assert!(optimize(&cfg, Vec::new()).is_ok());
}

#[test]
fn identical_configs_produce_identical_traces() {
    for function in ObjectiveFunction::ALL {
        for algorithm in [Algorithm::Steepest, Algorithm::Momentum { beta: 0.9 }] {
            let cfg = config(function, algorithm, 60, 1e-5, 0.0005, vec![-1.2, 1.0, 0.3]);
            assert_eq!(trace_of(&cfg), trace_of(&cfg));
        }
    }
}

#[test]
fn file_traces_round_trip_through_the_parser() {
    let cfg = config(
        ObjectiveFunction::Rosenbrock,
        Algorithm::Momentum { beta: 0.5 },
        25,
        1e-3,
        0.0005,
        vec![-1.2, 1.0],
    );

    let path = std::env::temp_dir().join(format!("gdopt-trace-{}.txt", std::process::id()));
    let result = optimize(&cfg, WriterSink::create(&path).unwrap()).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(content.lines().collect::<Vec<_>>(), trace_of(&cfg));

    let trajectory = parse_trace(&content).unwrap();
    assert_eq!(trajectory.function_name.as_deref(), Some("Rosenbrock"));
    assert_eq!(trajectory.len(), result.iters);
    assert_eq!(trajectory.points.last(), Some(&result.x));
    assert_eq!(trajectory.values.last(), Some(&result.f));
}

#[test]
fn budget_exhaustion_reports_the_last_step() {
    let cfg = config(
        ObjectiveFunction::Rastrigin,
        Algorithm::Steepest,
        4,
        0.0,
        0.0001,
        vec![2.5],
    );

    let mut lines = Vec::new();
    let result = optimize(&cfg, &mut lines).unwrap();

    assert_eq!(result.status, Status::BudgetExhausted);
    assert_eq!(result.iters, 4);
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Optimization process completed.")
    );
    assert!(lines.contains(&"Maximum iterations reached without satisfying the tolerance.".into()));
}
