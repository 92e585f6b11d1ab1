use std::{env, fs, process};

use anyhow::{Context, Result};
use log::info;

use gradient_optimizer::{
    config, optimize,
    trace::{parse_trace, WriterSink},
    OptimizeResult,
};

fn usage(bin: &str) -> ! {
    eprintln!("Usage: {bin} <config-file> [output-file]");
    eprintln!("       {bin} inspect <trace-file>");
    process::exit(2);
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let bin = args.first().map(String::as_str).unwrap_or("gdopt");

    match args.get(1..).unwrap_or_default() {
        [cmd, trace_path] if cmd == "inspect" => inspect(trace_path),
        [config_path] => run(config_path, None),
        [config_path, output_path] => run(config_path, Some(output_path)),
        _ => usage(bin),
    }
}

fn run(config_path: &str, output_path: Option<&String>) -> Result<()> {
    let cfg = config::load(config_path)
        .with_context(|| format!("cannot load config '{config_path}'"))?;

    let result = match output_path {
        Some(path) => {
            let sink = WriterSink::create(path)
                .with_context(|| format!("cannot create output file '{path}'"))?;
            let result = optimize(&cfg, sink)?;
            info!("trace written to {path}");
            result
        }
        None => optimize(&cfg, WriterSink::console())?,
    };

    report(&result);
    Ok(())
}

fn report(result: &OptimizeResult) {
    info!(
        "{:?} at iteration {} with f = {} and x = {:?}",
        result.status, result.iters, result.f, result.x
    );
}

fn inspect(trace_path: &str) -> Result<()> {
    let content = fs::read_to_string(trace_path)
        .with_context(|| format!("cannot read trace '{trace_path}'"))?;
    let trajectory = parse_trace(&content)?;

    let name = trajectory.function_name.as_deref().unwrap_or("unknown");
    println!("Objective Function: {name}");
    println!("Reported iterations: {}", trajectory.len());

    if let Some((idx, value)) = trajectory.best() {
        println!("Best value: {value:.5} at iteration {}", idx + 1);
        println!("Best point: {:?}", trajectory.points[idx]);
    }

    Ok(())
}
