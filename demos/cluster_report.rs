use concord::{parse_labels, ClusterEvaluator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Prints every score for a clustering / ground-truth pair.
    //
    //   cargo run --example cluster_report
    //   cargo run --example cluster_report -- "0,0,1,1,2" "2,2,0,0,1" 2.0
    //
    // With no arguments the 17-point sample from Manning et al. is used.
    // Set RUST_LOG=debug to see the intermediate tables being built.
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (assignments, truth, beta) = match args.as_slice() {
        [] => (
            vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2],
            vec![0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 0, 0, 2, 2, 2],
            1.0,
        ),
        [a, t] => (parse_labels(a)?, parse_labels(t)?, 1.0),
        [a, t, b] => (parse_labels(a)?, parse_labels(t)?, b.parse::<f64>()?),
        _ => return Err("usage: cluster_report [ASSIGNMENTS TRUTH [BETA]]".into()),
    };

    let eval = ClusterEvaluator::new(&assignments, &truth);
    eval.validate()?;

    println!("assignments: {:?}", assignments);
    println!("truth:       {:?}", truth);
    println!("{}", eval.report(beta)?);

    Ok(())
}
