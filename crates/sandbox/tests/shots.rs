use quantum::{evolve::run_circuit, gates::ONE_OVER_SQRT2, StateVector};
use sandbox::{frequencies, output::write_counts_csv, sample_counts};

#[test]
fn shot_histogram_is_reproducible() {
    let psi = StateVector::new([0.5, 0.5, 0.5, 0.5]);
    let a = sample_counts(&psi, 4_000, "repro", 8);
    let b = sample_counts(&psi, 4_000, "repro", 8);
    assert_eq!(a, b);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let c = pool.install(|| sample_counts(&psi, 4_000, "repro", 8));
    assert_eq!(a, c);
}

#[test]
fn equal_superposition_converges_to_half() {
    let psi = StateVector::new([ONE_OVER_SQRT2, 0.0, ONE_OVER_SQRT2, 0.0]);
    let counts = sample_counts(&psi, 40_000, "half", 16);
    assert_eq!(counts[1] + counts[3], 0, "counts = {:?}", counts);

    let f = frequencies(&counts);
    assert!((f[0] - 0.5).abs() < 0.02, "f = {:?}", f);
    assert!((f[2] - 0.5).abs() < 0.02, "f = {:?}", f);
}

#[test]
fn bell_histogram_written_as_csv() {
    let bell = *run_circuit(&["H0", "CNOT"]).unwrap().last().unwrap();
    let counts = sample_counts(&bell, 1_000, "csv", 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counts.csv");
    write_counts_csv(&path, &counts).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "basis,count,frequency");
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("01,0,"), "{}", lines[2]);
    assert!(lines[3].starts_with("10,0,"), "{}", lines[3]);
}
