use std::{fs, io::Write, process::Command};

use tempfile::tempdir;

fn write_pileup(path: &std::path::Path, rows: usize, missing: &[usize]) {
    let mut file = fs::File::create(path).unwrap();
    for i in 0..rows {
        let perc = if missing.contains(&i) {
            String::new()
        } else {
            format!("{}.5", i)
        };
        writeln!(
            file,
            "K03455\t{}\t{}\tm\t842\t+\t{}\t{}\t255,0,0\t19\t{}",
            i,
            i + 1,
            i,
            i + 1,
            perc
        )
        .unwrap();
    }
}

fn run_methclean(pileup: &std::path::Path, out_tsv: &std::path::Path, out_txt: &std::path::Path, expected_rows: usize) -> std::process::ExitStatus {
    Command::new("cargo")
        .args(&[
            "run",
            "--quiet",
            "--",
            "-p",
            pileup.to_str().unwrap(),
            "-o",
            out_tsv.to_str().unwrap(),
            "--output-txt",
            out_txt.to_str().unwrap(),
            "--expected-rows",
            &expected_rows.to_string(),
        ])
        .status()
        .expect("Failed to execute cargo run")
}

#[test]
fn test_clean_pileup_end_to_end() {
    let dir = tempdir().unwrap();
    let pileup = dir.path().join("pileup.tsv");
    let out_tsv = dir.path().join("cleaned.tsv");
    let out_txt = dir.path().join("cleaned.txt");

    write_pileup(&pileup, 20, &[3, 10, 17]);

    let status = run_methclean(&pileup, &out_tsv, &out_txt, 20);
    assert!(
        status.success(),
        "Process ended with non-success status: {:?}",
        status
    );

    let tsv = fs::read_to_string(&out_tsv).expect("Could not read tsv output");
    let txt = fs::read_to_string(&out_txt).expect("Could not read txt output");
    assert_eq!(tsv, txt, "The .tsv and .txt outputs differ");

    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 17);

    let starts: Vec<usize> = lines
        .iter()
        .map(|line| line.split('\t').nth(1).unwrap().parse().unwrap())
        .collect();
    let expected: Vec<usize> = (0..20).filter(|i| ![3, 10, 17].contains(i)).collect();
    assert_eq!(starts, expected);
}

#[test]
fn test_row_count_mismatch_aborts_without_output() {
    let dir = tempdir().unwrap();
    let pileup = dir.path().join("pileup.tsv");
    let out_tsv = dir.path().join("cleaned.tsv");
    let out_txt = dir.path().join("cleaned.txt");

    write_pileup(&pileup, 19, &[]);

    let status = run_methclean(&pileup, &out_tsv, &out_txt, 20);
    assert!(
        !status.success(),
        "Expected non-zero exit on row count mismatch"
    );
    assert!(!out_tsv.exists());
    assert!(!out_txt.exists());
}
