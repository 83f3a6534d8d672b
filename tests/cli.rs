use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const READS: &[u8] = b"@read1\nACGTACGT\n+\nABCDEFGH\n@read2\nTTTTGGGG\n+\nIIIIJJJJ\n";
const EXISTING: &[u8] = b"@old\nA\n+\nI\n";

fn fqgrep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fqgrep"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn select_matching_reads() {
    let dir = tempfile::tempdir().unwrap();
    let reads = dir.path().join("reads.fastq");
    fs::write(&reads, READS).unwrap();

    let output = fqgrep(&["-a", "acgt", path_str(&reads)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"@read1\nACGT\n+\nABCD\n");
}

#[test]
fn help_and_version() {
    for flag in ["-h", "--help", "-V", "--version"] {
        let output = fqgrep(&[flag]);
        assert_eq!(output.status.code(), Some(0), "{}", flag);
        assert!(!output.stdout.is_empty(), "{}", flag);
    }
}

#[test]
fn usage_errors() {
    let cases: [&[&str]; 3] = [&[], &["-x", "ACGT"], &["--no-such-flag", "ACGT"]];
    for args in cases {
        let output = fqgrep(args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(output.stdout.is_empty(), "{:?}", args);
    }
}

#[test]
fn invalid_config() {
    for (args, message) in [
        (&["-a", "-b", "ACGT"][..], "Specify -b or -a, not both."),
        (&["-i", "-a", "read"][..], "Makes no sense to trim IDs."),
        (
            &["-v", "-a", "ACGT"][..],
            "Cannot trim reads selected by an inverted match.",
        ),
    ] {
        let output = fqgrep(args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(stderr(&output).contains(message), "{:?}", args);
    }
}

#[test]
fn invalid_pattern() {
    let output = fqgrep(&["AC(GT"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("AC(GT"));
}

#[test]
fn unwritable_mismatches() {
    let dir = tempfile::tempdir().unwrap();
    let reads = dir.path().join("reads.fastq");
    fs::write(&reads, READS).unwrap();
    let mismatches = dir.path().join("missing_dir").join("mismatches.fastq");

    let output = fqgrep(&["-m", path_str(&mismatches), "ACGT", path_str(&reads)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_run_keeps_mismatch_file() {
    let dir = tempfile::tempdir().unwrap();
    let reads = dir.path().join("reads.fastq");
    fs::write(&reads, READS).unwrap();
    let existing = dir.path().join("existing.fq");
    fs::write(&existing, EXISTING).unwrap();

    for args in [
        &["-a", "-b", "-m", path_str(&existing), "ACGT", path_str(&reads)][..],
        &["-m", path_str(&existing), "AC(GT", path_str(&reads)][..],
    ] {
        let output = fqgrep(args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert_eq!(fs::read(&existing).unwrap(), EXISTING, "{:?}", args);
    }
}

#[test]
fn mismatches_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let reads = dir.path().join("reads.fastq");
    fs::write(&reads, READS).unwrap();
    let mismatches = dir.path().join("mismatches.fq");

    let output = fqgrep(&["-c", "-m", path_str(&mismatches), "ACGT", path_str(&reads)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"1\n");
    assert_eq!(
        fs::read(&mismatches).unwrap(),
        b"@read2\nTTTTGGGG\n+\nIIIIJJJJ\n"
    );
}
