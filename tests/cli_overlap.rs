use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn command_overlap() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gpc")?;
    let output = cmd
        .arg("overlap")
        .arg("tests/caller/glimmer.fna")
        .arg("tests/caller/prodigal.fna")
        .arg("--format")
        .arg("glimmer")
        .arg("--query-format")
        .arg("prodigal")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;

    // glimmer spans (100,300) (380,450) (510,720) against prodigal spans
    // (337,2799) (2850,3609) (4000,4500): 0 + 70 + 210 intersected bases
    assert!(stdout.contains("280\t3721\t7.5"));

    Ok(())
}

#[test]
fn command_overlap_is_asymmetric() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("gpc")?;
    let output = cmd
        .arg("overlap")
        .arg("tests/caller/prodigal.fna")
        .arg("tests/caller/glimmer.fna")
        .arg("--format")
        .arg("prodigal")
        .arg("--query-format")
        .arg("glimmer")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;

    // same intersected bases, glimmer's 200 + 70 + 210 span bases below
    assert!(stdout.contains("280\t480\t58.3"));

    Ok(())
}

#[test]
fn command_overlap_touching_boundary() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let a = temp.path().join("a.fna");
    let b = temp.path().join("b.fna");

    // (10,20) touches (20,30): zero overlap
    fs::write(&a, ">g1 10 20\nACGT\n")?;
    fs::write(&b, ">g1 20 30\nACGT\n")?;

    let mut cmd = Command::cargo_bin("gpc")?;
    let output = cmd
        .arg("overlap")
        .arg(&a)
        .arg(&b)
        .arg("--format")
        .arg("glimmer")
        .arg("--query-format")
        .arg("glimmer")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("0\t10\t0.0"));

    Ok(())
}

#[test]
fn command_overlap_double_counting() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let a = temp.path().join("a.fna");
    let b = temp.path().join("b.fna");

    // both reference genes fully inside the query gene: 10 + 10, not the
    // union length 15
    fs::write(&a, ">g1 0 10\nACGT\n>g2 5 15\nACGT\n")?;
    fs::write(&b, ">g1 0 20\nACGT\n")?;

    let mut cmd = Command::cargo_bin("gpc")?;
    let output = cmd
        .arg("overlap")
        .arg(&a)
        .arg(&b)
        .arg("--format")
        .arg("glimmer")
        .arg("--query-format")
        .arg("glimmer")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("20\t20\t100.0"));

    Ok(())
}

#[test]
fn command_overlap_empty_query() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let a = temp.path().join("a.fna");
    let b = temp.path().join("b.fna");

    fs::write(&a, ">g1 10 20\nACGT\n")?;
    fs::write(&b, "")?;

    let mut cmd = Command::cargo_bin("gpc")?;
    let output = cmd
        .arg("overlap")
        .arg(&a)
        .arg(&b)
        .arg("--format")
        .arg("glimmer")
        .arg("--query-format")
        .arg("glimmer")
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    // zero percent, not a division error
    assert!(stdout.contains("0\t0\t0.0"));

    Ok(())
}
