use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CLEAN_DE, CliTest, run};

/// Same content as `CLEAN_DE` without any layout.
const COMPACT_DE: &str = concat!(
    r#"<?xml version="1.0" encoding="utf-8"?><!DOCTYPE TS><TS version="2.1" language="de_DE">"#,
    r#"<context><name>SettingsPage</name>"#,
    r#"<message><location filename="../../settingspage.ui" line="36"/>"#,
    r#"<source>Threads:</source><translation>Fäden:</translation></message>"#,
    r#"<message><location filename="../../settingspage.ui" line="120"/>"#,
    r#"<source>Image quality</source><translation>Bildqualität</translation></message>"#,
    r#"</context></TS>"#,
);

#[test]
fn test_fmt_check_formatted_file() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", CLEAN_DE)?;

    let mut cmd = test.command();
    cmd.args(["fmt", "--check", "app_de.ts"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ 1 file(s) already formatted\n");
    Ok(())
}

#[test]
fn test_fmt_check_reports_without_writing() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", COMPACT_DE)?;

    let mut cmd = test.command();
    cmd.args(["fmt", "--check", "app_de.ts"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert_eq!(
        stdout,
        "Would reformat: app_de.ts\n✘ 1 of 1 file(s) would be reformatted\n"
    );
    assert_eq!(test.read_file("app_de.ts")?, COMPACT_DE);
    Ok(())
}

#[test]
fn test_fmt_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", COMPACT_DE)?;

    let mut cmd = test.command();
    cmd.args(["fmt", "app_de.ts"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Reformatted: app_de.ts\n✓ Reformatted 1 of 1 file(s)\n"
    );
    assert_eq!(test.read_file("app_de.ts")?, CLEAN_DE);
    Ok(())
}

#[test]
fn test_fmt_leaves_broken_file_alone() -> Result<()> {
    let test = CliTest::with_file("broken_de.ts", "<TS><context>")?;

    let mut cmd = test.command();
    cmd.args(["fmt", "broken_de.ts"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert_eq!(test.read_file("broken_de.ts")?, "<TS><context>");
    Ok(())
}
