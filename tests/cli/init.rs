use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .tscatrc.json\n");
    assert!(test.root().join(".tscatrc.json").exists());

    let content = test.read_file(".tscatrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["catalogs"][0], "**/*_*.ts");
    assert_eq!(parsed["defaultContext"], "SettingsPage");
    assert_eq!(parsed["duplicatePolicy"], "first");
    assert!(content.contains("  \"catalogs\""), "2-space indentation");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert_eq!(stderr, "Error: .tscatrc.json already exists\n");
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");
    Ok(())
}
