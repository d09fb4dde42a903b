use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CLEAN_DE, CliTest, run};

#[test]
fn test_dump_table() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", CLEAN_DE)?;

    let mut cmd = test.command();
    cmd.args(["dump", "app_de.ts"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "LINE  CONTEXT       SOURCE           TRANSLATION\n\
         6     SettingsPage  \"Threads:\"       \"Fäden:\"\n\
         11    SettingsPage  \"Image quality\"  \"Bildqualität\"\n\
         \n\
         2 message(s) in 1 context(s)\n"
    );
    Ok(())
}

#[test]
fn test_dump_bundled_json() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["dump", "--json"]);
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);

    let value: Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["language"], "de_DE");
    assert_eq!(value["entryCount"], 15);

    let entries = value["entries"].as_array().unwrap();
    assert!(entries.iter().all(|e| e["context"] == "SettingsPage"));
    assert!(
        entries
            .iter()
            .all(|e| !e["translation"].as_str().unwrap().is_empty())
    );
    Ok(())
}
