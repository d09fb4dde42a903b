use anyhow::Result;
use insta::assert_snapshot;

use crate::{CLEAN_DE, CliTest, run};

#[test]
fn test_lookup_bundled_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.lookup_command();
    cmd.arg("Threads:");
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_snapshot!(stdout.trim_end(), @"Fäden:");

    let mut cmd = test.lookup_command();
    cmd.args(["Image quality", "--context", "SettingsPage"]);
    let (_, stdout, _) = run(cmd)?;
    assert_snapshot!(stdout.trim_end(), @"Bildqualität");
    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.lookup_command();
    cmd.args(["unknown-string", "-v"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "unknown-string\n");
    assert!(stderr.contains("note: no translation for \"unknown-string\" in context SettingsPage"));
    Ok(())
}

#[test]
fn test_lookup_in_file_with_count() -> Result<()> {
    let test = CliTest::with_file(
        "main_de.ts",
        r#"<TS version="2.1" language="de_DE">
<context>
    <name>MainWindow</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n Datei</numerusform>
            <numerusform>%n Dateien</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let mut cmd = test.lookup_command();
    cmd.args(["%n file(s)", "--file", "main_de.ts", "--context", "MainWindow", "-n", "3"]);
    let (code, stdout, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "3 Dateien\n");

    let mut cmd = test.lookup_command();
    cmd.args(["%n file(s)", "--file", "main_de.ts", "--context", "MainWindow", "-n", "1"]);
    let (_, stdout, _) = run(cmd)?;
    assert_eq!(stdout, "1 Datei\n");
    Ok(())
}

#[test]
fn test_lookup_default_context_from_config() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", CLEAN_DE)?;
    test.write_file(".tscatrc.json", r#"{ "defaultContext": "MainWindow" }"#)?;

    let mut cmd = test.lookup_command();
    cmd.args(["Threads:", "--file", "app_de.ts"]);
    let (_, stdout, _) = run(cmd)?;
    assert_eq!(stdout, "Threads:\n");

    let mut cmd = test.lookup_command();
    cmd.args(["Threads:", "--file", "app_de.ts", "--context", "SettingsPage"]);
    let (_, stdout, _) = run(cmd)?;
    assert_eq!(stdout, "Fäden:\n");
    Ok(())
}
