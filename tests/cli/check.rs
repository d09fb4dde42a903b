use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CLEAN_DE, CliTest, run};

/// Wrap `<message>` elements in a German SettingsPage catalog.
/// The first message starts on line 6.
fn catalog(messages: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <!DOCTYPE TS>\n\
         <TS version=\"2.1\" language=\"de_DE\">\n\
         <context>\n    <name>SettingsPage</name>\n{}</context>\n</TS>\n",
        messages
    )
}

const EMPTY_AND_UNFINISHED: &str = "    <message>
        <source>German</source>
        <translation></translation>
    </message>
    <message>
        <source>Form</source>
        <translation type=\"unfinished\">Bilden</translation>
    </message>
";

#[test]
fn test_check_clean_file() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", CLEAN_DE)?;

    let mut cmd = test.check_command();
    cmd.arg("app_de.ts");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 1 TS file - no issues found\n");
    Ok(())
}

#[test]
fn test_check_reports_errors_and_warnings() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &catalog(EMPTY_AND_UNFINISHED))?;

    let mut cmd = test.check_command();
    cmd.arg("app_de.ts");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"German\"  empty-translation\n  --> app_de.ts:6\n"));
    assert!(stdout.contains(" 6 | SettingsPage: \"German\" => \"\"\n"));
    assert!(stdout.contains("warning: \"Form\"  unfinished\n  --> app_de.ts:10\n"));
    assert!(stdout.ends_with("✘ 2 problems (1 error, 1 warning)\n"));
    Ok(())
}

#[test]
fn test_check_warnings_only_exit_zero() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &catalog(
            "    <message>
        <source> step(s)</source>
        <translation>Schritt(e)</translation>
    </message>
",
        ),
    )?;

    let mut cmd = test.check_command();
    cmd.arg("app_de.ts");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \" step(s)\"  surrounding-whitespace"));
    assert!(stdout.ends_with("✘ 1 problem (0 errors, 1 warning)\n"));
    Ok(())
}

#[test]
fn test_check_selected_rules() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &catalog(EMPTY_AND_UNFINISHED))?;

    let mut cmd = test.check_command();
    cmd.args(["app_de.ts", "--rules", "unfinished"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("empty-translation"));
    assert!(stdout.contains("unfinished"));
    Ok(())
}

#[test]
fn test_check_duplicate_locations() -> Result<()> {
    let test = CliTest::with_file(
        "app_de.ts",
        &catalog(
            "    <message>
        <location filename=\"settingspage.ui\" line=\"228\"/>
        <source>Software updates:</source>
        <translation>Software-Updates:</translation>
    </message>
    <message>
        <location filename=\"settingspage.ui\" line=\"228\"/>
        <source>Language:</source>
        <translation>Sprache:</translation>
    </message>
",
        ),
    )?;

    let mut cmd = test.check_command();
    cmd.arg("app_de.ts");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"Language:\"  duplicate-location"));
    assert!(
        stdout.contains("= note: settingspage.ui:228 is also claimed by \"Software updates:\"")
    );
    Ok(())
}

#[test]
fn test_check_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken_de.ts", "<TS><context><name>SettingsPage</name>")?;

    let mut cmd = test.check_command();
    cmd.arg("broken_de.ts");
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> broken_de.ts:"));
    assert!(!stderr.contains("could not be parsed"));
    Ok(())
}

#[test]
fn test_check_ignored_parse_errors_are_still_mentioned() -> Result<()> {
    let test = CliTest::with_file("broken_de.ts", "<TS><context><name>SettingsPage</name>")?;
    test.write_file(".tscatrc.json", r#"{ "ignoreRules": ["parse-error"] }"#)?;

    let mut cmd = test.check_command();
    cmd.arg("broken_de.ts");
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("parse-error"));
    assert_eq!(
        stderr,
        "warning: skipped 1 file(s) that could not be parsed: broken_de.ts\n"
    );
    Ok(())
}

#[test]
fn test_check_default_globs_skip_typescript_sources() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lan/settings_de.ts", CLEAN_DE)?;
    test.write_file("web/src/user_service.ts", "export const userService = {};\n")?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 1 TS file - no issues found\n");
    assert_eq!(stderr, "");
    Ok(())
}

#[test]
fn test_check_uses_config_globs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lan/settings_de.ts", CLEAN_DE)?;
    test.write_file("lan/about_de.ts", CLEAN_DE)?;
    test.write_file("notes.ts", "not a catalog")?;
    test.write_file(".tscatrc.json", r#"{ "catalogs": ["lan/*_*.ts"] }"#)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Checked 2 TS files - no issues found\n");
    Ok(())
}

#[test]
fn test_check_expected_contexts_and_ignored_rules() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", &catalog(EMPTY_AND_UNFINISHED))?;
    test.write_file(
        ".tscatrc.json",
        r#"{ "expectedContexts": ["MainWindow"], "ignoreRules": ["empty-translation", "unfinished"] }"#,
    )?;

    let mut cmd = test.check_command();
    cmd.arg("app_de.ts");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"SettingsPage\"  unexpected-context"));
    assert!(stdout.contains("= note: expected one of: MainWindow"));
    assert!(stdout.ends_with("✘ 1 problem (1 error, 0 warnings)\n"));
    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_file("app_de.ts", CLEAN_DE)?;
    test.write_file(".tscatrc.json", r#"{ "ignoreRules": ["hardcoded"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Unknown rule in 'ignoreRules'"));
    Ok(())
}

#[test]
fn test_check_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.check_command();
    cmd.arg("missing_de.ts");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read TS file"));
    Ok(())
}
