use super::helpers::TestProject;
use std::fs;

const LIBFOO: &str = r#"[
  {
    "name": "libfoo",
    "licenses": [{ "name": "Apache License 2.0", "text": null }],
    "artifactInfo": { "group": "com.example", "name": "libfoo", "version": "1.0" }
  }
]"#;

const MIXED: &str = r#"[
  {
    "name": "okhttp",
    "licenses": [{ "name": "The Apache Software License, Version 2.0", "text": null }],
    "artifactInfo": { "group": "com.squareup.okhttp3", "name": "okhttp", "version": "4.12.0" }
  },
  {
    "name": "MarkdownView",
    "licenses": [{ "name": "MIT License", "text": null }],
    "artifactInfo": { "group": "com.github.mukeshsolanki", "name": "MarkdownView-Android", "version": "2.0.0" }
  },
  {
    "name": "Android Support Library",
    "licenses": [
      { "name": "Android Software Development Kit License", "text": null },
      { "name": "Notice", "text": "Line1\n\n" }
    ],
    "artifactInfo": null
  }
]"#;

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_libfoo_report() {
    let project = TestProject::new();
    project.write_inventory("release", LIBFOO);
    project.write_license("Apache-2.0.txt", "Apache text");

    let output = project.run(&["release"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        project.read_report(),
        "## libfoo (com.example:libfoo:1.0)\n\n```\nApache text\n```\n\n"
    );
}

#[test]
fn test_mixed_inventory_is_sorted_and_complete() {
    let project = TestProject::new();
    project.write_inventory("release", MIXED);
    project.write_license("Apache-2.0.txt", "Apache text\n");
    project.write_license("Android-SDK.txt", "SDK text\n");
    project.write_license("MarkdownView-Android.txt", "MIT text\n");

    let output = project.run(&["release"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let expected = concat!(
        "## Android Support Library\n\n```\nSDK text\n```\n\n",
        "\n\n```\nLine1\n```\n\n",
        "## MarkdownView (com.github.mukeshsolanki:MarkdownView-Android:2.0.0)\n\n```\nMIT text\n```\n\n",
        "## okhttp (com.squareup.okhttp3:okhttp:4.12.0)\n\n```\nApache text\n```\n\n",
    );
    assert_eq!(project.read_report(), expected);
}

#[test]
fn test_rerun_is_byte_identical() {
    let project = TestProject::new();
    project.write_inventory("release", MIXED);
    project.write_license("Apache-2.0.txt", "Apache text\n");
    project.write_license("Android-SDK.txt", "SDK text\n");
    project.write_license("MarkdownView-Android.txt", "MIT text\n");

    assert!(project.run(&["release"]).status.success());
    let first = fs::read(project.report_path()).unwrap();
    assert!(project.run(&["release"]).status.success());
    let second = fs::read(project.report_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unresolved_license_leaves_previous_report() {
    let project = TestProject::new();
    project.write_inventory(
        "release",
        r#"[{ "name": "mystery", "licenses": [{ "name": "Unknown License", "text": null }], "artifactInfo": null }]"#,
    );

    fs::create_dir_all(project.report_path().parent().unwrap()).unwrap();
    fs::write(project.report_path(), "previous report").unwrap();

    let output = project.run(&["release"]);
    assert!(!output.status.success());

    let message = stderr(&output);
    assert!(message.contains("Unknown License"));
    assert!(message.contains("mystery"));
    assert_eq!(project.read_report(), "previous report");
}

#[test]
fn test_missing_inventory_fails_without_output() {
    let project = TestProject::new();

    let output = project.run(&["debug"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("dependencies_with_licenses.json"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_malformed_inventory_fails() {
    let project = TestProject::new();
    project.write_inventory("release", "{ not json");

    let output = project.run(&["release"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse dependency inventory"));
}

#[test]
fn test_missing_license_file_fails() {
    let project = TestProject::new();
    project.write_inventory("release", LIBFOO);

    let output = project.run(&["release"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Apache-2.0.txt"));
    assert!(!project.report_path().exists());
}

#[test]
fn test_config_adds_mapping_and_output() {
    let project = TestProject::new();
    project.write_inventory(
        "release",
        r#"[{ "name": "widget", "licenses": [{ "name": "BSD License", "text": null }],
              "artifactInfo": { "group": "org.example", "name": "widget", "version": "3.1" } }]"#,
    );
    project.write_license("BSD-3-Clause.txt", "BSD text");
    project.write_config(
        r#"
output = "docs/LICENSES.md"

[[overrides]]
license = "BSD License"
group = "org.example"
artifact = "widget"
version = "3.1"
file = "BSD-3-Clause.txt"
"#,
    );

    let output = project.run(&["release"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report = fs::read_to_string(project.app_dir().join("docs/LICENSES.md")).unwrap();
    assert_eq!(report, "## widget (org.example:widget:3.1)\n\n```\nBSD text\n```\n\n");
}

#[test]
fn test_check_mode() {
    let project = TestProject::new();
    project.write_inventory("release", LIBFOO);
    project.write_license("Apache-2.0.txt", "Apache text");

    let stale = project.run(&["release", "--check"]);
    assert!(!stale.status.success());
    assert!(stderr(&stale).contains("out of date"));
    assert!(!project.report_path().exists());

    assert!(project.run(&["release"]).status.success());

    let fresh = project.run(&["release", "--check"]);
    assert!(fresh.status.success(), "stderr: {}", stderr(&fresh));
}

#[test]
fn test_variants_subcommand() {
    let project = TestProject::new();
    project.write_inventory("release", "[]");
    project.write_inventory("debug", "[]");

    let output = project.run(&["variants"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "debug\nrelease\n");
}

#[test]
fn test_init_then_validate() {
    let project = TestProject::new();

    let init = project.run(&["init"]);
    assert!(init.status.success(), "stderr: {}", stderr(&init));
    assert!(project.app_dir().join("license-report.toml").exists());

    let again = project.run(&["init"]);
    assert!(!again.status.success());

    let invalid = project.run(&["config", "--validate"]);
    assert!(!invalid.status.success());
    assert!(stderr(&invalid).contains("Apache-2.0.txt"));

    project.write_license("Apache-2.0.txt", "Apache text");
    project.write_license("Android-SDK.txt", "SDK text");
    project.write_license("MarkdownView-Android.txt", "MIT text");

    let valid = project.run(&["config", "--validate"]);
    assert!(valid.status.success(), "stderr: {}", stderr(&valid));
}

#[test]
fn test_missing_variant_argument() {
    let project = TestProject::new();

    let output = project.run(&[]);
    assert!(!output.status.success());
}
