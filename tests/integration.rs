use std::path::Path;
use std::process::Command;

fn doclinks_cmd(fixture: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doclinks"));
    cmd.current_dir(Path::new("tests/fixtures").join(fixture));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn resolve_prints_hrefs() {
    let output = doclinks_cmd("enyo")
        .args(["resolve", "module:enyo/Control", "module:enyo/Control~Control#render", "Foo#bar"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "module:enyo/Control -> #/module/enyo/Control",
            "module:enyo/Control~Control#render -> #/kind/enyo/Control/Control:render",
            "Foo#bar -> #/member/Foo#bar",
        ]
    );
}

#[test]
fn pruned_doclets_do_not_resolve() {
    let output = doclinks_cmd("enyo")
        .args(["resolve", "Foo#helper", "Foo#secret", "Foo#alias"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1), "pruned doclets must not resolve");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("UNRESOLVED")).count(), 3);
}

#[test]
fn links_json_covers_every_remaining_doclet() {
    let output = doclinks_cmd("enyo").args(["links", "--json"]).output().unwrap();
    assert!(
        output.status.success(),
        "links failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let links: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let links = links.as_object().unwrap();
    assert_eq!(links.len(), 9);
    assert_eq!(links["package:undefined"], "#/package/package:undefined");
    assert_eq!(links["module:enyo/Control~Control"], "#/kind/enyo/Control/Control");
    assert_eq!(links["module:enyo/Bindable~Bindable.bindings"], "#/mixin/enyo/Bindable/Bindable:bindings");
    assert_eq!(links["module:enyo/dom~dom"], "#/module/enyo/dom:dom");
    assert_eq!(links["Foo"], "#/kind/Foo");
    assert!(!links.contains_key("Foo#helper"));
}

#[test]
fn publish_writes_pages_and_manifest() {
    let out = tempfile::tempdir().unwrap();
    let output = doclinks_cmd("enyo")
        .args(["publish", "--destination"])
        .arg(out.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "publish failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let class_page = std::fs::read_to_string(out.path().join("kind/enyo/Control/Control.html")).unwrap();
    assert_eq!(
        class_page.trim_end(),
        "<section class=\"kind\"><a href=\"#/kind/enyo/Control/Control\">Control</a> in <a href=\"#/module/enyo/Control\">module:enyo/Control</a></section>"
    );

    let member_page = std::fs::read_to_string(out.path().join("kind/enyo/Control/Control_render.html")).unwrap();
    assert!(member_page.contains("<a href=\"#/kind/enyo/Control/Control:render\">render</a>"));
    assert!(member_page.contains("<a href=\"#/kind/enyo/Control/Control\">module:enyo/Control~Control</a>"));

    assert!(out.path().join("module/enyo/Control.html").exists());
    assert!(out.path().join("links.json").exists());
}

#[test]
fn missing_doclets_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_doclinks"))
        .current_dir(dir.path())
        .args(["links"])
        .output()
        .unwrap();
    assert!(!output.status.success(), "links without doclets should fail");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Doclets Not Found"));
}
