use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_cppdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn render_fixtures() -> String {
    let assert = cmd()
        .arg(fixture_path("font.cpp"))
        .arg(fixture_path("scene.cpp"))
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- HTML mode --

#[test]
fn html_goes_to_stdout_by_default() {
    let page = render_fixtures();
    assert!(page.contains("<h1 id=\"Reference_top\">API Reference</h1>"));
    assert!(page.contains("<h3>Namespaces</h3>"));
}

#[test]
fn html_namespace_index_links() {
    let page = render_fixtures();
    assert!(page.contains("<li><a href=\"#Reference_Draw\">Draw</a></li>"));
    assert!(page.contains("<li><a href=\"#Reference_Font\">Font</a></li>"));
    assert!(page.contains("<li><a href=\"#Reference_SCOPE_*\">SCOPE_*</a></li>"));
}

#[test]
fn html_function_namespaces_are_sorted() {
    let page = render_fixtures();
    // "Math" was discovered after "Resource" (the field registers its
    // namespace into the function group first) but sorts ahead of it.
    let math = page.find("#Reference_Math").unwrap();
    let resource = page.find("#Reference_Resource").unwrap();
    assert!(math < resource);
}

#[test]
fn html_method_entry_is_complete() {
    let page = render_fixtures();
    assert!(page.contains("<p id=\"Reference_methods_Draw_SetBlendColor\">"));
    assert!(page.contains("<code>Draw.SetBlendColor(color[, alpha])</code>"));
    assert!(page.contains(
        "<a href=\"#Reference_methods_Draw_GetBlendColor\">Draw.GetBlendColor</a>"
    ));
}

#[test]
fn html_undocumented_method_flagged_and_counted() {
    let page = render_fixtures();
    assert!(page.contains("<h2 style=\"margin-bottom: 8px; color: red;\">Draw.GetBlendColor</h2>"));
    assert!(page.contains("<p>3 out of 4 methods have descriptions. </p>"));
    assert!(page.contains("<p>1 out of 1 constructors have descriptions. </p>"));
}

#[test]
fn html_multiline_description_joined() {
    let page = render_fixtures();
    assert!(page.contains(
        "Sets the oversampling value.<br/>The default is <code>1</code> for all fonts."
    ));
}

#[test]
fn html_field_entry_shows_type_and_default() {
    let page = render_fixtures();
    assert!(page.contains("<p id=\"Reference_fields_Resource_UnloadPolicy\">"));
    assert!(page.contains("<b>Type: </b>SCOPE</div>"));
    assert!(page.contains("<b>Default: </b><code>SCOPE_GAME</code>"));
}

#[test]
fn html_unresolved_ref_degrades_to_text() {
    let page = render_fixtures();
    assert!(page.contains("Related to Math.Tan."));
    assert!(!page.contains("<ref Math.Tan>"));
}

#[test]
fn html_enum_prefix_namespace_groups_enums() {
    let page = render_fixtures();
    assert!(page.contains("<h2><code>SCOPE_*</code></h2>"));
    assert!(page.contains("<p id=\"Reference_enums_SCOPE_GAME\">"));
    assert!(page.contains("<p id=\"Reference_enums_SCOPE_SCENE\">"));
}

#[test]
fn html_flat_kinds_render_from_member_list() {
    let page = render_fixtures();
    assert!(page.contains("<p id=\"Reference_constants_MAX_PALETTE_COUNT\">"));
    assert!(page.contains("<p id=\"Reference_globals_CameraX\">"));
    assert!(page.contains("<p>1 out of 1 constants have descriptions. </p>"));
}

#[test]
fn html_output_file_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reference.html");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(fixture_path("scene.cpp"))
        .assert()
        .success();

    let page = std::fs::read_to_string(&out).unwrap();
    assert!(page.contains("<h1 id=\"Reference_top\">API Reference</h1>"));
}

#[test]
fn html_title_flag_sets_heading() {
    let assert = cmd()
        .args(["--title", "Engine Reference"])
        .arg(fixture_path("scene.cpp"))
        .assert()
        .success();
    let page = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(page.contains("<h1 id=\"Reference_top\">Engine Reference</h1>"));
    assert!(page.contains("<title>Engine Reference</title>"));
}

#[test]
fn html_stylesheet_inlined() {
    let dir = TempDir::new().unwrap();
    let css = dir.path().join("style.css");
    std::fs::write(&css, "body { color: black; }").unwrap();

    let assert = cmd()
        .args(["--stylesheet", css.to_str().unwrap()])
        .arg(fixture_path("scene.cpp"))
        .assert()
        .success();
    let page = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(page.contains("body { color: black; }"));
}

// -- directory and glob inputs --

#[test]
fn directory_input_scans_recursively() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("sub");
    std::fs::create_dir(&nested).unwrap();
    std::fs::copy(fixture_path("scene.cpp"), nested.join("scene.cpp")).unwrap();

    let assert = cmd()
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();
    let page = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(page.contains("Reference_methods_Draw_SetBlendColor"));
}

#[test]
fn unmatched_glob_warns_but_continues() {
    cmd()
        .arg(fixture_path("scene.cpp"))
        .arg("no/such/dir/*.cpp")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: no files matched"));
}

#[test]
fn no_inputs_is_a_configuration_error() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input files given"));
}

// -- Doxygen mode --

#[test]
fn doxygen_writes_per_kind_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("--doxygen")
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("font.cpp"))
        .arg(fixture_path("scene.cpp"))
        .assert()
        .success();

    for name in [
        "functions.dox",
        "methods.dox",
        "constructors.dox",
        "fields.dox",
        "enums.dox",
        "constants.dox",
        "globals.dox",
        "index.dox",
    ] {
        assert!(dir.path().join(name).exists(), "missing {}", name);
    }
    // Descriptive kinds get no page of their own.
    assert!(!dir.path().join("classes.dox").exists());

    let methods = std::fs::read_to_string(dir.path().join("methods.dox")).unwrap();
    assert!(methods.contains("\\section Reference_methods_Draw_SetBlendColor Draw.SetBlendColor"));
    assert!(methods.contains("\\param color (Integer) The color to use."));
}

#[test]
fn doxygen_requires_output() {
    cmd()
        .arg("--doxygen")
        .arg(fixture_path("scene.cpp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--doxygen requires --output"));
}

#[test]
fn doxygen_rejects_file_output() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("out.html");
    std::fs::write(&file, "").unwrap();

    cmd()
        .arg("--doxygen")
        .args(["-o", file.to_str().unwrap()])
        .arg(fixture_path("scene.cpp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a directory"));
}

#[test]
fn conflicting_modes_rejected() {
    cmd()
        .arg("--html")
        .arg("--doxygen")
        .arg(fixture_path("scene.cpp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
