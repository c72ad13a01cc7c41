use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".conf")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn translates_stdin() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.write_stdin("global name = \"value\";");

    cmd.assert()
        .success()
        .stdout("<config><global name=\"name\">\"value\"</global></config>\n");
}

#[test]
fn translates_file_argument() {
    let file = source_file("#(a, b)\n?[nope]");
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.arg(file.path());

    cmd.assert().success().stdout(
        "<config><array><value>a</value><value>b</value></array>\
         <constant_eval name=\"nope\">undefined</constant_eval></config>\n",
    );
}

#[test]
fn dash_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.arg("-").write_stdin("{ }");

    cmd.assert()
        .success()
        .stdout("<config><dict></dict></config>\n");
}

#[test]
fn source_order_and_indent_flags() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.args(["--order", "source", "--indent", "2"])
        .write_stdin("{\n  port = 80\n}");

    cmd.assert()
        .success()
        .stdout("<config>\n  <dict>\n    <item key=\"port\">80</item>\n  </dict>\n</config>\n");
}

#[test]
fn json_format_flag() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.args(["--format", "json"]).write_stdin("#(1)");

    cmd.assert()
        .success()
        .stdout("{\"nodes\":[{\"kind\":\"array\",\"values\":[\"1\"]}]}\n");
}

#[test]
fn config_file_sets_declaration() {
    let config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    std::fs::write(config.path(), "[output]\ndeclaration = true\n").expect("write config");

    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.arg("--config").arg(config.path()).write_stdin("");

    cmd.assert().success().stdout(predicate::str::starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><config></config>",
    ));
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("conflang.toml"), "[lexer]\norder = \"source\"\n")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.current_dir(dir.path()).write_stdin("{\n  port = 80\n}");

    cmd.assert()
        .success()
        .stdout("<config><dict><item key=\"port\">80</item></dict></config>\n");
}

#[test]
fn block_comment_produces_no_nodes() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.write_stdin("%{ settings %}\n* note {");

    cmd.assert().success().stdout("<config></config>\n");
}

#[test]
fn tokens_flag_dumps_json() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.arg("--tokens").write_stdin("?[port]");

    cmd.assert().success().stdout(
        predicate::str::contains("\"kind\": \"constant_eval\"")
            .and(predicate::str::contains("\"text\": \"?[port]\"")),
    );
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("xml")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml")),
    );
}

#[test]
fn unterminated_dict_fails() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.write_stdin("{ a = 1");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: unterminated dict"));
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.args(["--format", "toml"]).write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: format 'toml' not found"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("conflang");
    cmd.arg("/nonexistent/input.conf");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read /nonexistent/input.conf"));
}
