//! End-to-end translation tests: conflang source in, XML out

use conflang::formats::tag::{serialize_document_with, TagOptions};
use conflang::translator::{translate, translate_document, Translator, TranslatorOptions};
use conflang::{Node, ParseError, TokenOrder, TranslateError};
use rstest::rstest;

fn translate_in_source_order(source: &str) -> String {
    Translator::new(TranslatorOptions {
        order: TokenOrder::Source,
        ..TranslatorOptions::default()
    })
    .expect("xml is registered")
    .translate(source)
    .expect("translation to succeed")
}

#[rstest]
#[case::empty("", "<config></config>")]
#[case::only_comments("* note\n%{ block\ncomment %}", "<config></config>")]
#[case::unrecognized_text("hello, world!", "<config></config>")]
#[case::block_comment("%{ x %}", "<config></config>")]
#[case::brace_in_line_comment("* note {", "<config></config>")]
#[case::braces_in_block_comment("%{ { a = 1 } %}", "<config></config>")]
#[case::global(
    "global name = \"value\";",
    r#"<config><global name="name">"value"</global></config>"#
)]
#[case::global_value_trimmed(
    "global   port   =    8080   ;",
    r#"<config><global name="port">8080</global></config>"#
)]
#[case::array(
    "#(1, 2, 3)",
    "<config><array><value>1</value><value>2</value><value>3</value></array></config>"
)]
#[case::empty_array("#()", "<config><array><value></value></array></config>")]
#[case::undeclared_reference(
    "?[missing]",
    r#"<config><constant_eval name="missing">undefined</constant_eval></config>"#
)]
#[case::empty_dict("{ }", "<config><dict></dict></config>")]
#[case::escaped_text(
    "global expr = a < b & c;",
    r#"<config><global name="expr">a &lt; b &amp; c</global></config>"#
)]
fn translates_to_xml(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(translate(source).unwrap(), expected);
}

#[test]
fn test_arrays_come_before_globals() {
    let source = "%{ service settings %}\nglobal port = 8080;\n#(alpha, beta)\n?[port]";
    insta::assert_snapshot!(
        translate(source).unwrap(),
        @r#"<config><array><value>alpha</value><value>beta</value></array><global name="port">8080</global><constant_eval name="port">8080</constant_eval></config>"#
    );
}

#[test]
fn test_comment_between_dict_braces() {
    let source = "{\n  * closing } later\n}";
    assert_eq!(translate(source).unwrap(), "<config><dict></dict></config>");
    assert_eq!(
        translate_in_source_order(source),
        "<config><dict></dict></config>"
    );
}

#[test]
fn test_forward_reference_resolves_in_priority_order() {
    // Every global is lexed before any reference
    insta::assert_snapshot!(
        translate("?[x]\nglobal x = 1;").unwrap(),
        @r#"<config><global name="x">1</global><constant_eval name="x">1</constant_eval></config>"#
    );
}

#[test]
fn test_dict_body_lost_in_priority_order() {
    let source = "{\n  host = localhost\n  port = 80\n}";
    assert_eq!(translate(source).unwrap(), "<config><dict></dict></config>");
}

#[test]
fn test_dict_body_kept_in_source_order() {
    let source = "{\n  host = localhost\n  port = 80\n}";
    insta::assert_snapshot!(
        translate_in_source_order(source),
        @r#"<config><dict><item key="host">localhost</item><item key="port">80</item></dict></config>"#
    );
}

#[test]
fn test_single_line_dict_keeps_one_greedy_pair() {
    // The pair runs to the end of the line, closing brace included
    let source = "{ a = 1 b = 2 }";
    assert_eq!(translate(source).unwrap(), "<config><dict></dict></config>");
    insta::assert_snapshot!(
        translate_in_source_order(source),
        @r#"<config><dict><item key="a">1 b = 2 }</item></dict></config>"#
    );
}

#[test]
fn test_forward_reference_unresolved_in_source_order() {
    insta::assert_snapshot!(
        translate_in_source_order("?[x]\nglobal x = 1;"),
        @r#"<config><constant_eval name="x">undefined</constant_eval><global name="x">1</global></config>"#
    );
}

#[test]
fn test_commented_out_array() {
    let source = "%{ #(1) %}\n#(2)";
    assert_eq!(
        translate(source).unwrap(),
        "<config><array><value>1</value></array><array><value>2</value></array></config>"
    );
    assert_eq!(
        translate_in_source_order(source),
        "<config><array><value>2</value></array></config>"
    );
}

#[test]
fn test_unterminated_dict_reports_position() {
    let err = translate("global a = 1;\n\n  {\n  b = 2").unwrap_err();
    assert_eq!(
        err,
        TranslateError::Parse(ParseError::UnterminatedDict {
            line: 3,
            offset: 17
        })
    );
    assert_eq!(
        err.to_string(),
        "unterminated dict: '{' at line 3 (byte 17) has no matching '}'"
    );
}

#[test]
fn test_redeclared_global() {
    let doc = translate_document("global x = 1;\nglobal x = 2;\n?[x]").unwrap();
    assert_eq!(
        doc.nodes,
        vec![
            Node::global("x", "1"),
            Node::global("x", "2"),
            Node::constant_eval("x", Some("2".to_string())),
        ]
    );
}

#[test]
fn test_multiline_global_value() {
    let doc = translate_document("global motd = hello\n  world;").unwrap();
    assert_eq!(doc.nodes, vec![Node::global("motd", "hello\n  world")]);
}

#[test]
fn test_pretty_rendering() {
    let doc = translate_document("global name = x;\n#(a, b)").unwrap();
    let xml = serialize_document_with(
        &doc,
        TagOptions {
            indent: 2,
            declaration: true,
        },
    );
    let expected = [
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "<config>",
        "  <array>",
        "    <value>a</value>",
        "    <value>b</value>",
        "  </array>",
        r#"  <global name="name">x</global>"#,
        "</config>",
    ]
    .join("\n");
    assert_eq!(xml, expected);
}
