//! End-to-end tests: config -> token -> button style tree -> CSS text.

use pretty_assertions::assert_eq;
use stylegen_core::compile::flatten;
use stylegen_core::{
    ButtonShape, ButtonSize, ButtonType, CompileOptions, Config, DesignToken, StyleRegistry,
    button_class_names, button_style, compile, use_button_style,
};

/// Default token with a line height that keeps padding math exact.
fn token() -> DesignToken {
    let mut config = Config::default();
    config.theme.line_height = 1.5;
    DesignToken::from_config(&config)
}

fn plain() -> CompileOptions {
    CompileOptions {
        hash_class: None,
        pretty: true,
    }
}

/// Slice of `css` from the rule starting with `start` up to the rule `end`.
fn section<'a>(css: &'a str, start: &str, end: &str) -> &'a str {
    let from = css
        .find(&format!("\n{}", start))
        .map(|i| i + 1)
        .unwrap_or_else(|| panic!("missing rule {start}"));
    let to = css[from..]
        .find(&format!("\n{}", end))
        .map(|i| from + i + 1)
        .unwrap_or_else(|| panic!("missing rule {end}"));
    &css[from..to]
}

#[test]
fn test_base_default_button_css() {
    let css = compile(&button_style("ant-btn", "anticon", &token()), &plain());

    let expected = "\
.ant-btn {
  position: relative;
  display: inline-block;
  font-weight: 400;
  white-space: nowrap;
  text-align: center;
  background-image: none;
  border: 1px solid transparent;
  cursor: pointer;
  transition: all 0.3s cubic-bezier(0.645, 0.045, 0.355, 1);
  user-select: none;
  touch-action: manipulation;
  line-height: 1.5;
  border-radius: 2px;
  background-color: #ffffff;
  color: rgba(0, 0, 0, 0.85);
  font-size: 14px;
  height: 32px;
  padding: 4.5px 15px;
  border-color: #d9d9d9;
  box-shadow: 0 2px 0 rgba(0, 0, 0, 0.015);
}
.ant-btn > span {
  display: inline-block;
}
.ant-btn > .anticon + span, .ant-btn > span + .anticon {
  margin-inline-start: 8px;
}
";
    assert_eq!(section(&css, ".ant-btn {", ".ant-btn-primary {"), expected);
}

#[test]
fn test_round_and_loading_css() {
    let css = compile(&button_style("ant-btn", "anticon", &token()), &plain());

    assert!(css.contains(
        ".ant-btn-round.ant-btn-sm, .ant-btn-round.ant-btn-sm.ant-btn-icon-only {\n  \
         border-radius: 24px;\n  padding-left: 12px;\n  padding-right: 12px;\n  width: auto;\n}\n"
    ));
    assert!(css.contains(
        ".ant-btn-round, .ant-btn-round.ant-btn-icon-only {\n  \
         border-radius: 32px;\n  padding-left: 16px;\n  padding-right: 16px;\n  width: auto;\n}\n"
    ));
    // The round wrapper itself has no declarations.
    assert!(!css.contains(".ant-btn-round {"));

    assert!(css.ends_with(".ant-btn-loading-icon > .anticon {\n  margin-inline-end: 8px;\n}\n"));
}

#[test]
fn test_size_rules_emit_small_base_large_in_order() {
    let rules = flatten(&button_style("ant-btn", "anticon", &token()));
    let pos = |sel: &str| rules.iter().position(|r| r.selector == sel).unwrap();

    assert!(pos(".ant-btn.ant-btn-sm") < pos(".ant-btn"));
    assert!(pos(".ant-btn") < pos(".ant-btn.ant-btn-lg"));
    assert!(pos(".ant-btn-icon-only.ant-btn-lg") < pos(".ant-btn-loading-icon > .anticon"));

    let large = &rules[pos(".ant-btn-primary.ant-btn-lg")];
    assert_eq!(large.get("height"), Some("40px"));
    assert_eq!(large.get("font-size"), Some("16px"));
    assert_eq!(large.get("padding"), Some("7px 15px"));

    let small = &rules[pos(".ant-btn.ant-btn-sm")];
    assert_eq!(small.get("padding"), Some("0.5px 7px"));

    let circle = &rules[pos(".ant-btn-circle")];
    assert_eq!(circle.get("padding-left"), Some("0"));
    assert_eq!(circle.get("border-radius"), Some("50%"));
}

#[test]
fn test_dark_config_flows_into_default_button() {
    let mut config = Config::default();
    config.theme.mode = "dark".to_string();
    let token = DesignToken::from_config(&config);

    let rules = flatten(&button_style("ant-btn", "anticon", &token));
    let base = rules.iter().find(|r| r.selector == ".ant-btn").unwrap();
    assert_eq!(base.get("background-color"), Some("#141414"));
    assert_eq!(base.get("color"), Some("rgba(255, 255, 255, 0.85)"));
    assert_eq!(base.get("border-color"), Some("#434343"));

    // Primary buttons keep the primary fill in either mode.
    let primary = rules.iter().find(|r| r.selector == ".ant-btn-primary").unwrap();
    assert_eq!(primary.get("background-color"), Some("#1890ff"));
}

#[test]
fn test_class_names_match_generated_selectors() {
    let token = token();
    let rules = flatten(&button_style("ant-btn", "anticon", &token));

    let classes = button_class_names(
        "ant-btn",
        ButtonType::Link,
        ButtonShape::Circle,
        ButtonSize::Small,
        false,
        false,
    );
    // Every compound selector built from these classes must exist.
    for class in ["ant-btn-link", "ant-btn-circle"] {
        assert!(classes.contains(&class.to_string()));
        let selector = format!(".{}.ant-btn-sm", class);
        assert!(
            rules.iter().any(|r| r.selector == selector),
            "missing {}",
            selector
        );
    }
}

#[test]
fn test_registry_output_is_hashed_and_cached() {
    let registry = StyleRegistry::new(true, true);
    let token = token();

    let first = use_button_style(&registry, "ant-btn", "anticon", &token);
    let second = use_button_style(&registry, "ant-btn", "anticon", &token);
    assert_eq!(first, second);
    assert_eq!(registry.len(), 1);

    let hash = first.hash_id.unwrap();
    assert!(first.css.contains(&format!(".ant-btn.{} {{\n", hash)));
    assert!(first.css.contains(&format!(".ant-btn.{} > span {{\n", hash)));
    assert!(
        first
            .css
            .contains(&format!(".ant-btn-loading-icon.{} > .anticon {{\n", hash))
    );
}

#[test]
fn test_custom_prefixes() {
    let css = compile(&button_style("btn", "icon", &token()), &plain());
    assert!(css.starts_with(".btn.btn-sm {\n"));
    assert!(css.contains(".btn > .icon + span, .btn > span + .icon {\n"));
    assert!(!css.contains("ant-btn"));
}
