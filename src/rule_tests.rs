#[cfg(test)]
mod tests {
    use crate::ast::{NodeId, NodeKind, SyntaxTree};
    use crate::config::{NativeAllowList, RuleOptions, Settings};
    use crate::parse::{parse_source, SourceUnit};
    use crate::rule::{create_rule, RuleContext, RuleDefinition};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const RULE: &str = "no-call-as-prop";

    fn call_rule() -> RuleDefinition {
        create_rule(
            "Prevent call results as JSX prop value",
            "JSX attribute values should not contain call results",
            |tree: &SyntaxTree, node: NodeId| matches!(tree.kind(node), NodeKind::Call { .. }),
        )
    }

    fn attributes(unit: &SourceUnit) -> Vec<NodeId> {
        unit.tree
            .ids()
            .filter(|id| matches!(unit.tree.kind(*id), NodeKind::JsxAttribute { .. }))
            .collect()
    }

    /// Runs the call rule over every attribute and returns the reported text.
    fn check(source: &str, options: RuleOptions, settings: Settings) -> Vec<String> {
        let unit = parse_source("test.jsx", source).unwrap();
        let rule = call_rule();
        let mut ctx = RuleContext::new(RULE, &unit, &options, &settings);
        for attr in attributes(&unit) {
            rule.check_attribute(&mut ctx, attr);
        }
        ctx.into_diagnostics()
            .iter()
            .map(|d| unit.source[d.start as usize..d.end as usize].to_string())
            .collect()
    }

    fn check_default(source: &str) -> Vec<String> {
        check(source, RuleOptions::default(), Settings::default())
    }

    fn options(value: serde_json::Value) -> RuleOptions {
        RuleOptions::from_value(RULE, &value).unwrap()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // REPORTING
    // ═══════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_literal_value_is_not_reported() {
        assert!(check_default(r#"<input value={"5"} />;"#).is_empty());
    }

    #[test]
    fn test_report_anchored_at_terminal_candidate() {
        let source = "let x = foo();\n<input value={x} />;";
        let unit = parse_source("test.jsx", source).unwrap();
        let (options, settings) = (RuleOptions::default(), Settings::default());
        let rule = call_rule();
        let mut ctx = RuleContext::new(RULE, &unit, &options, &settings);

        let attr = attributes(&unit)[0];
        assert!(rule.check_attribute(&mut ctx, attr));

        let diagnostics = ctx.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(&source[d.start as usize..d.end as usize], "foo()");
        assert_eq!((d.line, d.column), (1, 9));
        assert_eq!(d.rule, RULE);
        assert_eq!(d.message, "JSX attribute values should not contain call results");
    }

    #[test]
    fn test_safe_operand_of_logical_is_skipped() {
        assert_eq!(
            check_default(r#"const a = "1"; <input value={a || b()} />;"#),
            vec!["b()"]
        );
    }

    #[test]
    fn test_each_candidate_reported_separately() {
        assert_eq!(
            check_default("<input value={c ? f() : g()} />;"),
            vec!["f()", "g()"]
        );
    }

    #[test]
    fn test_handler_returns_false_without_report() {
        let unit = parse_source("test.jsx", "<input value={props.value} />;").unwrap();
        let (options, settings) = (RuleOptions::default(), Settings::default());
        let rule = call_rule();
        let mut ctx = RuleContext::new(RULE, &unit, &options, &settings);
        assert!(!rule.check_attribute(&mut ctx, attributes(&unit)[0]));
        assert!(ctx.diagnostics().is_empty());
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // VALUE SHAPE
    // ═══════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_string_attribute_is_skipped() {
        assert!(check_default(r#"<input value="foo()" />;"#).is_empty());
    }

    #[test]
    fn test_valueless_attribute_is_skipped() {
        assert!(check_default("<input disabled />;").is_empty());
    }

    #[test]
    fn test_element_attribute_value_is_skipped() {
        let unit = parse_source("test.jsx", "<Slot value=<b /> />;").unwrap();
        let (options, settings) = (RuleOptions::default(), Settings::default());
        let rule = create_rule("any", "flagged", |_: &SyntaxTree, _: NodeId| true);
        let mut ctx = RuleContext::new(RULE, &unit, &options, &settings);
        for attr in attributes(&unit) {
            rule.check_attribute(&mut ctx, attr);
        }
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_spread_attribute_is_not_checked() {
        assert!(check_default("<input {...make()} />;").is_empty());
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // DIRECTIVE GATE
    // ═══════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_next_without_directive_skips_unit() {
        let source = "\"use server\";\n<input value={foo()} />;";
        assert!(check(source, options(json!({ "next": true })), Settings::default()).is_empty());
    }

    #[test]
    fn test_next_with_directive_checks_unit() {
        let source = "'use client';\n<input value={foo()} />;";
        assert_eq!(
            check(source, options(json!({ "next": true })), Settings::default()),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_directive_must_be_on_first_line() {
        let source = "import x from 'x';\n\"use client\";\n<input value={foo()} />;";
        assert!(check(source, options(json!({ "next": true })), Settings::default()).is_empty());
    }

    #[test]
    fn test_carriage_return_ends_first_line() {
        let source = "\"use server\";\r<input value={foo()} />; // use client";
        assert!(check(source, options(json!({ "next": true })), Settings::default()).is_empty());

        let client = "'use client';\r<input value={foo()} />;";
        assert_eq!(
            check(client, options(json!({ "next": true })), Settings::default()),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_next_from_settings() {
        let source = "<input value={foo()} />;";
        let settings = Settings { next: Some(true) };
        assert!(check(source, RuleOptions::default(), settings.clone()).is_empty());

        let client = "\"use client\"; <input value={foo()} />;";
        assert_eq!(check(client, RuleOptions::default(), settings), vec!["foo()"]);
    }

    #[test]
    fn test_next_option_overrides_settings() {
        let source = "<input value={foo()} />;";
        let settings = Settings { next: Some(true) };
        assert_eq!(
            check(source, options(json!({ "next": false })), settings),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_gate_ignored_when_next_disabled() {
        let source = "\"use server\";\n<input value={foo()} />;";
        assert_eq!(check_default(source), vec!["foo()"]);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // NATIVE ALLOW-LIST
    // ═══════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_allow_listed_native_element_is_exempt() {
        let opts = options(json!({ "nativeAllowList": ["input"] }));
        assert!(check("<input value={foo()} />;", opts.clone(), Settings::default()).is_empty());
        assert_eq!(
            check("<select value={foo()} />;", opts, Settings::default()),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_allow_list_is_case_insensitive() {
        let opts = options(json!({ "nativeAllowList": ["INPUT"] }));
        assert!(check("<input value={foo()} />;", opts, Settings::default()).is_empty());
    }

    #[test]
    fn test_component_is_never_exempt() {
        let opts = options(json!({ "nativeAllowList": ["input"] }));
        assert_eq!(
            check("<Input value={foo()} />;", opts, Settings::default()),
            vec!["foo()"]
        );

        let all = RuleOptions {
            native_allow_list: Some(NativeAllowList::all()),
            next: None,
        };
        assert_eq!(
            check("<Input value={foo()} />;", all, Settings::default()),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_all_exempts_every_native_element() {
        let opts = options(json!({ "nativeAllowList": "all" }));
        let source = "<div><input value={foo()} /><span title={bar()} /></div>;";
        assert!(check(source, opts, Settings::default()).is_empty());
    }

    #[test]
    fn test_member_and_namespaced_tags_are_not_exempt() {
        let opts = options(json!({ "nativeAllowList": "all" }));
        assert_eq!(
            check("<ui.input value={foo()} />;", opts.clone(), Settings::default()),
            vec!["foo()"]
        );
        assert_eq!(
            check("<svg:rect width={foo()} />;", opts, Settings::default()),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_allow_list_matches_tag_not_attribute() {
        let opts = options(json!({ "nativeAllowList": ["value"] }));
        assert_eq!(
            check("<input value={foo()} />;", opts, Settings::default()),
            vec!["foo()"]
        );
    }

    #[test]
    fn test_native_element_checked_without_allow_list() {
        assert_eq!(check_default("<input value={foo()} />;"), vec!["foo()"]);
    }
}
