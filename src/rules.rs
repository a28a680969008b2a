//! Built-in rules: values created inline in a render pass get a new identity
//! every time and defeat memoized children.

use crate::ast::{FunctionKind, MemberProperty, NodeId, NodeKind, SyntaxTree};
use crate::constructor::matches_constructor;
use crate::rule::{create_rule, RuleDefinition};

pub const NO_NEW_OBJECT_AS_PROP: &str = "jsx-no-new-object-as-prop";
pub const NO_NEW_ARRAY_AS_PROP: &str = "jsx-no-new-array-as-prop";
pub const NO_NEW_FUNCTION_AS_PROP: &str = "jsx-no-new-function-as-prop";
pub const NO_JSX_AS_PROP: &str = "jsx-no-jsx-as-prop";

pub const BUILTIN_RULES: [&str; 4] = [
    NO_NEW_OBJECT_AS_PROP,
    NO_NEW_ARRAY_AS_PROP,
    NO_NEW_FUNCTION_AS_PROP,
    NO_JSX_AS_PROP,
];

pub fn builtin(name: &str) -> Option<RuleDefinition> {
    match name {
        NO_NEW_OBJECT_AS_PROP => Some(no_new_object_as_prop()),
        NO_NEW_ARRAY_AS_PROP => Some(no_new_array_as_prop()),
        NO_NEW_FUNCTION_AS_PROP => Some(no_new_function_as_prop()),
        NO_JSX_AS_PROP => Some(no_jsx_as_prop()),
        _ => None,
    }
}

pub fn no_new_object_as_prop() -> RuleDefinition {
    create_rule(
        "Prevent {...} as JSX prop value",
        "JSX attribute values should not contain objects created in the same scope",
        is_new_object,
    )
}

pub fn no_new_array_as_prop() -> RuleDefinition {
    create_rule(
        "Prevent [...] as JSX prop value",
        "JSX attribute values should not contain arrays created in the same scope",
        is_new_array,
    )
}

pub fn no_new_function_as_prop() -> RuleDefinition {
    create_rule(
        "Prevent function as JSX prop value",
        "JSX attribute values should not contain functions created in the same scope",
        is_new_function,
    )
}

pub fn no_jsx_as_prop() -> RuleDefinition {
    create_rule(
        "Prevent JSX as JSX prop value",
        "JSX attribute values should not contain other JSX elements created in the same scope",
        is_jsx,
    )
}

fn is_new_object(tree: &SyntaxTree, node: NodeId) -> bool {
    matches!(tree.kind(node), NodeKind::Object { .. }) || matches_constructor(tree, node, "Object")
}

fn is_new_array(tree: &SyntaxTree, node: NodeId) -> bool {
    matches!(tree.kind(node), NodeKind::Array { .. }) || matches_constructor(tree, node, "Array")
}

fn is_new_function(tree: &SyntaxTree, node: NodeId) -> bool {
    matches!(
        tree.kind(node),
        NodeKind::Function {
            kind: FunctionKind::Expression | FunctionKind::Arrow,
            ..
        }
    ) || matches_constructor(tree, node, "Function")
        || is_bind_call(tree, node)
}

/// `handler.bind(this)`
fn is_bind_call(tree: &SyntaxTree, node: NodeId) -> bool {
    let NodeKind::Call { callee, .. } = tree.kind(node) else {
        return false;
    };
    matches!(
        tree.kind(*callee),
        NodeKind::Member {
            property: MemberProperty::Static(name),
            ..
        } if name == "bind"
    )
}

fn is_jsx(tree: &SyntaxTree, node: NodeId) -> bool {
    matches!(tree.kind(node), NodeKind::JsxElement { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleOptions;
    use crate::linter::Linter;

    fn lint(rule: &str, source: &str) -> Vec<String> {
        let linter = Linter::new().with_rule(rule, builtin(rule).unwrap(), RuleOptions::default());
        let diagnostics = linter.lint_source("t.jsx", source).unwrap();
        diagnostics
            .iter()
            .map(|d| source[d.start as usize..d.end as usize].to_string())
            .collect()
    }

    #[test]
    fn test_builtin_lookup() {
        for name in BUILTIN_RULES {
            assert!(builtin(name).is_some(), "{name} should be registered");
        }
        assert!(builtin("jsx-no-bind").is_none());
    }

    #[test]
    fn test_object_rule() {
        let source = r#"
            const a = {};
            const b = Object.create(null);
            <Item x={a} y={new Object()} z={b} w={Object()} />;
        "#;
        assert_eq!(lint(NO_NEW_OBJECT_AS_PROP, source), vec!["{}", "new Object()", "Object()"]);
    }

    #[test]
    fn test_array_rule() {
        let source = "let list = props.items || []; <List items={list} other={Array(3)} />;";
        assert_eq!(lint(NO_NEW_ARRAY_AS_PROP, source), vec!["[]", "Array(3)"]);
    }

    #[test]
    fn test_function_rule() {
        let source = r#"
            function handler() {}
            <Button
                a={() => 1}
                b={function () {}}
                c={handler.bind(this)}
                d={new Function("return 1")}
                e={handler}
            />;
        "#;
        assert_eq!(
            lint(NO_NEW_FUNCTION_AS_PROP, source),
            vec![
                "() => 1",
                "function () {}",
                "handler.bind(this)",
                "new Function(\"return 1\")",
            ]
        );
    }

    #[test]
    fn test_jsx_rule() {
        let source = "const icon = <Icon />; <Button icon={icon} label={<b>hi</b>} />;";
        assert_eq!(lint(NO_JSX_AS_PROP, source), vec!["<Icon />", "<b>hi</b>"]);
    }

    #[test]
    fn test_object_rule_follows_default_parameter() {
        let source = "function F(style = {}) { return <Box style={style} />; }";
        assert_eq!(lint(NO_NEW_OBJECT_AS_PROP, source), vec!["{}"]);
    }

    #[test]
    fn test_object_rule_checks_jsx_inside_default_parameter() {
        let source = "function F(icon = <Box style={{}} />) { return icon; }";
        assert_eq!(lint(NO_NEW_OBJECT_AS_PROP, source), vec!["{}"]);
    }

    #[test]
    fn test_object_rule_ignores_outer_variable_shadowed_by_rest() {
        let source = "const args = {}; function F(...args) { return <Box a={args} />; }";
        assert!(lint(NO_NEW_OBJECT_AS_PROP, source).is_empty());
    }

    #[test]
    fn test_object_rule_inside_namespace_and_dynamic_import() {
        let source = r#"
            namespace Ui { export const el = <Box style={{}} />; }
            import(pick(<Box style={[]} a={{}} />));
        "#;
        assert_eq!(lint(NO_NEW_OBJECT_AS_PROP, source), vec!["{}", "{}"]);
    }

    #[test]
    fn test_rule_meta() {
        let rule = no_new_object_as_prop();
        assert!(rule.meta.docs.recommended);
        assert_eq!(rule.meta.docs.description, "Prevent {...} as JSX prop value");
        assert!(rule.message().contains("objects created in the same scope"));
    }
}
