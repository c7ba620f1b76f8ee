//! Built-in helper catalogue
//!
//! | name           | arity | missing argument       |
//! |----------------|-------|------------------------|
//! | `eq`, `ne`     | 2     | compared as a value    |
//! | `match`        | 2     | `false`                |
//! | `replaceAll`   | 3     | first argument         |
//! | case helpers   | 1     | first argument         |
//! | `trim`         | 1     | first argument         |
//! | `removePrefix` | 2     | first argument         |
//! | `removeSuffix` | 2     | first argument         |
//!
//! The names are referenced verbatim from existing templates and must not
//! change. With `legacy_aliases` enabled each helper is also available with
//! a leading underscore (`_snakeCase`), backed by the same function.

use crate::config::{HelperConfig, TypePolicy};
use crate::error::{Error, Result};
use crate::guard::{any_missing, is_missing};
use crate::helpers::HelperRegistry;
use crate::transform;
use serde_json::Value;
use std::borrow::Cow;

/// Prefix of the legacy helper names
pub const LEGACY_PREFIX: &str = "_";

/// Canonical names of every built-in helper
pub const BUILTIN_NAMES: [&str; 14] = [
    "eq",
    "ne",
    "match",
    "replaceAll",
    "snakeCase",
    "camelCase",
    "pascalCase",
    "upperFirst",
    "lowerFirst",
    "uppercase",
    "lowercase",
    "trim",
    "removePrefix",
    "removeSuffix",
];

type UnaryTransform = fn(&str) -> String;
type BinaryTransform = fn(&str, &str) -> String;

pub(crate) fn register_builtins(registry: &mut HelperRegistry, config: &HelperConfig) {
    register_catalogue(registry, "", config.type_policy);
    if config.legacy_aliases {
        register_catalogue(registry, LEGACY_PREFIX, config.type_policy);
    }
}

fn register_catalogue(registry: &mut HelperRegistry, prefix: &str, policy: TypePolicy) {
    let name = |base: &str| format!("{}{}", prefix, base);

    registry.register_fn(&name("eq"), 2, "Strict equality of two values", |args, _| {
        Ok(Value::Bool(args[0] == args[1]))
    });

    registry.register_fn(&name("ne"), 2, "Strict inequality of two values", |args, _| {
        Ok(Value::Bool(args[0] != args[1]))
    });

    registry.register_fn(
        &name("match"),
        2,
        "Test whether a regular expression matches anywhere in a string",
        move |args, _| {
            if any_missing(args) {
                return Ok(Value::Bool(false));
            }
            let pattern = text("match", policy, &args[0])?;
            let target = text("match", policy, &args[1])?;
            transform::is_match(&pattern, &target)
                .map(Value::Bool)
                .map_err(|e| Error::invalid_pattern("match", &*pattern, e))
        },
    );

    registry.register_fn(
        &name("replaceAll"),
        3,
        "Replace every literal occurrence of a substring",
        move |args, _| {
            if any_missing(args) {
                return Ok(args[0].clone());
            }
            let target = text("replaceAll", policy, &args[0])?;
            let old = text("replaceAll", policy, &args[1])?;
            let new = text("replaceAll", policy, &args[2])?;
            Ok(Value::String(transform::replace_all(&target, &old, &new)))
        },
    );

    let unary: [(&'static str, &str, UnaryTransform); 8] = [
        (
            "snakeCase",
            "Convert userName to user_name",
            transform::snake_case,
        ),
        (
            "camelCase",
            "Convert user_name to userName",
            transform::camel_case,
        ),
        (
            "pascalCase",
            "Convert user_name to UserName",
            transform::pascal_case,
        ),
        (
            "upperFirst",
            "Uppercase the first character",
            transform::upper_first,
        ),
        (
            "lowerFirst",
            "Lowercase the first character",
            transform::lower_first,
        ),
        (
            "uppercase",
            "Uppercase every character",
            transform::uppercase,
        ),
        (
            "lowercase",
            "Lowercase every character",
            transform::lowercase,
        ),
        (
            "trim",
            "Remove leading and trailing whitespace",
            transform::trim,
        ),
    ];

    for (helper, description, apply) in unary {
        registry.register_fn(&name(helper), 1, description, move |args, _| {
            if is_missing(&args[0]) {
                return Ok(args[0].clone());
            }
            let input = text(helper, policy, &args[0])?;
            Ok(Value::String(apply(&input)))
        });
    }

    let binary: [(&'static str, &str, BinaryTransform); 2] = [
        (
            "removePrefix",
            "Remove one leading occurrence of a prefix",
            transform::remove_prefix,
        ),
        (
            "removeSuffix",
            "Remove one trailing occurrence of a suffix",
            transform::remove_suffix,
        ),
    ];

    for (helper, description, apply) in binary {
        registry.register_fn(&name(helper), 2, description, move |args, _| {
            if any_missing(args) {
                return Ok(args[0].clone());
            }
            let input = text(helper, policy, &args[0])?;
            let affix = text(helper, policy, &args[1])?;
            Ok(Value::String(apply(&input, &affix)))
        });
    }
}

/// Read a present argument as a string according to `policy`
fn text<'a>(helper: &str, policy: TypePolicy, value: &'a Value) -> Result<Cow<'a, str>> {
    match (value, policy) {
        (Value::String(s), _) => Ok(Cow::Borrowed(s.as_str())),
        (Value::Number(n), TypePolicy::Lenient) => Ok(Cow::Owned(n.to_string())),
        (Value::Bool(b), TypePolicy::Lenient) => Ok(Cow::Owned(b.to_string())),
        (other, _) => Err(Error::type_mismatch(helper, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(registry: &HelperRegistry, name: &str, args: &[Value]) -> Value {
        registry.call(name, args, None).unwrap()
    }

    #[test]
    fn test_catalogue_is_complete() {
        let registry = HelperRegistry::with_config(&HelperConfig {
            legacy_aliases: false,
            ..Default::default()
        });
        assert_eq!(registry.count(), BUILTIN_NAMES.len());
        for name in BUILTIN_NAMES {
            assert!(registry.exists(name), "missing helper {}", name);
        }
    }

    #[test]
    fn test_catalogue_arities() {
        let registry = HelperRegistry::new();
        let expected = [
            ("eq", 2),
            ("ne", 2),
            ("match", 2),
            ("replaceAll", 3),
            ("snakeCase", 1),
            ("trim", 1),
            ("removePrefix", 2),
            ("removeSuffix", 2),
        ];
        for (name, arity) in expected {
            assert_eq!(registry.describe(name).unwrap().0, arity, "{}", name);
        }
    }

    #[test]
    fn test_legacy_aliases() {
        let registry = HelperRegistry::new();
        assert_eq!(registry.count(), BUILTIN_NAMES.len() * 2);
        assert_eq!(
            call(&registry, "_snakeCase", &[json!("userName")]),
            json!("user_name")
        );
        assert_eq!(call(&registry, "_eq", &[json!(1), json!(1)]), json!(true));
    }

    #[test]
    fn test_scenarios() {
        let registry = HelperRegistry::new();
        assert_eq!(
            call(&registry, "snakeCase", &[json!("userName")]),
            json!("user_name")
        );
        assert_eq!(
            call(&registry, "camelCase", &[json!("user_name")]),
            json!("userName")
        );
        assert_eq!(
            call(&registry, "pascalCase", &[json!("user_name")]),
            json!("UserName")
        );
        assert_eq!(
            call(&registry, "removePrefix", &[json!("getUserName"), json!("get")]),
            json!("UserName")
        );
        assert_eq!(
            call(&registry, "replaceAll", &[json!("a-b-a"), json!("a"), json!("x")]),
            json!("x-b-x")
        );
        assert_eq!(
            call(&registry, "match", &[json!("^[A-Z]+$"), json!("ABC")]),
            json!(true)
        );
        assert_eq!(
            call(&registry, "match", &[json!("^[A-Z]+$"), json!("abc")]),
            json!(false)
        );
    }

    #[test]
    fn test_missing_argument_fallbacks() {
        let registry = HelperRegistry::new();
        assert_eq!(call(&registry, "snakeCase", &[Value::Null]), Value::Null);
        assert_eq!(call(&registry, "snakeCase", &[]), Value::Null);
        assert_eq!(call(&registry, "match", &[Value::Null, json!("x")]), json!(false));
        assert_eq!(call(&registry, "match", &[json!("x")]), json!(false));
        assert_eq!(
            call(&registry, "replaceAll", &[Value::Null, json!("a"), json!("b")]),
            Value::Null
        );
        assert_eq!(
            call(&registry, "replaceAll", &[json!("aaa"), Value::Null, json!("b")]),
            json!("aaa")
        );
        assert_eq!(
            call(&registry, "removePrefix", &[json!("getName"), Value::Null]),
            json!("getName")
        );
        assert_eq!(
            call(&registry, "removeSuffix", &[Value::Null, json!("Dto")]),
            Value::Null
        );
    }

    #[test]
    fn test_equality_has_no_null_guard() {
        let registry = HelperRegistry::new();
        assert_eq!(call(&registry, "eq", &[Value::Null, Value::Null]), json!(true));
        assert_eq!(call(&registry, "eq", &[Value::Null, json!("")]), json!(false));
        assert_eq!(call(&registry, "ne", &[Value::Null, json!("x")]), json!(true));
        assert_eq!(call(&registry, "eq", &[json!("1"), json!(1)]), json!(false));
        assert_eq!(
            call(&registry, "eq", &[json!({"a": [1]}), json!({"a": [1]})]),
            json!(true)
        );
    }

    #[test]
    fn test_strict_type_mismatch() {
        let registry = HelperRegistry::new();
        let err = registry.call("snakeCase", &[json!(42)], None).unwrap_err();
        match err {
            Error::TypeMismatch { helper, value } => {
                assert_eq!(helper, "snakeCase");
                assert_eq!(value, "42");
            }
            other => panic!("unexpected error: {}", other),
        }

        let err = registry
            .call("removePrefix", &[json!("getId"), json!(true)], None)
            .unwrap_err();
        assert_eq!(err.helper(), Some("removePrefix"));
    }

    #[test]
    fn test_lenient_type_policy() {
        let registry = HelperRegistry::with_config(&HelperConfig {
            type_policy: TypePolicy::Lenient,
            ..Default::default()
        });
        assert_eq!(call(&registry, "uppercase", &[json!(true)]), json!("TRUE"));
        assert_eq!(
            call(&registry, "replaceAll", &[json!(1001), json!("0"), json!("")]),
            json!("11")
        );
        assert!(registry.call("trim", &[json!(["a"])], None).is_err());
        assert!(registry.call("trim", &[json!({"a": 1})], None).is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        let registry = HelperRegistry::new();
        let err = registry
            .call("match", &[json!("(unclosed"), json!("x")], None)
            .unwrap_err();
        match err {
            Error::InvalidPattern { helper, pattern, .. } => {
                assert_eq!(helper, "match");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_trim_helper_strips_byte_order_mark() {
        let registry = HelperRegistry::new();
        assert_eq!(call(&registry, "trim", &[json!("\u{feff}ab ")]), json!("ab"));
    }

    #[test]
    fn test_replace_all_is_not_regex() {
        let registry = HelperRegistry::new();
        assert_eq!(
            call(&registry, "replaceAll", &[json!("a.b(c"), json!("("), json!("_")]),
            json!("a.b_c")
        );
    }
}
