use std::fmt::Write;

use serde_json::Value;

pub struct JsEmitter {
    output: String,
    indent: usize,
}

impl JsEmitter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    /// Write a raw line at the current indentation.
    pub fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Write `{` and indent.
    pub fn open_block(&mut self, head: &str) {
        if head.is_empty() {
            self.write_line("{");
        } else {
            self.write_line(&format!("{} {{", head));
        }
        self.indent += 1;
    }

    /// Dedent and write `}`.
    pub fn close_block(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.write_line("}");
    }

    /// Write `// text` with the text encoded as a string literal so it can
    /// never end the comment early.
    pub fn write_comment_literal(&mut self, label: &str, text: &str) {
        self.write_line(&format!("// {} {}", label, string_literal(text)));
    }

    /// Write `callee(arg, arg, ...);`.
    pub fn write_call(&mut self, callee: &str, args: &[String]) {
        self.write_line(&format!("{}({});", callee, args.join(", ")));
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for JsEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a string as a double-quoted JS literal.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            // JSON allows these raw, older JS engines treat them as line breaks
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            // keeps `</script>` and `<!--` out of inlined output
            '<' => out.push_str("\\u003c"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Encode a parsed JSON value as a JS expression with the same structure.
pub fn value_literal(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => out.push_str(&string_literal(s)),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                // `__proto__` as a plain key would set the prototype instead
                if key == "__proto__" {
                    let _ = write!(out, "[{}]", string_literal(key));
                } else {
                    out.push_str(&string_literal(key));
                }
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_escapes() {
        assert_eq!(string_literal("a\"b"), r#""a\"b""#);
        assert_eq!(string_literal("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(string_literal("</script>"), r#""\u003c/script>""#);
        assert_eq!(string_literal("\u{2028}"), r#""\u2028""#);
        assert_eq!(string_literal("\u{1}"), r#""\u0001""#);
        assert_eq!(string_literal("héllo 👋"), "\"héllo 👋\"");
    }

    #[test]
    fn test_value_literal_is_valid_json_for_plain_data() {
        let value = json!({"greeting": "hi", "list": [1, 2.5, true, null], "nested": {"a": "b"}});
        let literal = value_literal(&value);
        assert_eq!(
            literal,
            r#"{"greeting":"hi","list":[1,2.5,true,null],"nested":{"a":"b"}}"#
        );
        let back: Value = serde_json::from_str(&literal).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_value_literal_preserves_key_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(value_literal(&value), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_proto_key_is_computed() {
        let value: Value = serde_json::from_str(r#"{"__proto__": {"x": 1}}"#).unwrap();
        assert_eq!(value_literal(&value), r#"{["__proto__"]:{"x":1}}"#);
    }

    #[test]
    fn test_emitter_blocks() {
        let mut emitter = JsEmitter::new();
        emitter.open_block("function f(a)");
        emitter.write_call("a.define", &[string_literal("x")]);
        emitter.close_block();
        assert_eq!(emitter.finish(), "function f(a) {\n  a.define(\"x\");\n}\n");
    }
}
