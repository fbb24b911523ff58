//! Structured GraphQL documents.
//!
//! Operations are assembled as values and rendered in one place, so every
//! string literal goes through the same escaper regardless of which field it
//! came from.

/// GraphQL input value literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    /// Build an input object, keeping field order as given.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::String(text) => out.push_str(&string_literal(text)),
            Value::List(items) => {
                out.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    item.render_into(out);
                }
                out.push(']');
            }
            Value::Object(fields) => {
                out.push('{');
                for (idx, (name, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        out.push(',');
                    }
                    out.push(' ');
                    out.push_str(name);
                    out.push_str(": ");
                    value.render_into(out);
                }
                if !fields.is_empty() {
                    out.push(' ');
                }
                out.push('}');
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

/// Quote and escape `text` as a GraphQL string value.
///
/// JSON string escapes are a subset of GraphQL's, so the JSON serializer
/// yields a valid literal for any input.
pub fn string_literal(text: &str) -> String {
    serde_json::Value::String(text.to_owned()).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    fn keyword(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// A single-root-field operation: `query { field(args) { selection } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    field: String,
    arguments: Vec<(String, Value)>,
    selection: Vec<String>,
}

impl Operation {
    pub fn query(field: impl Into<String>) -> Self {
        Self::new(OperationKind::Query, field)
    }

    pub fn mutation(field: impl Into<String>) -> Self {
        Self::new(OperationKind::Mutation, field)
    }

    fn new(kind: OperationKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            arguments: Vec::new(),
            selection: Vec::new(),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push((name.into(), value));
        self
    }

    pub fn select<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.selection.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(self.kind.keyword());
        out.push_str(" {\n  ");
        out.push_str(&self.field);
        if !self.arguments.is_empty() {
            out.push('(');
            for (idx, (name, value)) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                out.push_str(name);
                out.push_str(": ");
                out.push_str(&value.render());
            }
            out.push(')');
        }
        out.push_str(" {\n");
        for field in &self.selection {
            out.push_str("    ");
            out.push_str(field);
            out.push('\n');
        }
        out.push_str("  }\n}\n");
        out
    }
}
