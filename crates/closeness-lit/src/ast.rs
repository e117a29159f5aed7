// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric literal: `50`, `-0.5`, `1e3`
    Number(f64),
    /// Unquoted identifier: used for enum-like settings such as `fill: nonzero`
    Ident(String),
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the property key.
    pub line: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A named node in the document.
///
/// ```text
/// polygon {
///     fill: evenodd
///     vertex { x: 50  y: 0 }
///     vertex { x: 100 y: 50 }
///     vertex { x: 50  y: 100 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node name: a shape tag such as `"circle"`, or `"grid"`, or `"vertex"`.
    pub name: String,
    /// Properties inside the block (`key: value` items).
    pub props: Vec<Prop>,
    /// Nested nodes inside the block.
    pub children: Vec<Node>,
    /// 1-based line of the node name.
    pub line: usize,
    /// 1-based column of the node name.
    pub col: usize,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f64` if it is a `Number`.
    pub fn prop_f64(&self, key: &str) -> Option<f64> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is an `Ident`.
    pub fn prop_ident(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Iterate over child nodes with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// A parsed shape literal source: top-level nodes in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}
