//! JSX-style template AST node types.
//!
//! Lumen never parses source text. A host builds these nodes in memory, or
//! hands them over as JSON (every node is `Serialize`/`Deserialize`). The
//! tree is owned by the host and treated as read-only by the lint engine.

use lumen_carton::String;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Source position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// Byte offset from start of file
    pub offset: u32,
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Source location span [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

impl SourceLocation {
    /// Stub location for generated nodes
    pub const STUB: Self = Self {
        start: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
    };

    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Span on a single line, from byte offsets (line 1, columns follow offsets)
    pub const fn from_offsets(start: u32, end: u32) -> Self {
        Self {
            start: Position::new(start, 1, start + 1),
            end: Position::new(end, 1, end + 1),
        }
    }
}

// ============================================================================
// Root
// ============================================================================

/// Root AST node: one linted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    #[serde(default)]
    pub children: Vec<ChildNode>,
    /// Original source text, used only for rendering code frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<std::string::String>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl RootNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<std::string::String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<ChildNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

// ============================================================================
// Children
// ============================================================================

/// All child node types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChildNode {
    Text(TextNode),
    ExpressionContainer(ExpressionContainerNode),
    Element(Box<ElementNode>),
    Fragment(FragmentNode),
    Spread(SpreadChildNode),
}

impl ChildNode {
    /// Literal text child
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(TextNode::new(content, SourceLocation::STUB))
    }

    /// `{expression}` child
    pub fn expression(expression: Expression) -> Self {
        Self::ExpressionContainer(ExpressionContainerNode {
            expression,
            loc: SourceLocation::STUB,
        })
    }

    /// `<>...</>` child
    pub fn fragment(children: impl IntoIterator<Item = ChildNode>) -> Self {
        Self::Fragment(FragmentNode {
            children: children.into_iter().collect(),
            loc: SourceLocation::STUB,
        })
    }

    /// `{...expression}` child
    pub fn spread(expression: Expression) -> Self {
        Self::Spread(SpreadChildNode {
            expression,
            loc: SourceLocation::STUB,
        })
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Text(n) => &n.loc,
            Self::ExpressionContainer(n) => &n.loc,
            Self::Element(n) => &n.loc,
            Self::Fragment(n) => &n.loc,
            Self::Spread(n) => &n.loc,
        }
    }
}

impl From<ElementNode> for ChildNode {
    fn from(element: ElementNode) -> Self {
        Self::Element(Box::new(element))
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: String,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl TextNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }
}

/// `{expression}` in child position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionContainerNode {
    pub expression: Expression,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// `<>...</>` fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentNode {
    #[serde(default)]
    pub children: Vec<ChildNode>,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// `{...expression}` in child position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadChildNode {
    pub expression: Expression,
    #[serde(default)]
    pub loc: SourceLocation,
}

// ============================================================================
// Elements
// ============================================================================

/// Element name as written in the opening tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementName {
    /// `a`, `h1`, `CustomLink`
    Identifier(String),
    /// `svg:path`
    Namespaced { namespace: String, name: String },
    /// `UI.Link`
    Member { parts: Vec<String> },
}

impl ElementName {
    /// Resolved tag string used for tag-family matching
    pub fn as_tag(&self) -> Cow<'_, str> {
        match self {
            Self::Identifier(name) => Cow::Borrowed(name.as_str()),
            Self::Namespaced { namespace, name } => Cow::Owned(format!("{namespace}:{name}")),
            Self::Member { parts } => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                Cow::Owned(parts.join("."))
            }
        }
    }
}

impl From<&str> for ElementName {
    fn from(name: &str) -> Self {
        Self::Identifier(String::from(name))
    }
}

impl From<String> for ElementName {
    fn from(name: String) -> Self {
        Self::Identifier(name)
    }
}

/// Element node. `loc` spans the opening tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub name: ElementName,
    #[serde(default)]
    pub props: Vec<PropNode>,
    #[serde(default)]
    pub children: Vec<ChildNode>,
    #[serde(default)]
    pub is_self_closing: bool,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl ElementNode {
    pub fn new(name: impl Into<ElementName>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            props: Vec::new(),
            children: Vec::new(),
            is_self_closing: false,
            loc,
        }
    }

    /// Resolved tag or component name
    #[inline]
    pub fn tag(&self) -> Cow<'_, str> {
        self.name.as_tag()
    }

    pub fn with_prop(mut self, prop: impl Into<PropNode>) -> Self {
        self.props.push(prop.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<ChildNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.is_self_closing = true;
        self
    }
}

/// Prop node (attribute or spread attribute)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PropNode {
    Attribute(AttributeNode),
    Spread(SpreadAttributeNode),
}

impl PropNode {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Attribute(n) => &n.loc,
            Self::Spread(n) => &n.loc,
        }
    }
}

impl From<AttributeNode> for PropNode {
    fn from(attr: AttributeNode) -> Self {
        Self::Attribute(attr)
    }
}

impl From<SpreadAttributeNode> for PropNode {
    fn from(spread: SpreadAttributeNode) -> Self {
        Self::Spread(spread)
    }
}

/// Attribute node. `value: None` is the valueless form (`<div hidden>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeNode {
    pub name: String,
    #[serde(default)]
    pub value: Option<AttributeValue>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl AttributeNode {
    /// Valueless attribute
    pub fn new(name: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            value: None,
            loc,
        }
    }

    /// `name="value"`
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(AttributeValue::Literal {
                value: LiteralValue::String(value.into()),
            }),
            loc: SourceLocation::STUB,
        }
    }

    /// `name={expression}`
    pub fn expression(name: impl Into<String>, expression: Expression) -> Self {
        Self {
            name: name.into(),
            value: Some(AttributeValue::Expression { expression }),
            loc: SourceLocation::STUB,
        }
    }
}

/// Attribute value as written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AttributeValue {
    /// Quoted value
    Literal { value: LiteralValue },
    /// Braced `{...}` value
    Expression { expression: Expression },
}

/// `{...expression}` in attribute position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadAttributeNode {
    pub argument: Expression,
    /// Statically known property names of the spread object, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl SpreadAttributeNode {
    pub fn new(argument: Expression) -> Self {
        Self {
            argument,
            keys: None,
            loc: SourceLocation::STUB,
        }
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// Contents of a `{...}` container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expression {
    /// Statically known value
    Literal { value: LiteralValue },
    /// `{}` or `{/* comment */}`
    Empty,
    /// Any expression whose value is only known at runtime
    Opaque { content: String },
}

impl Expression {
    pub fn literal(value: LiteralValue) -> Self {
        Self::Literal { value }
    }

    pub fn opaque(content: impl Into<String>) -> Self {
        Self::Opaque {
            content: content.into(),
        }
    }
}

/// Statically known value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
    /// Object literal with static keys and values, e.g. `{{ display: "none" }}`
    Object(Vec<ObjectProperty>),
}

impl LiteralValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// The string payload, if this is a string literal
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// `key: value` entry of an object literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub key: String,
    pub value: LiteralValue,
}

impl ObjectProperty {
    pub fn new(key: impl Into<String>, value: LiteralValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
