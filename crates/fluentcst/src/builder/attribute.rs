//! Dotted paths such as `data.items[0].name` become nested attribute and
//! subscript expressions.

use tracing::trace;

use crate::ast::Expr;
use crate::builder::{Dict, FluentExpr};
use crate::error::{Error, Result};
use crate::value::{resolve, Value};

/// One segment of a dotted path: a name and the subscripts that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub name: String,
    pub indices: Vec<String>,
}

impl PathSegment {
    fn apply_indices(&self, mut expr: Expr) -> Expr {
        for index in &self.indices {
            expr = Expr::subscript(expr, resolve_index(index));
        }
        expr
    }
}

/// Split `path` on top-level dots. Dots and quotes inside brackets do not split.
pub fn tokenize_path(path: &str) -> Result<Vec<PathSegment>> {
    let mut raw = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, ch) in path.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') if depth > 0 => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => {
                if depth == 0 {
                    return Err(Error::invalid_path(path, "unbalanced `]`", i, 1));
                }
                depth -= 1;
            }
            (None, '.') if depth == 0 => {
                raw.push((start, &path[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth > 0 || quote.is_some() {
        return Err(Error::invalid_path(
            path,
            "unclosed subscript",
            start,
            path.len() - start,
        ));
    }
    raw.push((start, &path[start..]));

    let segments = raw
        .into_iter()
        .map(|(offset, text)| parse_segment(path, text, offset))
        .collect::<Result<Vec<_>>>()?;
    trace!(path, segments = segments.len(), "tokenized path");
    Ok(segments)
}

fn parse_segment(path: &str, text: &str, offset: usize) -> Result<PathSegment> {
    let (name, mut rest) = match text.find('[') {
        Some(i) => (&text[..i], &text[i..]),
        None => (text, ""),
    };
    if name.is_empty() {
        return Err(Error::invalid_path(path, "empty segment", offset, text.len()));
    }

    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner_offset = offset + text.len() - rest.len();
        let Some(inner) = rest.strip_prefix('[') else {
            return Err(Error::invalid_path(
                path,
                "unexpected text after subscript",
                inner_offset,
                rest.len(),
            ));
        };
        let close = closing_bracket(inner).ok_or_else(|| {
            Error::invalid_path(path, "unclosed subscript", inner_offset, rest.len())
        })?;
        let index = inner[..close].trim();
        if index.is_empty() {
            return Err(Error::invalid_path(path, "empty subscript", inner_offset, close + 2));
        }
        if is_integer_text(index) && index.parse::<i64>().is_err() {
            return Err(Error::invalid_path(
                path,
                "integer subscript out of range",
                inner_offset,
                close + 2,
            ));
        }
        indices.push(index.to_string());
        rest = &inner[close + 1..];
    }

    Ok(PathSegment {
        name: name.to_string(),
        indices,
    })
}

fn closing_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, ch) in text.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') if depth == 0 => return Some(i),
            (None, ']') => depth -= 1,
            _ => {}
        }
    }
    None
}

/// An optional `-` followed by ASCII digits.
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric index text is an integer literal, quoted text loses its quotes,
/// everything else goes through the value resolver as a string.
fn resolve_index(text: &str) -> Expr {
    if is_integer_text(text) {
        if let Ok(i) = text.parse::<i64>() {
            return Expr::int(i);
        }
    }
    let unquoted = match text.as_bytes() {
        [first @ (b'"' | b'\''), .., last] if first == last => &text[1..text.len() - 1],
        _ => text,
    };
    resolve(Value::from(unquoted))
}

/// Fold the segments outward from the first one, each later segment wrapping
/// the accumulated expression as its value.
fn build_path(segments: &[PathSegment]) -> Option<Expr> {
    let (head, rest) = segments.split_first()?;
    let init = head.apply_indices(Expr::name(head.name.as_str()));
    Some(rest.iter().fold(init, |acc, segment| {
        segment.apply_indices(Expr::attribute(acc, segment.name.as_str()))
    }))
}

/// A bare name stays a name, a dotted path becomes an attribute chain.
pub(crate) fn name_or_attribute(path: &str) -> Result<Expr> {
    let segments = tokenize_path(path)?;
    build_path(&segments).ok_or_else(|| Error::invalid_path(path, "empty path", 0, 0))
}

/// Dotted module path for `from ... import`, subscripts are not allowed.
pub(crate) fn module_path(path: &str) -> Result<Expr> {
    let segments = tokenize_path(path)?;
    if segments.iter().any(|segment| !segment.indices.is_empty()) {
        return Err(Error::invalid_path(
            path,
            "module paths cannot be subscripted",
            0,
            path.len(),
        ));
    }
    build_path(&segments).ok_or_else(|| Error::invalid_path(path, "empty path", 0, 0))
}

/// ```
/// use fluentcst::{Attribute, FluentNode};
///
/// let code = Attribute::new("data.model.field")?.to_code()?;
/// assert_eq!(code, "data.model.field");
/// # Ok::<(), fluentcst::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    path: String,
    expr: Expr,
}

impl Attribute {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let segments = tokenize_path(&path)?;
        if segments.len() < 2 {
            return Err(Error::invalid_path(
                path.as_str(),
                "attribute path must contain at least one dot",
                0,
                path.len(),
            ));
        }
        let expr = build_path(&segments)
            .ok_or_else(|| Error::invalid_path(path.as_str(), "empty path", 0, 0))?;
        Ok(Self { path, expr })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `path | {mapping}`, the merge-with-defaults pattern.
    pub fn bitor<K, V>(mut self, mapping: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let defaults = Dict::from_mapping(mapping);
        self.expr = Expr::bin_or(self.expr, defaults.to_expr());
        self
    }
}

impl FluentExpr for Attribute {
    fn to_expr(&self) -> Expr {
        self.expr.clone()
    }
}
