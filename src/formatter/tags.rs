//! Tag specification parsing
//!
//! A tag specification is a tag name with optional CSS classes and an id
//! written in selector shorthand: `name[.class1][.class2...][#id]`.
//!
//! The string is split on `.`: the first piece is the tag name, the pieces in
//! between are classes, and the last piece is split on the first `#` into an
//! extra class and the id. A specification without any `.` is split on `#`
//! directly into name and id.
//!
//! Every further `#` starts another id word: `p.a#x#y` gets `id="x y"`.
//! Empty classes and empty id words are dropped.
//!
//! | spec | opening tag |
//! |---|---|
//! | `p` | `p` |
//! | `p.cls` | `p class="cls"` |
//! | `p#main` | `p id="main"` |
//! | `p.a.b#main` | `p id="main" class="a b"` |

use std::borrow::Cow;
use std::fmt;

/// A parsed tag specification borrowing from its source string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec<'a> {
    name: &'a str,
    classes: Vec<&'a str>,
    id: Option<Cow<'a, str>>,
}

impl<'a> TagSpec<'a> {
    /// Parse a specification. Never fails; unusual input yields unusual tags.
    pub fn parse(spec: &'a str) -> Self {
        let mut pieces = spec.split('.');
        // split always yields at least one piece
        let head = pieces.next().unwrap_or_default();
        let rest: Vec<&str> = pieces.collect();

        let Some((last, middle)) = rest.split_last() else {
            let (name, id) = split_id(head);
            return Self {
                name,
                classes: Vec::new(),
                id,
            };
        };

        let (extra_class, id) = split_id(last);
        let classes = middle
            .iter()
            .copied()
            .chain(std::iter::once(extra_class))
            .filter(|class| !class.is_empty())
            .collect();

        Self {
            name: head,
            classes,
            id,
        }
    }

    /// The bare tag name used for the closing tag
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn classes(&self) -> &[&'a str] {
        &self.classes
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// True when the specification carries neither classes nor an id
    pub fn is_bare(&self) -> bool {
        self.classes.is_empty() && self.id.is_none()
    }

    /// Contents of the opening tag: name, then `id`, then `class`
    pub fn opening(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", id)?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        Ok(())
    }
}

/// Split `piece` on `#` into the part before it and the id words after it.
/// A single id word stays borrowed; several are joined with spaces.
fn split_id(piece: &str) -> (&str, Option<Cow<'_, str>>) {
    let mut parts = piece.split('#');
    // split always yields at least one piece
    let before = parts.next().unwrap_or_default();
    let words: Vec<&str> = parts.filter(|word| !word.is_empty()).collect();

    let id = match words.as_slice() {
        [] => None,
        [single] => Some(Cow::Borrowed(*single)),
        several => Some(Cow::Owned(several.join(" "))),
    };
    (before, id)
}

/// Split a specification into `(opening tag with attributes, bare tag name)`
pub fn split_tag_options(spec: &str) -> (String, String) {
    let tag = TagSpec::parse(spec);
    (tag.opening(), tag.name().to_string())
}
