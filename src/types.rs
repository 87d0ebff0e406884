/// Core domain types for doclinks: doclet records, href segments, and hrefs.
use std::fmt;

/// One documented entity as emitted by the documentation generator.
/// Only the fields that affect link resolution and pruning are kept; anything
/// else in the JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Doclet {
    /// Alias declared on the doclet. Aliased doclets are pruned before resolution.
    #[serde(default)]
    pub alias: Option<String>,
    /// Doclet explicitly excluded from output.
    #[serde(default)]
    pub ignore: bool,
    /// Category tag such as `class`, `module`, `mixin`, or `member`.
    #[serde(default)]
    pub kind: String,
    /// Fully qualified identifier, the lookup key.
    pub longname: String,
    /// Longname of the logical owner. Absent for top-level doclets.
    #[serde(default)]
    pub memberof: Option<String>,
    /// Short, unqualified name. The generator's package doclet has none.
    #[serde(default)]
    pub name: String,
    /// Doclet produced without any doc comment.
    #[serde(default)]
    pub undocumented: bool,
}

/// A resolved link fragment, e.g. `#/kind/enyo/Control`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Href(
    /// The fragment string including the leading `#/`.
    pub String,
);

impl Href {
    /// Borrow the fragment as a string slice.
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Href {
    /// Write the raw fragment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

/// The path segment that follows `#/` in a constructed href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Classes and kind-owned members. Rendered as `kind`.
    Kind,
    /// Rendered as `mixin`.
    Mixin,
    /// Rendered as `module`.
    Module,
    /// Any other doclet kind, rendered verbatim.
    Other(String),
}

impl Segment {
    /// The literal text used in the href.
    pub fn as_str(&self) -> &str {
        return match self {
            Segment::Kind => "kind",
            Segment::Mixin => "mixin",
            Segment::Module => "module",
            Segment::Other(kind) => kind.as_str(),
        };
    }

    /// Whether this segment names a container that never takes module indirection.
    pub const fn is_container(&self) -> bool {
        return matches!(self, Segment::Kind | Segment::Mixin | Segment::Module);
    }

    /// Pick the segment for a doclet kind. `class` is published under `kind`;
    /// the doclet's own kind is left untouched.
    pub fn for_kind(kind: &str) -> Self {
        return match kind {
            "class" | "kind" => Segment::Kind,
            "mixin" => Segment::Mixin,
            "module" => Segment::Module,
            other => Segment::Other(other.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_is_published_as_kind() {
        assert_eq!(Segment::for_kind("class"), Segment::Kind);
        assert_eq!(Segment::for_kind("class").as_str(), "kind");
    }

    #[test]
    fn unknown_kinds_pass_through() {
        let segment = Segment::for_kind("function");
        assert_eq!(segment.as_str(), "function");
        assert!(!segment.is_container());
    }

    #[test]
    fn containers() {
        assert!(Segment::Module.is_container());
        assert!(Segment::Mixin.is_container());
        assert!(Segment::Kind.is_container());
    }

    #[test]
    fn doclet_optional_fields_default() {
        let doclet: Doclet =
            serde_json::from_str(r#"{"longname":"Foo","kind":"class","name":"Foo","meta":{}}"#)
                .unwrap();
        assert_eq!(doclet.memberof, None);
        assert_eq!(doclet.alias, None);
        assert!(!doclet.undocumented);
        assert!(!doclet.ignore);
    }
}
