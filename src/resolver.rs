//! Href resolution: turn a doclet longname into the fragment that links to its page.
//!
//! Resolution runs in two phases. The decision phase looks at the raw doclet
//! (kind, longname, memberof) and picks either a direct segment/path or an
//! indirection through the owning doclet. The normalization phase then rewrites
//! the chosen longname into a path with pure string functions.

use crate::diagnostics::Diagnostics;
use crate::store::DocletStore;
use crate::types::{Doclet, Href, Segment};

/// Marker the generator inserts between an inner scope and a nested name.
const NESTED_MARKER: &str = "~:";

/// Prefix marking module-qualified longnames.
const MODULE_PREFIX: &str = "module:";

/// Separator for inner (tilde) members.
const INNER_SEPARATOR: char = '~';

/// Joins an owner href and a member name.
const MEMBER_JOINER: char = ':';

/// What the decision phase chose for one doclet.
enum Plan<'d> {
    /// Build `#/<segment>/<path>` straight from a longname.
    Direct {
        /// Longname to normalize into the path.
        longname: String,
        /// Segment following `#/`.
        segment: Segment,
    },
    /// Needs indirection but has no owner to resolve through or rebuild from.
    Orphaned,
    /// Resolve the owner first and hang the member off its href.
    ViaOwner {
        /// The member being resolved.
        doclet: &'d Doclet,
        /// Longname of the owner.
        owner: &'d str,
    },
}

/// Outcome of one step of the owner chain.
enum Resolution {
    /// The owner chain revisited a doclet; carries the chain in visit order.
    Cycle(Vec<String>),
    /// An href was built.
    Resolved(Href),
    /// No doclet, or no way to build a path for it.
    Unresolved,
}

/// Resolves longnames against a pruned doclet store.
pub struct HrefResolver<'a> {
    /// Receives cycle and missing-owner reports.
    diagnostics: &'a dyn Diagnostics,
    /// Pruned, read-only doclet store.
    store: &'a DocletStore,
}

impl<'a> HrefResolver<'a> {
    /// Create a resolver over an already-pruned store.
    pub const fn new(store: &'a DocletStore, diagnostics: &'a dyn Diagnostics) -> Self {
        return Self { diagnostics, store };
    }

    /// Decide how the href for `doclet` is built. Inspects raw doclet fields only.
    fn plan<'d>(doclet: &'d Doclet, longname: &str) -> Plan<'d> {
        let segment = Segment::for_kind(&doclet.kind);
        let longname = strip_nested_marker(longname);

        if !needs_module_indirection(&segment, &longname) {
            return Plan::Direct { longname, segment };
        }
        return match doclet.memberof.as_deref() {
            Some(owner) => Plan::ViaOwner { doclet, owner },
            None => Plan::Orphaned,
        };
    }

    /// Resolve a longname to its href. `None` when the doclet is unknown, has
    /// no usable owner, or its owner chain cycles. Pure apart from reporting.
    pub fn resolve(&self, longname: &str) -> Option<Href> {
        let mut chain = Vec::new();
        return match self.resolve_within(longname, &mut chain) {
            Resolution::Cycle(chain) => {
                self.diagnostics
                    .report_issue(&format!("memberof cycle: {}", chain.join(" -> ")), longname);
                None
            },
            Resolution::Resolved(href) => Some(href),
            Resolution::Unresolved => {
                tracing::debug!(longname, "no doclet to link");
                None
            },
        };
    }

    /// One step of the owner chain. `chain` holds the longnames currently being resolved.
    fn resolve_within(&self, longname: &str, chain: &mut Vec<String>) -> Resolution {
        let Some(doclet) = self.store.lookup(longname) else {
            return Resolution::Unresolved;
        };

        if chain.iter().any(|visited| return visited == longname) {
            let mut cycle = chain.clone();
            cycle.push(longname.to_string());
            return Resolution::Cycle(cycle);
        }
        chain.push(longname.to_string());

        let (segment, longname) = match Self::plan(doclet, longname) {
            Plan::Direct { longname, segment } => (segment, longname),
            Plan::Orphaned => {
                self.diagnostics
                    .report_issue("module member has no memberof to resolve through", &doclet.longname);
                return Resolution::Unresolved;
            },
            Plan::ViaOwner { doclet, owner } => match self.resolve_within(owner, chain) {
                Resolution::Cycle(cycle) => return Resolution::Cycle(cycle),
                Resolution::Resolved(owner_href) => {
                    return Resolution::Resolved(Href(format!("{owner_href}{MEMBER_JOINER}{}", doclet.name)));
                },
                Resolution::Unresolved => (
                    fallback_segment(owner),
                    format!("{owner}{MEMBER_JOINER}{}", doclet.name),
                ),
            },
        };

        return Resolution::Resolved(build_href(&segment, &longname));
    }
}

/// Assemble `#/<segment>/<path>` after the path rewrites.
fn build_href(segment: &Segment, longname: &str) -> Href {
    return Href(format!("#/{}/{}", segment.as_str(), rewrite_for_path(longname)));
}

/// Segment for a member whose owner did not resolve. A tilde in the owner
/// means the owner is a kind defined inside a module.
pub fn fallback_segment(memberof: &str) -> Segment {
    if memberof.contains(INNER_SEPARATOR) {
        return Segment::Kind;
    }
    return Segment::Module;
}

/// Module-qualified non-container doclets link through their owner.
pub fn needs_module_indirection(segment: &Segment, normalized_longname: &str) -> bool {
    return !segment.is_container() && normalized_longname.contains(MODULE_PREFIX);
}

/// Turn a longname into an href path: tildes become path separators and the
/// module prefix disappears.
pub fn rewrite_for_path(longname: &str) -> String {
    return longname.replace(INNER_SEPARATOR, "/").replace(MODULE_PREFIX, "");
}

/// Remove every nested-name marker.
pub fn strip_nested_marker(longname: &str) -> String {
    return longname.replace(NESTED_MARKER, "");
}
