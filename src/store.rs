//! Read-only query facade over the loaded doclet database.

use std::path::Path;

use crate::error::Error;
use crate::types::Doclet;

/// Owner name the generator assigns to members of anonymous scopes.
const ANONYMOUS_OWNER: &str = "<anonymous>";

/// All doclets of one generation run, in the order the generator emitted them.
/// Mutated only by `prune`, which runs before any resolution.
#[derive(Debug, Default)]
pub struct DocletStore {
    /// Loaded doclets; duplicates by longname are kept and the first wins on lookup.
    doclets: Vec<Doclet>,
}

impl DocletStore {
    /// First doclet matching the predicate.
    pub fn first<P>(&self, predicate: P) -> Option<&Doclet>
    where
        P: Fn(&Doclet) -> bool,
    {
        return self.doclets.iter().find(|d| return predicate(*d));
    }

    /// Build a store from already-parsed doclets.
    pub const fn from_doclets(doclets: Vec<Doclet>) -> Self {
        return Self { doclets };
    }

    /// True when the store holds no doclets.
    pub fn is_empty(&self) -> bool {
        return self.doclets.is_empty();
    }

    /// Iterate doclets in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Doclet> {
        return self.doclets.iter();
    }

    /// Number of doclets currently in the store.
    pub fn len(&self) -> usize {
        return self.doclets.len();
    }

    /// Read a doclet JSON array from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::DocletsNotFound` if the file doesn't exist,
    /// `Error::Io` for other read failures,
    /// or `Error::Json` if the content is not a doclet array.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::DocletsNotFound { path: path.to_path_buf() });
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };
        return Self::parse(&content);
    }

    /// Look up a doclet by longname. Never fails for a missing name.
    pub fn lookup(&self, longname: &str) -> Option<&Doclet> {
        return self.first(|d| return d.longname == longname);
    }

    /// Parse a doclet JSON array.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the content is not a doclet array.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let doclets: Vec<Doclet> = serde_json::from_str(content)?;
        return Ok(Self::from_doclets(doclets));
    }

    /// Drop doclets that must never receive a link: undocumented, ignored,
    /// members of anonymous scopes, and anything carrying an alias.
    /// Returns how many doclets were removed.
    pub fn prune(&mut self) -> usize {
        let undocumented = self.remove(|d| return d.undocumented);
        let ignored = self.remove(|d| return d.ignore);
        let anonymous = self.remove(|d| return d.memberof.as_deref() == Some(ANONYMOUS_OWNER));
        // Aliased doclets resolve to the wrong page, so they are not linked at all.
        let aliased = self.remove(|d| return d.alias.is_some());

        tracing::debug!(undocumented, ignored, anonymous, aliased, remaining = self.len(), "pruned doclets");
        return undocumented
            .saturating_add(ignored)
            .saturating_add(anonymous)
            .saturating_add(aliased);
    }

    /// All doclets matching the predicate.
    pub fn query<P>(&self, predicate: P) -> Vec<&Doclet>
    where
        P: Fn(&Doclet) -> bool,
    {
        return self.doclets.iter().filter(|d| return predicate(*d)).collect();
    }

    /// Remove every doclet matching the predicate. Returns the number removed.
    pub fn remove<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&Doclet) -> bool,
    {
        let before = self.doclets.len();
        self.doclets.retain(|d| return !predicate(d));
        return before.saturating_sub(self.doclets.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doclet(longname: &str, kind: &str) -> Doclet {
        Doclet {
            alias: None,
            ignore: false,
            kind: kind.to_string(),
            longname: longname.to_string(),
            memberof: None,
            name: longname.to_string(),
            undocumented: false,
        }
    }

    #[test]
    fn lookup_missing_is_none() {
        let store = DocletStore::from_doclets(vec![doclet("Foo", "class")]);
        assert!(store.lookup("Bar").is_none());
    }

    #[test]
    fn lookup_first_match_wins() {
        let store = DocletStore::from_doclets(vec![doclet("Foo", "class"), doclet("Foo", "module")]);
        assert_eq!(store.lookup("Foo").unwrap().kind, "class");
        assert_eq!(store.query(|d| d.longname == "Foo").len(), 2);
    }

    #[test]
    fn prune_removes_unlinkable_doclets() {
        let mut undocumented = doclet("a", "member");
        undocumented.undocumented = true;
        let mut ignored = doclet("b", "member");
        ignored.ignore = true;
        let mut anonymous = doclet("c", "member");
        anonymous.memberof = Some("<anonymous>".to_string());
        let mut aliased = doclet("d", "member");
        aliased.alias = Some("e".to_string());
        let kept = doclet("f", "member");

        let mut store = DocletStore::from_doclets(vec![undocumented, ignored, anonymous, aliased, kept]);
        assert_eq!(store.prune(), 4);
        assert_eq!(store.len(), 1);
        assert!(store.lookup("f").is_some());
    }

    #[test]
    fn parse_accepts_package_doclet_without_name() {
        let store = DocletStore::parse(
            r#"[{"kind":"package","longname":"package:undefined","files":["a.js"]},{"longname":"Foo","kind":"class","name":"Foo"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("package:undefined").unwrap().name, "");
        assert_eq!(store.lookup("Foo").unwrap().kind, "class");
    }

    #[test]
    fn parse_rejects_non_array() {
        assert!(matches!(DocletStore::parse("{}"), Err(Error::Json(_))));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DocletStore::load(&dir.path().join("doclets.json"));
        assert!(matches!(result, Err(Error::DocletsNotFound { .. })));
    }
}
