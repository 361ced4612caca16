use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::guid::Guid;

/// Navigation target for one GUID: the asset's project-relative path,
/// `/`-separated, with the sidecar extension stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub path: String,
}

impl AssetRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// In-memory GUID → asset mapping, built once per session.
///
/// Keys are unique; duplicate GUIDs across sidecars resolve to whichever
/// entry the scan wrote last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidIndex {
    entries: HashMap<Guid, AssetRecord>,
}

impl GuidIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, guid: Guid, record: AssetRecord) {
        self.entries.insert(guid, record);
    }

    pub fn get(&self, guid: &Guid) -> Option<&AssetRecord> {
        self.entries.get(guid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Guid, &AssetRecord)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetRecord, GuidIndex};
    use crate::guid::Guid;
    use pretty_assertions::assert_eq;

    fn guid(s: &str) -> Guid {
        s.parse().unwrap()
    }

    #[test]
    fn last_writer_wins_on_duplicates() {
        let mut index = GuidIndex::new();
        let id = guid("0ef2e22c39155c943b015dcf2f79bb99");

        index.insert(id.clone(), AssetRecord::new("Assets/First.prefab"));
        index.insert(id.clone(), AssetRecord::new("Assets/Second.prefab"));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&id).unwrap().path, "Assets/Second.prefab");
    }

    #[test]
    fn missing_guid_is_absent() {
        let index = GuidIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.get(&guid("0ef2e22c39155c943b015dcf2f79bb99")), None);
    }
}
