use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of a maker project.
///
/// Remote projects carry the id assigned by the backend (numeric ids are
/// stringified at the wire boundary); local drafts get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl_id!(ProjectId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(ProjectId::new(), ProjectId::new());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProjectId::from("p-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-42\"");
        let back: ProjectId = serde_json::from_str("\"p-42\"").unwrap();
        assert_eq!(back, id);
    }
}
