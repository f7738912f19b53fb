use serde::{de::DeserializeOwned, ser::SerializeSeq as _, Serialize, Serializer};
use tracing::debug;

use crate::{Comparators, Tree, TreeError};

/// A tree serializes as the sequence of its values in breadth first order.
/// A removed root serializes as `null`.
impl<T, U> Serialize for Tree<T, U>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for node in self.iter() {
            seq.serialize_element(&node.node().value())?;
        }
        seq.end()
    }
}

impl<T, U> Tree<T, U>
where
    T: Serialize,
{
    /// Compact JSON array of the values in breadth first order, e.g. `[0,5,3,7]`
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T, U> Tree<T, U>
where
    T: DeserializeOwned,
{
    /// Rebuild a tree from [`Tree::to_json`] output. The first element becomes the
    /// root, the rest are inserted in order with the supplied comparators.
    pub fn from_json(json: &str, comparators: Comparators<T, U>) -> Result<Self, TreeError> {
        let values: Vec<Option<T>> = serde_json::from_str(json)?;
        let mut values = values.into_iter();

        let root = values.next().flatten().ok_or(TreeError::MissingRoot)?;
        let mut tree = Self::with_comparators(root, comparators);
        let inserted = tree.add_all(values.flatten());

        debug!("Restored tree with {} inserted nodes", inserted);

        Ok(tree)
    }

    /// Parse a JSON array of values and insert each from the root. Returns how
    /// many were inserted.
    pub fn add_all_json(&mut self, json: &str) -> Result<usize, TreeError> {
        let values: Vec<T> = serde_json::from_str(json)?;
        Ok(self.add_all(values))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        test::{assert_consistent, numeric, numeric_comparators},
        Tree, TreeError,
    };

    #[test]
    fn compact_array() {
        let tree = numeric([5, 3, 7]);
        assert_eq!(tree.to_json().unwrap(), "[0,5,3,7]");
    }

    #[test]
    fn strings_are_encoded() {
        let mut tree = Tree::new("root \"quoted\"".to_string());
        tree.add("child".to_string());
        assert_eq!(tree.to_json().unwrap(), r#"["root \"quoted\"","child"]"#);
    }

    #[test]
    fn removed_root_is_null() {
        let mut tree = numeric([5]);
        tree.remove(&0);
        assert_eq!(tree.to_json().unwrap(), "[null]");
    }

    #[test]
    fn round_trip_by_bulk_insert() {
        let tree = numeric([5, 3, 7, 6, 1, 9, 2]);
        let json = tree.to_json().unwrap();

        let mut copy = Tree::with_comparators(tree.root_value().unwrap(), numeric_comparators());
        // The root value is part of the array and is skipped as a duplicate
        assert_eq!(copy.add_all_json(&json).unwrap(), tree.len() - 1);

        assert_eq!(copy.len(), tree.len());
        assert_eq!(copy.to_json().unwrap(), json);
        for (a, b) in tree.iter().zip(copy.iter()) {
            assert_eq!(a.node().child_count(), b.node().child_count());
        }
        assert_consistent(&copy);
    }

    #[test]
    fn round_trip_from_json() {
        let tree = numeric([5, 3, 7, 6, 1, 9, 2]);
        let json = tree.to_json().unwrap();

        let copy = Tree::from_json(&json, numeric_comparators()).unwrap();
        assert_eq!(copy.len(), tree.len());
        assert!(copy == tree);
    }

    #[test]
    fn missing_root() {
        let result = Tree::from_json("[]", numeric_comparators());
        assert!(matches!(result, Err(TreeError::MissingRoot)));

        let result = Tree::from_json("[null, 1]", numeric_comparators());
        assert!(matches!(result, Err(TreeError::MissingRoot)));
    }

    #[test]
    fn malformed_json() {
        let mut tree = numeric([]);
        assert!(matches!(tree.add_all_json("[1,"), Err(TreeError::Json(_))));
        assert!(matches!(
            Tree::from_json("{}", numeric_comparators()),
            Err(TreeError::Json(_))
        ));
    }
}
