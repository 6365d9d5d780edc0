use std::collections::HashMap;

/// Selects series by id, key, tag and attribute.
///
/// Ids, keys and tags accumulate in insertion order and may repeat.
/// Attributes keep the last value written for a key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub ids: Vec<String>,
    pub keys: Vec<String>,
    pub tags: Vec<String>,
    pub attributes: HashMap<String, String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_id(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }

    pub fn add_key(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.keys.is_empty() && self.tags.is_empty() && self.attributes.is_empty()
    }

    /// Query parameters in the form the series endpoints accept:
    /// `id`, `key` and `tag` repeated per entry, then `attr[name]` sorted by name.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(
            self.ids.len() + self.keys.len() + self.tags.len() + self.attributes.len(),
        );

        pairs.extend(self.ids.iter().map(|id| ("id".to_string(), id.clone())));
        pairs.extend(self.keys.iter().map(|key| ("key".to_string(), key.clone())));
        pairs.extend(self.tags.iter().map(|tag| ("tag".to_string(), tag.clone())));

        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort_by(|a, b| a.0.cmp(b.0));
        pairs.extend(
            attributes
                .into_iter()
                .map(|(name, value)| (format!("attr[{}]", name), value.clone())),
        );

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filter_is_empty() {
        let filter = Filter::new();
        assert!(filter.is_empty());
        assert!(filter.to_query_pairs().is_empty());
    }

    #[test]
    fn test_tags_keep_duplicates_and_order() {
        let mut filter = Filter::new();
        filter.add_tag("x");
        filter.add_tag("y");
        filter.add_tag("x");
        assert_eq!(filter.tags, vec!["x", "y", "x"]);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_ids_and_keys_append() {
        let mut filter = Filter::new();
        filter.add_id("01");
        filter.add_id("01");
        filter.add_key("temp.1");
        assert_eq!(filter.ids, vec!["01", "01"]);
        assert_eq!(filter.keys, vec!["temp.1"]);
    }

    #[test]
    fn test_attribute_last_write_wins() {
        let mut filter = Filter::new();
        filter.add_attribute("a", "1");
        filter.add_attribute("a", "2");
        assert_eq!(filter.attributes.len(), 1);
        assert_eq!(filter.attributes.get("a").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_query_pairs_order() {
        let mut filter = Filter::new();
        filter.add_attribute("room", "kitchen");
        filter.add_tag("temp");
        filter.add_attribute("floor", "1");
        filter.add_key("k2");
        filter.add_key("k1");
        filter.add_id("i1");

        let owned = filter.to_query_pairs();
        let pairs: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("id", "i1"),
                ("key", "k2"),
                ("key", "k1"),
                ("tag", "temp"),
                ("attr[floor]", "1"),
                ("attr[room]", "kitchen"),
            ]
        );
    }
}
