//! Session-local bookkeeping of object names.
//!
//! `objects` mirrors what was successfully created in the scene, in creation
//! order. `used` also remembers names handed out for requests that were later
//! cancelled or failed, so a retry never reuses them within the session.

use std::path::Path;

use crate::types::Reservation;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    objects: Vec<String>,
    used: Vec<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry with names that already exist in the scene.
    pub fn from_objects(objects: Vec<String>) -> Self {
        let mut registry = Self::new();
        for name in objects {
            registry.add(&name);
        }
        registry
    }

    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.objects.push(name.to_string());
        }
        if !self.is_used(name) {
            self.used.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.objects.retain(|n| n != name);
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.used.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.iter().any(|n| n == name)
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// 1-based lookup as shown in numbered listings.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.objects.get(i))
            .map(String::as_str)
    }

    fn is_used(&self, name: &str) -> bool {
        self.used.iter().any(|n| n == name)
    }

    /// `base` if free, otherwise `base_N` with the smallest free N >= 1.
    pub fn unique_name(&self, base: &str) -> String {
        if !self.is_used(base) {
            return base.to_string();
        }
        let mut counter = 1;
        loop {
            let candidate = format!("{base}_{counter}");
            if !self.is_used(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    pub fn reserve(&mut self, requested: &str) -> Reservation {
        let name = self.unique_name(requested);
        let renamed = name != requested;
        self.used.push(name.clone());
        Reservation { name, renamed }
    }

    /// Load the object list from a JSON array. Missing or unreadable files
    /// yield an empty registry.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::new();
        }
        let objects = std::fs::read_to_string(path)
            .map_err(crate::BridgeError::from)
            .and_then(|text| serde_json::from_str::<Vec<String>>(&text).map_err(Into::into));
        match objects {
            Ok(objects) => {
                tracing::debug!("Loaded {} names from {}", objects.len(), path.display());
                Self::from_objects(objects)
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable registry {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.objects)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent_and_ordered() {
        let mut registry = NameRegistry::new();
        registry.add("Cube");
        registry.add("Sphere");
        registry.add("Cube");
        assert_eq!(registry.objects(), &["Cube".to_string(), "Sphere".to_string()]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = NameRegistry::from_objects(vec!["A".into(), "B".into()]);
        registry.remove("A");
        registry.remove("missing");
        assert_eq!(registry.objects(), &["B".to_string()]);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.unique_name("B"), "B");
    }

    #[test]
    fn test_unique_name_suffix_sequence() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.reserve("cube"), Reservation { name: "cube".into(), renamed: false });
        assert_eq!(registry.reserve("cube"), Reservation { name: "cube_1".into(), renamed: true });
        assert_eq!(registry.reserve("cube").name, "cube_2");
    }

    #[test]
    fn test_unique_name_skips_taken_suffixes() {
        let registry = NameRegistry::from_objects(vec!["cube".into(), "cube_1".into(), "cube_3".into()]);
        assert_eq!(registry.unique_name("cube"), "cube_2");
    }

    #[test]
    fn test_removed_name_stays_reserved() {
        let mut registry = NameRegistry::new();
        let reservation = registry.reserve("Cone");
        registry.add(&reservation.name);
        registry.remove("Cone");
        assert!(!registry.contains("Cone"));
        assert_eq!(registry.unique_name("Cone"), "Cone_1");
    }

    #[test]
    fn test_one_based_lookup() {
        let registry = NameRegistry::from_objects(vec!["first".into(), "second".into()]);
        assert_eq!(registry.get(1), Some("first"));
        assert_eq!(registry.get(2), Some("second"));
        assert_eq!(registry.get(0), None);
        assert_eq!(registry.get(3), None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");

        let registry = NameRegistry::from_objects(vec!["Cube".into(), "Spiral".into()]);
        registry.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Spiral\""));

        let loaded = NameRegistry::load(&path);
        assert_eq!(loaded.objects(), registry.objects());
        assert_eq!(loaded.unique_name("Cube"), "Cube_1");
    }

    #[test]
    fn test_load_missing_or_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(NameRegistry::load(dir.path().join("absent.json")).is_empty());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{not json").unwrap();
        assert!(NameRegistry::load(&corrupt).is_empty());
    }
}
