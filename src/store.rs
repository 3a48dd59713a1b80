use crate::SettingsEngine;
use std::collections::HashMap;

/// SettingsStore keeps user settings as name/value pairs in memory
///
/// Display order matches insertion order, so the map is paired with a list
/// of names in the order they were added.
pub struct SettingsStore {
    entries: HashMap<String, String>,
    order: Vec<String>,
}

impl SettingsStore {
    /// create an empty `SettingsStore`
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn capitalize(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl SettingsEngine for SettingsStore {
    /// add a new setting named `key` with `value`
    ///
    /// Adding a name that is already present leaves the store untouched.
    fn add(&mut self, key: String, value: String) -> String {
        let key = key.to_lowercase();
        let value = value.to_lowercase();
        if self.entries.contains_key(&key) {
            return format!(
                "Setting '{}' already exists! Cannot add a new setting with this name.",
                key
            );
        }
        let message = format!("Setting '{}' added with value '{}' successfully!", key, value);
        self.order.push(key.clone());
        self.entries.insert(key, value);
        message
    }

    /// overwrite the value of the setting named `key`
    ///
    /// Updating a name that is not present leaves the store untouched.
    fn update(&mut self, key: String, value: String) -> String {
        let key = key.to_lowercase();
        let value = value.to_lowercase();
        if !self.entries.contains_key(&key) {
            return format!(
                "Setting '{}' does not exist! Cannot update a non-existing setting.",
                key
            );
        }
        let message = format!("Setting '{}' updated to '{}' successfully!", key, value);
        self.entries.insert(key, value);
        message
    }

    fn delete(&mut self, key: String) -> String {
        let key = key.to_lowercase();
        if self.entries.remove(&key).is_none() {
            return "Setting not found!".to_string();
        }
        self.order.retain(|name| name != &key);
        format!("Setting '{}' deleted successfully!", key)
    }

    /// render the whole collection as a report
    ///
    /// One line per setting with the name capitalized, in insertion order.
    fn view(&self) -> String {
        if self.entries.is_empty() {
            return "No settings available.".to_string();
        }
        let mut report = String::from("Current User Settings:\n");
        for name in &self.order {
            if let Some(value) = self.entries.get(name) {
                report += &format!("{}: {}\n", Self::capitalize(name), value);
            }
        }
        report
    }
}
