/// SettingsEngine defines the four operations of a settings store
///
/// Setting names and values are case-folded to lowercase before lookup and
/// storage. Every operation reports its outcome as a human-readable message;
/// none of them can fail.
pub trait SettingsEngine {
    /// add a new setting named `key` with `value`
    fn add(&mut self, key: String, value: String) -> String;

    /// overwrite the value of an existing setting
    fn update(&mut self, key: String, value: String) -> String;

    /// remove a setting by name
    fn delete(&mut self, key: String) -> String;

    /// render all settings as a multi-line report
    fn view(&self) -> String;
}
