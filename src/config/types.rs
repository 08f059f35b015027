//! Default values for config fields.

// Default value functions for serde
pub(crate) fn default_multi_select_separator() -> String {
    ", ".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
