//! TOML value layering for defaults, presets and config files.
//!
//! Tables merge recursively with the overlay winning. Arrays and scalars are
//! replaced whole: a bracket table or program list is only meaningful as a unit.

/// Merge `overlay` onto `base`. Overlay values take precedence.
///
/// Keys already in `base` keep their position; new keys are appended, so city
/// and preset order stays the declaration order.
#[must_use]
pub fn merge_toml_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                if let Some(slot) = base_table.get_mut(&key) {
                    let base_val = std::mem::replace(slot, toml::Value::Boolean(false));
                    *slot = merge_toml_values(base_val, overlay_val);
                } else {
                    base_table.insert(key, overlay_val);
                }
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
