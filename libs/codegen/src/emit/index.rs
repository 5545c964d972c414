//! `mod.rs` emitters for the `parse` and `validate` directories.

/// Declares each module, its paired `#[cfg(test)]` module, and re-exports
/// the module's items.
pub fn emit_module_index(modules: &[String]) -> String {
    let mut sorted: Vec<&String> = modules.iter().collect();
    sorted.sort();
    sorted.dedup();

    let mut out = String::new();
    for module in &sorted {
        out.push_str(&format!("mod {module};\n"));
        out.push_str("#[cfg(test)]\n");
        out.push_str(&format!("mod {module}_test;\n"));
    }
    out.push('\n');
    for module in &sorted {
        out.push_str(&format!("pub use {module}::*;\n"));
    }
    out
}
