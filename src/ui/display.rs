//! Display functions for pack results and diagnostics

use console::Style;

/// Print one syntax diagnostic to stderr
pub fn print_diagnostic(location: &str, message: &str) {
    eprintln!("{} {}", Style::new().yellow().apply_to(format!("{location}:")), message);
}

/// Print the discovered module names, nesting shown by indentation
pub fn print_modules(names: &[String]) {
    if names.is_empty() {
        println!("No modules found.");
        return;
    }

    println!("{}", Style::new().bold().apply_to("Modules:"));
    for line in module_lines(names) {
        println!("{line}");
    }
}

/// One line per module, indented by nesting depth
fn module_lines(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let depth = name.matches('.').count();
            let indent = "  ".repeat(depth + 1);
            let short = name.rsplit('.').next().unwrap_or(name);
            if depth == 0 {
                format!("{indent}{}", Style::new().bold().yellow().apply_to(short))
            } else {
                format!("{indent}{short} ({})", Style::new().dim().apply_to(name))
            }
        })
        .collect()
}

/// Print the closing summary of a pack run
pub fn print_summary(output: &str, bytes: u64, modules: usize, entries: usize, diagnostics: usize) {
    let label = Style::new().bold().green().apply_to("Packed");
    println!(
        "{label} {modules} module(s), {entries} entries into {output} {}",
        Style::new().dim().apply_to(format!("({bytes} bytes)"))
    );
    if diagnostics > 0 {
        eprintln!(
            "{}",
            Style::new()
                .bold()
                .yellow()
                .apply_to(format!("{diagnostics} problem(s) reported"))
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_lines_indent_by_depth() {
        console::set_colors_enabled(false);
        let names = vec![
            "shop".to_string(),
            "shop.catalog".to_string(),
            "shop.catalog.items".to_string(),
        ];
        let lines = module_lines(&names);
        assert_eq!(lines[0], "  shop");
        assert_eq!(lines[1], "    catalog (shop.catalog)");
        assert_eq!(lines[2], "      items (shop.catalog.items)");
    }
}
