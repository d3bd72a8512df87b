//! Category display formatting

use crate::models::CategorySet;

/// One label per line, with how many transactions use it
pub fn format_category_list(categories: &CategorySet, usage: impl Fn(&str) -> usize) -> String {
    if categories.is_empty() {
        return "No categories defined.\n".to_string();
    }

    let width = categories.iter().map(str::len).max().unwrap_or(8).max(8);
    let mut output = String::new();
    for name in categories.iter() {
        let count = usage(name);
        output.push_str(&format!("  {:<width$}  {} transaction(s)\n", name, count, width = width));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        let set = CategorySet::from_labels(["Food", "Rent"]);
        let output = format_category_list(&set, |name| if name == "Food" { 3 } else { 0 });
        assert!(output.contains("Food      3 transaction(s)"));
        assert!(output.contains("Rent      0 transaction(s)"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_category_list(&CategorySet::new(), |_| 0), "No categories defined.\n");
    }
}
