use std::collections::HashSet;

/// Excel's limit on worksheet name length, in characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel refuses in a worksheet name.
const FORBIDDEN: [char; 7] = [':', '/', '\\', '?', '*', '[', ']'];

/// Derive a sheet name from a city: first 31 characters, minus the
/// characters Excel forbids, without surrounding apostrophes.
pub fn sheet_name(city: &str) -> String {
    let name: String = city
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .filter(|c| !FORBIDDEN.contains(c))
        .collect();
    name.trim_matches('\'').to_string()
}

/// Hands out sheet names that are unique within one workbook.
///
/// Excel compares sheet names case-insensitively, and a city whose name
/// sanitizes to nothing still needs a sheet.
#[derive(Debug, Default)]
pub struct SheetNames {
    used: HashSet<String>,
}

impl SheetNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for the city at `position` (0-based) in the input list.
    pub fn assign(&mut self, city: &str, position: usize) -> String {
        let mut base = sheet_name(city);
        if base.is_empty() {
            base = format!("Sheet{}", position + 1);
        }

        let mut candidate = base.clone();
        let mut counter = 2;
        while self.is_taken(&candidate) {
            let suffix = format!(" ({})", counter);
            let keep = MAX_SHEET_NAME_LEN - suffix.chars().count();
            let prefix: String = base.chars().take(keep).collect();
            candidate = format!("{}{}", prefix, suffix);
            counter += 1;
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }

    fn is_taken(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        // "History" is reserved by Excel
        key == "history" || self.used.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_unchanged() {
        assert_eq!(sheet_name("Москва"), "Москва");
    }

    #[test]
    fn test_truncated_to_31_chars_before_stripping() {
        let city = "Петропавловск-Камчатский городской округ";
        let name = sheet_name(city);
        assert_eq!(name.chars().count(), 31);
        assert_eq!(name, city.chars().take(31).collect::<String>());
    }

    #[test]
    fn test_colon_and_slash_removed() {
        assert_eq!(
            sheet_name("Нью-Йорк: Манхэттен/Бруклин"),
            "Нью-Йорк МанхэттенБруклин"
        );
        let name = sheet_name(&"a:/".repeat(20));
        assert!(name.chars().count() <= MAX_SHEET_NAME_LEN);
        assert!(!name.contains(':') && !name.contains('/'));
    }

    #[test]
    fn test_other_forbidden_chars_removed() {
        assert_eq!(sheet_name("'Foo [bar]*?\\'"), "Foo bar");
    }

    #[test]
    fn test_empty_name_falls_back_to_position() {
        let mut names = SheetNames::new();
        assert_eq!(names.assign("://", 2), "Sheet3");
    }

    #[test]
    fn test_collisions_get_suffix() {
        let mut names = SheetNames::new();
        let long = "А".repeat(40);
        assert_eq!(names.assign(&long, 0), "А".repeat(31));

        let second = names.assign(&format!("{}Б", long), 1);
        assert_eq!(second, format!("{} (2)", "А".repeat(27)));
        assert_eq!(second.chars().count(), 31);

        assert_eq!(names.assign("Омск", 2), "Омск");
        assert_eq!(names.assign("ОМСК", 3), "ОМСК (2)");
        assert_eq!(names.assign("history", 4), "history (2)");
    }
}
