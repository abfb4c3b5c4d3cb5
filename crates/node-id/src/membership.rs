/// Returns true if any item equals `target`, ignoring case.
///
/// This is a whole-string comparison: `"firs"` does not match `"First"`. Case folding uses
/// Unicode lowercase mapping on both sides.
pub fn array_contains_case_insensitive<S: AsRef<str>>(items: &[S], target: &str) -> bool {
    let target = target.to_lowercase();
    items
        .iter()
        .any(|item| item.as_ref().to_lowercase() == target)
}
