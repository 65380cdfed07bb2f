/// Interpret a grading completion as a correctness verdict
///
/// True iff the lowercased, trimmed completion contains `yes` anywhere, so
/// `"Yes, that is correct."` counts while `"No."` and `""` do not.
pub fn is_affirmative(completion: &str) -> bool {
    completion.trim().to_lowercase().contains("yes")
}
