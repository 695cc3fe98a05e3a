// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    /// Slug with leading and trailing hyphens removed, for identifiers that
    /// are shown on their own in URLs.
    fn slugify_trimmed(&self, input: &str) -> String {
        self.slugify(input).trim_matches('-').to_string()
    }
}
