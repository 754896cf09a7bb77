//! Image path to absolute URL conversion.

/// Turns the image paths returned by the project API into absolute URLs.
///
/// - `http://` / `https://` URLs pass through untouched
/// - protocol-relative `//cdn/x.png` gets an `https:` scheme
/// - relative paths are joined onto the asset base with exactly one `/`
/// - empty or missing paths yield `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetUrlResolver {
    base: Option<String>,
}

impl AssetUrlResolver {
    /// An empty base means relative paths are returned unchanged.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim().trim_end_matches('/').to_string();
        Self {
            base: (!base.is_empty()).then_some(base),
        }
    }

    pub fn resolve(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;

        if is_absolute(raw) {
            return Some(raw.to_string());
        }
        if let Some(rest) = raw.strip_prefix("//") {
            return Some(format!("https://{rest}"));
        }

        match &self.base {
            Some(base) => Some(format!("{}/{}", base, raw.trim_start_matches('/'))),
            None => Some(raw.to_string()),
        }
    }
}

fn is_absolute(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_paths_with_single_slash() {
        let resolver = AssetUrlResolver::new("https://assets.example.org/media/");
        assert_eq!(
            resolver.resolve(Some("/projects/42/cover.png")).as_deref(),
            Some("https://assets.example.org/media/projects/42/cover.png")
        );
        assert_eq!(
            resolver.resolve(Some("projects/42/cover.png")).as_deref(),
            Some("https://assets.example.org/media/projects/42/cover.png")
        );
    }

    #[test]
    fn keeps_absolute_urls() {
        let resolver = AssetUrlResolver::new("https://assets.example.org");
        assert_eq!(
            resolver.resolve(Some("HTTP://other.example.org/a.jpg")).as_deref(),
            Some("HTTP://other.example.org/a.jpg")
        );
        assert_eq!(
            resolver.resolve(Some("//cdn.example.org/a.jpg")).as_deref(),
            Some("https://cdn.example.org/a.jpg")
        );
    }

    #[test]
    fn empty_paths_have_no_url() {
        let resolver = AssetUrlResolver::new("https://assets.example.org");
        assert_eq!(resolver.resolve(None), None);
        assert_eq!(resolver.resolve(Some("  ")), None);
    }

    #[test]
    fn missing_base_leaves_relative_paths_alone() {
        let resolver = AssetUrlResolver::new("");
        assert_eq!(resolver.resolve(Some("/a.png")).as_deref(), Some("/a.png"));
    }
}
