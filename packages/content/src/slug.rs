/// Derive a URL slug from a display name: lowercase, with each run of
/// whitespace collapsed to a single hyphen.
///
/// This is how testimonials are linked to projects: by normalizing the
/// project's display name and comparing it to the project slug. The
/// relationship is string-based, not a foreign key, so a renamed project
/// silently drops its testimonials.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_gap = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            pending_gap = true;
        } else {
            if pending_gap {
                out.push('-');
                pending_gap = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    if pending_gap {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_display_names() {
        assert_eq!(slugify("TechFlow SaaS Platform"), "techflow-saas-platform");
        assert_eq!(slugify("Verde E-commerce Revolution"), "verde-e-commerce-revolution");
        assert_eq!(slugify("PropTech Virtual Tours"), "proptech-virtual-tours");
    }

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("a  b\tc"), "a-b-c");
    }

    #[test]
    fn test_slugify_keeps_edge_runs() {
        // Matches the original normalization: edge whitespace still maps
        // to a hyphen rather than being trimmed.
        assert_eq!(slugify(" a "), "-a-");
    }
}
