use std::sync::LazyLock;

use serde::Serialize;

use crate::slug::slugify;

/// A client quote.
///
/// `project`, when present, holds the referenced project's display name
/// (not its slug and not a foreign key). See [`crate::slug::slugify`] for
/// how the link is resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub avatar: String,
    pub project: Option<String>,
    /// Star rating, expected 1-5.
    pub rating: u8,
}

static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    vec![
        Testimonial {
            id: "1".into(),
            name: "Sarah Chen".into(),
            role: "CEO".into(),
            company: "TechFlow Solutions".into(),
            quote: "GENIUS completely transformed our platform. The new interface is intuitive, fast, and our user engagement has skyrocketed. They delivered exactly what we needed, on time and within budget.".into(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".into(),
            project: Some("TechFlow SaaS Platform".into()),
            rating: 5,
        },
        Testimonial {
            id: "2".into(),
            name: "Marcus Rodriguez".into(),
            role: "Founder".into(),
            company: "Verde Fashion".into(),
            quote: "Working with GENIUS was a game-changer. They understood our sustainability mission and created an e-commerce experience that tells our story beautifully. $2.4M in first-year sales speaks volumes.".into(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".into(),
            project: Some("Verde E-commerce Revolution".into()),
            rating: 5,
        },
        Testimonial {
            id: "3".into(),
            name: "Dr. Emily Watson".into(),
            role: "Chief Medical Officer".into(),
            company: "HealthLink Network".into(),
            quote: "The patient portal GENIUS built is remarkable. It's secure, user-friendly, and has dramatically improved patient engagement. The team's attention to healthcare compliance was exceptional.".into(),
            avatar: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=150&h=150&fit=crop&crop=face".into(),
            project: Some("HealthTech Patient Portal".into()),
            rating: 5,
        },
        Testimonial {
            id: "4".into(),
            name: "James Park".into(),
            role: "Head of Technology".into(),
            company: "Quantum Trading".into(),
            quote: "The trading dashboard GENIUS developed handles our massive transaction volumes flawlessly. Sub-50ms latency and rock-solid stability - exactly what we needed for our high-frequency operations.".into(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".into(),
            project: Some("FinTech Dashboard Analytics".into()),
            rating: 5,
        },
        Testimonial {
            id: "5".into(),
            name: "Lisa Thompson".into(),
            role: "Director of Learning".into(),
            company: "SkillForge Academy".into(),
            quote: "Our students love the new learning platform. 95% completion rates are unheard of in online education. GENIUS created something truly engaging that makes learning enjoyable.".into(),
            avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face".into(),
            project: Some("EduTech Learning Platform".into()),
            rating: 5,
        },
        Testimonial {
            id: "6".into(),
            name: "David Kim".into(),
            role: "Regional Manager".into(),
            company: "Premier Properties".into(),
            quote: "The virtual tour platform revolutionized how we show properties. 280% more appointments and our agents save hours each week. GENIUS delivered innovation that drives real business results.".into(),
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face".into(),
            project: Some("PropTech Virtual Tours".into()),
            rating: 5,
        },
    ]
});

/// All testimonials in declaration order.
pub fn all() -> &'static [Testimonial] {
    &TESTIMONIALS
}

/// Testimonials whose project display name normalizes to `project_slug`.
pub fn for_project(project_slug: &str) -> Vec<&'static Testimonial> {
    all()
        .iter()
        .filter(|t| {
            t.project
                .as_deref()
                .is_some_and(|name| slugify(name) == project_slug)
        })
        .collect()
}

/// The first `count` testimonials, used for homepage highlights.
/// Testimonials carry no featured flag; the prefix stands in for one.
pub fn featured(count: usize) -> Vec<&'static Testimonial> {
    all().iter().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project;

    #[test]
    fn test_for_project_matches_normalized_name() {
        let matched = for_project("techflow-saas-platform");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Sarah Chen");
    }

    #[test]
    fn test_for_project_miss_is_empty() {
        assert!(for_project("unknown-project").is_empty());
    }

    #[test]
    fn test_project_references_resolve_except_verde() {
        // The link is string-derived, not a foreign key. "Verde E-commerce
        // Revolution" normalizes to verde-e-commerce-revolution while the
        // project slug is verde-ecommerce-revolution, so that testimonial
        // is silently orphaned. Kept as-is for site compatibility.
        for t in all() {
            let name = t.project.as_deref().unwrap();
            let resolves = project::by_slug(&slugify(name)).is_some();
            assert_eq!(resolves, t.id != "2", "testimonial {} -> {name:?}", t.id);
        }
        assert!(for_project("verde-ecommerce-revolution").is_empty());
    }

    #[test]
    fn test_featured_takes_prefix() {
        let three = featured(3);
        assert_eq!(
            three.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );
        assert_eq!(featured(100).len(), all().len());
        assert!(featured(0).is_empty());
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(all().iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
