use std::sync::LazyLock;

use serde::Serialize;

/// A service offering.
///
/// `icon` is a symbolic name resolved by the view layer, not an asset
/// path. `starting_price` is a pre-formatted currency string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub features: Vec<String>,
    pub deliverables: Vec<String>,
    pub timeline: String,
    pub starting_price: String,
    pub featured: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).into()).collect()
}

static SERVICES: LazyLock<Vec<Service>> = LazyLock::new(|| {
    vec![
        Service {
            id: "1".into(),
            title: "Web Design".into(),
            slug: "web-design".into(),
            description: "Custom website designs that combine beautiful aesthetics with conversion-focused user experience. We create digital experiences that engage your audience and drive business results.".into(),
            icon: "Palette".into(),
            features: strings(&[
                "Custom UI/UX Design",
                "Mobile-First Responsive Design",
                "Brand Identity Integration",
                "Conversion Optimization",
                "Accessibility Compliance (WCAG 2.1)",
                "Performance-Optimized Assets",
            ]),
            deliverables: strings(&[
                "Design System & Style Guide",
                "High-Fidelity Mockups",
                "Interactive Prototypes",
                "Responsive Layouts (Mobile, Tablet, Desktop)",
                "Asset Library & Icons",
                "Design Documentation",
            ]),
            timeline: "3-6 weeks".into(),
            starting_price: "$12,000".into(),
            featured: true,
        },
        Service {
            id: "2".into(),
            title: "Frontend Development".into(),
            slug: "frontend-development".into(),
            description: "Lightning-fast, modern frontend development using React, TypeScript, and cutting-edge tools. We build interfaces that are both beautiful and performant.".into(),
            icon: "Code".into(),
            features: strings(&[
                "React & TypeScript Development",
                "Modern CSS (Tailwind, CSS-in-JS)",
                "State Management (Redux, Zustand)",
                "Performance Optimization",
                "Cross-Browser Compatibility",
                "Progressive Web App (PWA) Features",
            ]),
            deliverables: strings(&[
                "Production-Ready Codebase",
                "Component Library",
                "Responsive Implementation",
                "Performance Optimizations",
                "Browser Testing Report",
                "Documentation & Handoff",
            ]),
            timeline: "4-8 weeks".into(),
            starting_price: "$18,000".into(),
            featured: true,
        },
        Service {
            id: "3".into(),
            title: "Full-Stack Development".into(),
            slug: "full-stack-development".into(),
            description: "Complete web application development from database to deployment. We handle everything from backend APIs to frontend interfaces and infrastructure.".into(),
            icon: "Layers".into(),
            features: strings(&[
                "Full-Stack Architecture",
                "Database Design & Optimization",
                "API Development & Integration",
                "Authentication & Security",
                "Cloud Infrastructure (AWS, Vercel)",
                "CI/CD Pipeline Setup",
            ]),
            deliverables: strings(&[
                "Complete Web Application",
                "Database Schema & Setup",
                "RESTful/GraphQL APIs",
                "Admin Dashboard",
                "Deployment & Hosting Setup",
                "Technical Documentation",
            ]),
            timeline: "8-16 weeks".into(),
            starting_price: "$35,000".into(),
            featured: true,
        },
        Service {
            id: "4".into(),
            title: "E-commerce Solutions".into(),
            slug: "ecommerce-solutions".into(),
            description: "Custom e-commerce platforms built for conversion and scale. From product catalogs to payment processing, we create seamless shopping experiences.".into(),
            icon: "ShoppingCart".into(),
            features: strings(&[
                "Custom E-commerce Platform",
                "Payment Gateway Integration",
                "Inventory Management System",
                "Order Management & Fulfillment",
                "SEO & Marketing Tools",
                "Analytics & Reporting Dashboard",
            ]),
            deliverables: strings(&[
                "Complete E-commerce Website",
                "Product Catalog System",
                "Shopping Cart & Checkout",
                "Payment Processing Setup",
                "Admin & Vendor Panels",
                "Marketing Tools Integration",
            ]),
            timeline: "10-20 weeks".into(),
            starting_price: "$45,000".into(),
            featured: false,
        },
        Service {
            id: "5".into(),
            title: "Performance & SEO".into(),
            slug: "performance-seo".into(),
            description: "Technical SEO and performance optimization services to improve your search rankings and user experience. We make your site faster and more discoverable.".into(),
            icon: "Zap".into(),
            features: strings(&[
                "Core Web Vitals Optimization",
                "Technical SEO Audit",
                "Page Speed Optimization",
                "Schema Markup Implementation",
                "Lighthouse Score Improvement",
                "Search Console Setup & Monitoring",
            ]),
            deliverables: strings(&[
                "Performance Audit Report",
                "Technical SEO Implementation",
                "Speed Optimization",
                "SEO Strategy Document",
                "Monitoring & Analytics Setup",
                "Monthly Performance Reports",
            ]),
            timeline: "2-4 weeks".into(),
            starting_price: "$8,000".into(),
            featured: false,
        },
    ]
});

/// All services in declaration order.
pub fn all() -> &'static [Service] {
    &SERVICES
}

/// Look up a service by its exact slug. First declared wins on duplicates.
pub fn by_slug(slug: &str) -> Option<&'static Service> {
    all().iter().find(|service| service.slug == slug)
}

/// Services flagged for prioritized display, in declaration order.
pub fn featured() -> Vec<&'static Service> {
    all().iter().filter(|service| service.featured).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_slug_returns_matching_service() {
        let service = by_slug("performance-seo").unwrap();
        assert_eq!(service.title, "Performance & SEO");
        assert_eq!(service.starting_price, "$8,000");
    }

    #[test]
    fn test_by_slug_miss_is_none() {
        assert!(by_slug("consulting").is_none());
    }

    #[test]
    fn test_featured_subset_in_order() {
        let featured = featured();
        assert_eq!(
            featured.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );
    }

    #[test]
    fn test_features_and_deliverables_keep_order() {
        let service = by_slug("web-design").unwrap();
        assert_eq!(service.features[0], "Custom UI/UX Design");
        assert_eq!(service.deliverables[5], "Design Documentation");
    }
}
