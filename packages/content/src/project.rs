use std::sync::LazyLock;

use serde::Serialize;

/// One headline figure on a case study. Sequence order is
/// display-significant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// A portfolio case study.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub tech: Vec<String>,
    pub industry: String,
    pub outcome: String,
    pub metrics: Vec<Metric>,
    pub challenge: String,
    pub approach: String,
    pub solution: String,
    pub results: String,
    pub url: Option<String>,
    pub featured: bool,
}

fn metric(label: &str, value: &str) -> Metric {
    Metric {
        label: label.into(),
        value: value.into(),
    }
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: "1".into(),
            title: "TechFlow SaaS Platform".into(),
            slug: "techflow-saas-platform".into(),
            excerpt: "Complete SaaS rebuild that increased user engagement by 340% and reduced churn by 60%".into(),
            description: "A comprehensive redesign and rebuild of a B2B SaaS platform serving 50,000+ users across 12 industries.".into(),
            image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=600&fit=crop".into(),
            category: "Full-stack".into(),
            tech: vec!["React".into(), "Node.js".into(), "PostgreSQL".into(), "AWS".into()],
            industry: "SaaS".into(),
            outcome: "Performance".into(),
            metrics: vec![
                metric("User Engagement", "+340%"),
                metric("Churn Reduction", "60%"),
                metric("Page Load Speed", "2.1s"),
                metric("Mobile Conversion", "+180%"),
            ],
            challenge: "Legacy platform suffered from poor performance, confusing UX, and high churn rates. Users struggled with complex workflows and the mobile experience was broken.".into(),
            approach: "Conducted user research, rebuilt the architecture with modern tech stack, implemented progressive web app features, and redesigned the entire user journey.".into(),
            solution: "Built a lightning-fast React frontend with Node.js backend, implemented real-time features, created intuitive dashboard interfaces, and optimized for mobile-first experience.".into(),
            results: "Achieved 340% increase in user engagement, 60% reduction in churn, 2.1s average load times, and 180% improvement in mobile conversions within 6 months.".into(),
            url: Some("https://techflow.example.com".into()),
            featured: true,
        },
        Project {
            id: "2".into(),
            title: "Verde E-commerce Revolution".into(),
            slug: "verde-ecommerce-revolution".into(),
            excerpt: "Luxury sustainable fashion brand that generated $2.4M in first-year revenue".into(),
            description: "End-to-end e-commerce solution for a luxury sustainable fashion startup, from branding to checkout.".into(),
            image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800&h=600&fit=crop".into(),
            category: "E-commerce".into(),
            tech: vec!["React".into(), "Next.js".into(), "Stripe".into(), "Shopify".into()],
            industry: "Fashion".into(),
            outcome: "Revenue".into(),
            metrics: vec![
                metric("First Year Revenue", "$2.4M"),
                metric("Conversion Rate", "4.2%"),
                metric("Average Order Value", "$156"),
                metric("Return Customer Rate", "68%"),
            ],
            challenge: "New sustainable fashion brand needed to establish credibility, communicate brand values, and create seamless shopping experience in competitive luxury market.".into(),
            approach: "Developed comprehensive brand strategy, created immersive product experiences, implemented advanced filtering and search, and optimized conversion funnel.".into(),
            solution: "Built custom e-commerce platform with storytelling focus, integrated sustainable supply chain messaging, implemented AR try-on features, and created loyalty program.".into(),
            results: "Generated $2.4M revenue in year one, achieved 4.2% conversion rate (industry average 2.1%), $156 AOV, and 68% return customer rate.".into(),
            url: None,
            featured: true,
        },
        Project {
            id: "3".into(),
            title: "HealthTech Patient Portal".into(),
            slug: "healthtech-patient-portal".into(),
            excerpt: "HIPAA-compliant portal serving 25,000+ patients with 99.9% uptime".into(),
            description: "Secure patient portal and telemedicine platform for healthcare provider network.".into(),
            image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=800&h=600&fit=crop".into(),
            category: "Web Design".into(),
            tech: vec!["React".into(), "FHIR".into(), "AWS".into(), "WebRTC".into()],
            industry: "Healthcare".into(),
            outcome: "Compliance".into(),
            metrics: vec![
                metric("Active Patients", "25,000+"),
                metric("System Uptime", "99.9%"),
                metric("Consultation Completion", "94%"),
                metric("User Satisfaction", "4.8/5"),
            ],
            challenge: "Healthcare network needed HIPAA-compliant portal for patient records, appointments, and telemedicine while ensuring accessibility and security.".into(),
            approach: "Implemented end-to-end encryption, designed accessible interfaces following WCAG guidelines, integrated with existing EHR systems, and built scalable infrastructure.".into(),
            solution: "Created secure patient portal with video consultations, appointment scheduling, prescription management, and health record access with bank-level security.".into(),
            results: "Serves 25,000+ patients with 99.9% uptime, 94% consultation completion rate, and 4.8/5 user satisfaction while maintaining full HIPAA compliance.".into(),
            url: None,
            featured: false,
        },
        Project {
            id: "4".into(),
            title: "FinTech Dashboard Analytics".into(),
            slug: "fintech-dashboard-analytics".into(),
            excerpt: "Real-time trading dashboard processing 100K+ transactions per second".into(),
            description: "High-performance trading platform dashboard with real-time analytics and automated trading features.".into(),
            image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&h=600&fit=crop".into(),
            category: "Frontend".into(),
            tech: vec!["React".into(), "D3.js".into(), "WebSocket".into(), "Redis".into()],
            industry: "Finance".into(),
            outcome: "Performance".into(),
            metrics: vec![
                metric("Transactions/Second", "100K+"),
                metric("Data Latency", "<50ms"),
                metric("Daily Active Traders", "12,000"),
                metric("Trading Volume", "$50M/day"),
            ],
            challenge: "Trading firm needed ultra-fast dashboard to display real-time market data, execute trades, and provide advanced analytics without any performance lag.".into(),
            approach: "Built with high-performance React architecture, implemented WebSocket connections, used canvas-based charts, and optimized data processing pipelines.".into(),
            solution: "Created real-time dashboard with sub-50ms latency, advanced charting tools, automated trading algorithms, and risk management features.".into(),
            results: "Processes 100K+ transactions per second with <50ms latency, serves 12,000 daily active traders, and facilitates $50M in daily trading volume.".into(),
            url: None,
            featured: false,
        },
        Project {
            id: "5".into(),
            title: "EduTech Learning Platform".into(),
            slug: "edutech-learning-platform".into(),
            excerpt: "Interactive learning platform with 95% course completion rates".into(),
            description: "Comprehensive online learning platform with interactive courses, progress tracking, and certification.".into(),
            image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop".into(),
            category: "Full-stack".into(),
            tech: vec!["React".into(), "Node.js".into(), "MongoDB".into(), "WebRTC".into()],
            industry: "Education".into(),
            outcome: "Engagement".into(),
            metrics: vec![
                metric("Course Completion", "95%"),
                metric("Student Satisfaction", "4.9/5"),
                metric("Active Learners", "50,000+"),
                metric("Certificates Issued", "30,000+"),
            ],
            challenge: "Educational institution needed engaging online platform to replace in-person training with interactive digital experiences and certification tracking.".into(),
            approach: "Designed gamified learning experiences, built interactive content tools, implemented progress tracking, and created social learning features.".into(),
            solution: "Built comprehensive LMS with video lessons, interactive exercises, peer collaboration tools, and automated certification system.".into(),
            results: "Achieved 95% course completion rates, 4.9/5 student satisfaction, serves 50,000+ active learners, and issued 30,000+ certificates.".into(),
            url: None,
            featured: false,
        },
        Project {
            id: "6".into(),
            title: "PropTech Virtual Tours".into(),
            slug: "proptech-virtual-tours".into(),
            excerpt: "VR property platform that increased sales appointments by 280%".into(),
            description: "3D virtual property tours platform with VR support and integrated CRM for real estate agents.".into(),
            image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&h=600&fit=crop".into(),
            category: "Web Design".into(),
            tech: vec!["Three.js".into(), "React".into(), "WebGL".into(), "CRM API".into()],
            industry: "Real Estate".into(),
            outcome: "Sales".into(),
            metrics: vec![
                metric("Sales Appointments", "+280%"),
                metric("Virtual Tours", "10,000+"),
                metric("Agent Adoption", "89%"),
                metric("Time Saved", "15hrs/week"),
            ],
            challenge: "Real estate agency needed to showcase properties remotely during pandemic while maintaining engagement and qualifying serious buyers effectively.".into(),
            approach: "Built 3D property visualization platform, integrated with existing CRM, created mobile-optimized tours, and implemented lead scoring system.".into(),
            solution: "Developed WebGL-based virtual tour platform with VR support, interactive hotspots, measurement tools, and integrated lead management.".into(),
            results: "Increased sales appointments by 280%, created 10,000+ virtual tours, achieved 89% agent adoption, and saved agents 15 hours per week.".into(),
            url: None,
            featured: false,
        },
    ]
});

/// All case studies in declaration order.
pub fn all() -> &'static [Project] {
    &PROJECTS
}

/// Look up a project by its exact slug. First declared wins on duplicates.
pub fn by_slug(slug: &str) -> Option<&'static Project> {
    all().iter().find(|project| project.slug == slug)
}

/// Projects flagged for prioritized display, in declaration order.
pub fn featured() -> Vec<&'static Project> {
    all().iter().filter(|project| project.featured).collect()
}

/// Projects in the given category (exact match), in declaration order.
pub fn by_category(category: &str) -> Vec<&'static Project> {
    all()
        .iter()
        .filter(|project| project.category == category)
        .collect()
}

/// Projects in the given industry (exact match), in declaration order.
pub fn by_industry(industry: &str) -> Vec<&'static Project> {
    all()
        .iter()
        .filter(|project| project.industry == industry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_slug_returns_matching_project() {
        let project = by_slug("verde-ecommerce-revolution").unwrap();
        assert_eq!(project.slug, "verde-ecommerce-revolution");
        assert_eq!(project.industry, "Fashion");
    }

    #[test]
    fn test_by_slug_miss_is_none() {
        assert!(by_slug("nonexistent").is_none());
    }

    #[test]
    fn test_featured_subset_in_order() {
        let featured = featured();
        assert_eq!(
            featured.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["1", "2"]
        );
    }

    #[test]
    fn test_by_category_exact_match() {
        let web_design = by_category("Web Design");
        assert_eq!(
            web_design.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["3", "6"]
        );
        // Category match is exact, unlike tags.
        assert!(by_category("web design").is_empty());
    }

    #[test]
    fn test_by_industry_exact_match() {
        assert_eq!(by_industry("Healthcare").len(), 1);
        assert!(by_industry("Aerospace").is_empty());
    }

    #[test]
    fn test_metrics_preserve_declared_order() {
        let project = by_slug("techflow-saas-platform").unwrap();
        assert_eq!(project.metrics[0].label, "User Engagement");
        assert_eq!(project.metrics[3].value, "+180%");
    }

    #[test]
    fn test_only_techflow_has_url() {
        let with_url: Vec<_> = all().iter().filter(|p| p.url.is_some()).collect();
        assert_eq!(with_url.len(), 1);
        assert_eq!(with_url[0].id, "1");
    }
}
