//! Static content tables for the GENIUS agency site.
//!
//! Four independent collections (blog posts, projects, services,
//! testimonials) are initialized once at first access and never mutated.
//! Every query is a pure read over declaration order: single-record
//! lookups return `Option`, multi-valued queries return a possibly-empty
//! `Vec` and never fail.

pub mod blog;
pub mod project;
pub mod service;
pub mod slug;
pub mod testimonial;

pub use blog::{Author, BlogPost};
pub use project::{Metric, Project};
pub use service::Service;
pub use testimonial::Testimonial;
