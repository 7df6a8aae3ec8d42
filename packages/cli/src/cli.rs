use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "genius",
    about = "GENIUS digital agency content browser and project inquiries",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for list and show commands.
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List blog posts
    Posts(PostsArgs),
    /// Show one blog post with related reading
    Post(SlugArgs),
    /// List portfolio case studies
    Projects(ProjectsArgs),
    /// Show one case study with its metrics and client quotes
    Project(SlugArgs),
    /// List service offerings
    Services(ServicesArgs),
    /// Show one service offering
    Service(SlugArgs),
    /// List client testimonials
    Testimonials(TestimonialsArgs),
    /// Send a project inquiry to the agency
    Contact,
}

#[derive(Args)]
pub struct SlugArgs {
    pub slug: String,
}

#[derive(Args)]
pub struct PostsArgs {
    /// Only posts carrying this tag (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,
    /// Full-text filter over titles and excerpts
    #[arg(long)]
    pub search: Option<String>,
    /// Only posts flagged as featured
    #[arg(long)]
    pub featured: bool,
}

#[derive(Args)]
pub struct ProjectsArgs {
    /// Only projects in this category (exact match)
    #[arg(long)]
    pub category: Option<String>,
    /// Only projects in this industry (exact match)
    #[arg(long)]
    pub industry: Option<String>,
    /// Only projects flagged as featured
    #[arg(long)]
    pub featured: bool,
}

#[derive(Args)]
pub struct ServicesArgs {
    /// Only services flagged as featured
    #[arg(long)]
    pub featured: bool,
}

#[derive(Args)]
pub struct TestimonialsArgs {
    /// Only testimonials linked to this project slug
    #[arg(long)]
    pub project: Option<String>,
}
