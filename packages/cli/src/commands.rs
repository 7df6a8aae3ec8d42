use anyhow::bail;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use serde::Serialize;

use contact::{AppConfig, ContactClient, ContactForm, Field, SubmitOutcome, form};
use content::{blog, project, service, testimonial};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli { command, format } = cli;
    match command {
        Command::Posts(args) => cmd_posts(args, &format),
        Command::Post(args) => cmd_post(args, &format),
        Command::Projects(args) => cmd_projects(args, &format),
        Command::Project(args) => cmd_project(args, &format),
        Command::Services(args) => cmd_services(args, &format),
        Command::Service(args) => cmd_service(args, &format),
        Command::Testimonials(args) => cmd_testimonials(args, &format),
        Command::Contact => cmd_contact().await,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_posts(args: PostsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut posts = if let Some(term) = &args.search {
        blog::search(term)
    } else if let Some(tag) = &args.tag {
        blog::by_tag(tag)
    } else {
        blog::all().iter().collect()
    };
    if args.featured {
        posts.retain(|post| post.featured);
    }

    match format {
        OutputFormat::Json => print_json(&posts),
        OutputFormat::Text => {
            for post in posts {
                println!("{}  {}", style(&post.slug).cyan(), style(&post.title).bold());
                println!(
                    "    {} · {} min read · {}",
                    post.published_at,
                    post.read_time,
                    post.tags.join(", ")
                );
            }
            Ok(())
        }
    }
}

fn cmd_post(args: SlugArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let Some(post) = blog::by_slug(&args.slug) else {
        bail!("no blog post with slug {:?}", args.slug);
    };

    match format {
        OutputFormat::Json => print_json(post),
        OutputFormat::Text => {
            println!("{}", style(&post.title).bold().underlined());
            println!(
                "{}, {} · {} · {} min read",
                post.author.name, post.author.role, post.published_at, post.read_time
            );
            println!("Tags: {}\n", post.tags.join(", "));
            println!("{}", post.content.trim());

            let related = blog::related(post);
            if !related.is_empty() {
                println!("\n{}", style("Related reading").bold());
                for other in related {
                    println!("  {}  {}", style(&other.slug).cyan(), other.title);
                }
            }
            Ok(())
        }
    }
}

fn cmd_projects(args: ProjectsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mut projects = if let Some(category) = &args.category {
        project::by_category(category)
    } else if let Some(industry) = &args.industry {
        project::by_industry(industry)
    } else {
        project::all().iter().collect()
    };
    if args.featured {
        projects.retain(|p| p.featured);
    }

    match format {
        OutputFormat::Json => print_json(&projects),
        OutputFormat::Text => {
            for p in projects {
                println!("{}  {}", style(&p.slug).cyan(), style(&p.title).bold());
                println!("    {} · {} · {}", p.category, p.industry, p.excerpt);
            }
            Ok(())
        }
    }
}

fn cmd_project(args: SlugArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let Some(p) = project::by_slug(&args.slug) else {
        bail!("no case study with slug {:?}", args.slug);
    };

    match format {
        OutputFormat::Json => print_json(p),
        OutputFormat::Text => {
            println!("{}", style(&p.title).bold().underlined());
            println!("{} · {} · {}\n", p.category, p.industry, p.tech.join(", "));
            println!("{}\n", p.description);
            for metric in &p.metrics {
                println!("  {:<24} {}", metric.label, style(&metric.value).green().bold());
            }
            println!("\n{}\n{}", style("Challenge").bold(), p.challenge);
            println!("\n{}\n{}", style("Approach").bold(), p.approach);
            println!("\n{}\n{}", style("Solution").bold(), p.solution);
            println!("\n{}\n{}", style("Results").bold(), p.results);
            if let Some(url) = &p.url {
                println!("\nLive: {}", style(url).cyan());
            }

            let quotes = testimonial::for_project(&p.slug);
            if !quotes.is_empty() {
                println!("\n{}", style("What the client says").bold());
                for t in quotes {
                    println!("  \"{}\"", t.quote);
                    println!("   — {}, {}, {}", t.name, t.role, t.company);
                }
            }
            Ok(())
        }
    }
}

fn cmd_services(args: ServicesArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let services = if args.featured {
        service::featured()
    } else {
        service::all().iter().collect()
    };

    match format {
        OutputFormat::Json => print_json(&services),
        OutputFormat::Text => {
            for s in services {
                println!("{}  {}", style(&s.slug).cyan(), style(&s.title).bold());
                println!("    {} · from {}", s.timeline, s.starting_price);
            }
            Ok(())
        }
    }
}

fn cmd_service(args: SlugArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let Some(s) = service::by_slug(&args.slug) else {
        bail!("no service with slug {:?}", args.slug);
    };

    match format {
        OutputFormat::Json => print_json(s),
        OutputFormat::Text => {
            println!("{}", style(&s.title).bold().underlined());
            println!("{} · from {}\n", s.timeline, s.starting_price);
            println!("{}\n", s.description);
            println!("{}", style("What's included").bold());
            for feature in &s.features {
                println!("  • {feature}");
            }
            println!("\n{}", style("Deliverables").bold());
            for deliverable in &s.deliverables {
                println!("  • {deliverable}");
            }
            Ok(())
        }
    }
}

fn cmd_testimonials(args: TestimonialsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let testimonials = if let Some(slug) = &args.project {
        testimonial::for_project(slug)
    } else {
        testimonial::all().iter().collect()
    };

    match format {
        OutputFormat::Json => print_json(&testimonials),
        OutputFormat::Text => {
            for t in testimonials {
                let stars = "★".repeat(t.rating as usize);
                println!("{} {}", style(&stars).yellow(), style(&t.name).bold());
                println!("  {}, {}", t.role, t.company);
                println!("  \"{}\"\n", t.quote);
            }
            Ok(())
        }
    }
}

async fn cmd_contact() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let client = ContactClient::new(&config);
    let theme = ColorfulTheme::default();

    let mut form = ContactForm::new();
    form.set(
        Field::Name,
        Input::<String>::with_theme(&theme)
            .with_prompt("Your name")
            .interact_text()?,
    );
    form.set(
        Field::Email,
        Input::<String>::with_theme(&theme)
            .with_prompt("Email address")
            .interact_text()?,
    );
    form.set(
        Field::Company,
        Input::<String>::with_theme(&theme)
            .with_prompt("Company")
            .allow_empty(true)
            .interact_text()?,
    );

    let project_type = Select::with_theme(&theme)
        .with_prompt("Project type")
        .items(form::PROJECT_TYPES)
        .default(0)
        .interact()?;
    form.set(Field::ProjectType, form::PROJECT_TYPES[project_type]);

    // Esc skips the optional selects.
    if let Some(budget) = Select::with_theme(&theme)
        .with_prompt("Budget range (Esc to skip)")
        .items(form::BUDGET_RANGES)
        .default(0)
        .interact_opt()?
    {
        form.set(Field::Budget, form::BUDGET_RANGES[budget]);
    }
    if let Some(timeline) = Select::with_theme(&theme)
        .with_prompt("Desired timeline (Esc to skip)")
        .items(form::TIMELINES)
        .default(0)
        .interact_opt()?
    {
        form.set(Field::Timeline, form::TIMELINES[timeline]);
    }

    form.set(
        Field::Message,
        Input::<String>::with_theme(&theme)
            .with_prompt("Project details")
            .interact_text()?,
    );

    match client.submit(&mut form).await {
        SubmitOutcome::Submitted { reference_id } => {
            println!(
                "{} Message sent. We'll get back to you within 24 hours.",
                style("✓").green().bold()
            );
            println!("  Reference ID: {}", style(reference_id).cyan());
            Ok(())
        }
        SubmitOutcome::Invalid => {
            for (field, message) in form.errors() {
                eprintln!("  {}: {}", style(field.as_str()).yellow(), message);
            }
            match form.first_error() {
                Some((_, message)) => bail!("{message}"),
                None => bail!("please fill in all required fields correctly"),
            }
        }
        SubmitOutcome::Failed => {
            bail!("submission failed, please try again or contact us directly")
        }
    }
}
