//! docgen CLI - Word document reformatting and template tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docgen::render::{to_json, to_outline};
use docgen::template::DEFAULT_TEMPLATE_DIR;
use docgen::{
    detect_format_from_path, DocGen, DocxTemplateFiller, JsonFormat, MarkdownTemplateFiller,
    StylePreset, TemplateFiller, TemplateLibrary, Variables,
};

const DEFAULT_OUTPUT: &str = "output.docx";

#[derive(Parser)]
#[command(name = "docgen")]
#[command(version)]
#[command(
    about = "Reformat Word documents and generate DOCX files from templates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat a .docx, .md or .txt file with a style profile
    #[command(alias = "fmt")]
    Format {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Style configuration JSON file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Built-in style preset (default, formal, academic)
        #[arg(long, value_name = "NAME")]
        preset: Option<String>,

        /// Print the classified paragraphs instead of writing a file
        #[arg(long)]
        dry_run: bool,

        /// Keep going when auxiliary parts (styles, properties) are malformed
        #[arg(long)]
        lenient: bool,
    },

    /// Fill a template with variables
    #[command(alias = "gen")]
    Generate {
        /// Template name, without extension
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Variable in the form key=value (repeatable)
        #[arg(short = 'v', long = "variable", value_name = "KEY=VALUE")]
        variables: Vec<String>,

        /// Template directory
        #[arg(
            long,
            value_name = "DIR",
            env = "DOCGEN_TEMPLATE_DIR",
            default_value = DEFAULT_TEMPLATE_DIR
        )]
        template_dir: PathBuf,

        /// Use a markdown (.md) template rendered with a style profile
        #[arg(long)]
        markdown: bool,

        /// Style configuration JSON file (markdown templates)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Built-in style preset (markdown templates)
        #[arg(long, value_name = "NAME")]
        preset: Option<String>,
    },

    /// List available templates
    #[command(alias = "ls")]
    Templates {
        /// Template directory
        #[arg(
            long,
            value_name = "DIR",
            env = "DOCGEN_TEMPLATE_DIR",
            default_value = DEFAULT_TEMPLATE_DIR
        )]
        template_dir: PathBuf,
    },

    /// List style presets or print a resolved profile
    Styles {
        /// Print the resolved profile as JSON
        #[arg(long)]
        preview: bool,

        /// Preset to preview
        #[arg(long, value_name = "NAME")]
        preset: Option<String>,

        /// Style configuration JSON file to preview
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Format {
            input,
            output,
            config,
            preset,
            dry_run,
            lenient,
        }) => cmd_format(
            &input,
            &output,
            config.as_deref(),
            preset.as_deref(),
            dry_run,
            lenient,
        ),
        Some(Commands::Generate {
            template,
            output,
            variables,
            template_dir,
            markdown,
            config,
            preset,
        }) => cmd_generate(
            &template,
            &output,
            &variables,
            &template_dir,
            markdown,
            config.as_deref(),
            preset.as_deref(),
        ),
        Some(Commands::Templates { template_dir }) => cmd_templates(&template_dir),
        Some(Commands::Styles {
            preview,
            preset,
            config,
        }) => cmd_styles(preview, preset.as_deref(), config.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: docgen <COMMAND>".yellow());
            println!("       docgen --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Builder with the style chosen on the command line. A config file is
/// merged over the built-in defaults; a preset is used as-is.
fn docgen_for(
    config: Option<&Path>,
    preset: Option<&str>,
) -> Result<DocGen, Box<dyn std::error::Error>> {
    let docgen = DocGen::new();
    match (config, preset) {
        (Some(_), Some(_)) => Err("--config and --preset cannot be combined".into()),
        (Some(path), None) => Ok(docgen.with_config_file(path)?),
        (None, Some(name)) => Ok(docgen.with_preset(parse_preset(name)?)),
        (None, None) => Ok(docgen),
    }
}

fn parse_preset(name: &str) -> Result<StylePreset, Box<dyn std::error::Error>> {
    StylePreset::from_name(name).ok_or_else(|| {
        let known: Vec<_> = StylePreset::all().iter().map(|p| p.name()).collect();
        format!("Unknown preset '{}' (expected one of: {})", name, known.join(", ")).into()
    })
}

fn cmd_format(
    input: &Path,
    output: &Path,
    config: Option<&Path>,
    preset: Option<&str>,
    dry_run: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    log::debug!("Formatting {} as {}", input.display(), format);
    let mut docgen = docgen_for(config, preset)?;
    if lenient {
        docgen = docgen.lenient();
    }

    if dry_run {
        let document = docgen.preview(input)?;
        print!("{}", to_outline(&document));
        return Ok(());
    }

    let document = docgen.format(input, output)?;

    println!("{}", "Formatting complete".green().bold());
    println!("  {}: {} ({})", "Input".bold(), input.display(), format);
    println!("  {}: {}", "Output".bold(), output.display());
    println!("  {}: {}", "Paragraphs".bold(), document.paragraph_count());

    Ok(())
}

fn cmd_generate(
    template: &str,
    output: &Path,
    assignments: &[String],
    template_dir: &Path,
    markdown: bool,
    config: Option<&Path>,
    preset: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut variables = Variables::new();
    for assignment in assignments {
        variables.insert_assignment(assignment)?;
    }

    let docgen = docgen_for(config, preset)?.with_template_dir(template_dir);
    log::debug!(
        "Filling template '{}' from {} with {} variable(s)",
        template,
        template_dir.display(),
        assignments.len()
    );
    let written = if markdown {
        docgen.generate_markdown(template, &variables, output)?
    } else {
        docgen.generate(template, &variables, output)?
    };

    println!("{} {}", "Document generated:".green(), written.display());

    Ok(())
}

fn cmd_templates(template_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let library = TemplateLibrary::new(template_dir);
    log::debug!("Listing templates under {}", template_dir.display());
    let fillers: Vec<Box<dyn TemplateFiller>> = vec![
        Box::new(DocxTemplateFiller::new(library.clone())),
        Box::new(MarkdownTemplateFiller::new(library)),
    ];

    println!(
        "{} {}",
        "Templates in".cyan().bold(),
        template_dir.display()
    );
    println!("{}", "─".repeat(40).dimmed());

    let mut total = 0;
    for filler in &fillers {
        for name in filler.list() {
            println!("  {} {}", name, format!(".{}", filler.extension()).dimmed());
            total += 1;
        }
    }

    if total == 0 {
        println!("  {}", "(none found)".yellow());
    }

    Ok(())
}

fn cmd_styles(
    preview: bool,
    preset: Option<&str>,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if preview || preset.is_some() || config.is_some() {
        let docgen = docgen_for(config, preset)?;
        println!(
            "{}",
            to_json(&docgen.profile().to_config(), JsonFormat::Pretty)?
        );
        return Ok(());
    }

    println!("{}", "Style Presets".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for preset in StylePreset::all() {
        println!(
            "  {} {}",
            format!("{:<10}", preset.name()).bold(),
            preset.description()
        );
    }
    println!();
    println!("Use {} to print a resolved profile", "--preview".yellow());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docgen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word document reformatting and template tool");
    println!();
    println!("License: MIT");
}
