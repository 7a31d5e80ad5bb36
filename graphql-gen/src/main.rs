use anyhow::Context;
use colored::Colorize;
use diagnostics::Violation;
use inference_engine::{Engine, GraphQLOptions, NamespacedGraphQLOptions};
use service_ir::Service;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use structopt::*;

#[derive(Debug, StructOpt)]
#[structopt(name = "graphql-gen", about = "Federated GraphQL schemas from service descriptions")]
enum Command {
    /// Render the GraphQL schema of a service.
    Generate(Generate),
    /// Report the relationships of a service that cannot be resolved.
    Validate(Validate),
}

#[derive(Debug, StructOpt)]
struct Input {
    /// Path to the JSON service description.
    #[structopt(parse(from_os_str))]
    service_path: PathBuf,
    /// Path to a JSON file with the generator options, e.g. `{"graphql": {"payload": ["items"]}}`.
    #[structopt(long, parse(from_os_str))]
    options: Option<PathBuf>,
    /// The document the service was described in, used to show violations
    /// in context. Defaults to the source path recorded in the description.
    #[structopt(long, parse(from_os_str))]
    source: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
struct Generate {
    #[structopt(flatten)]
    input: Input,
    /// Directory to write the schema to.
    #[structopt(long, parse(from_os_str), default_value = ".")]
    output: PathBuf,
}

#[derive(Debug, StructOpt)]
struct Validate {
    #[structopt(flatten)]
    input: Input,
    /// Print the violations as JSON.
    #[structopt(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    match Command::from_args() {
        Command::Generate(cmd) => generate(&cmd),
        Command::Validate(cmd) => validate(&cmd),
    }
}

fn generate(cmd: &Generate) -> anyhow::Result<()> {
    let service = read_service(&cmd.input.service_path)?;
    let options = read_options(cmd.input.options.as_deref())?;
    let engine = Engine::new(&service, &options);

    let file = graphql_renderer::generate(&engine);
    let path = cmd.output.join(&file.path);

    fs::create_dir_all(&cmd.output).with_context(|| format!("Creating {}", cmd.output.display()))?;
    fs::write(&path, &file.contents).with_context(|| format!("Writing {}", path.display()))?;

    eprintln!("{} {}", "Wrote".green().bold(), path.display().to_string().yellow());

    check(&service, cmd.input.source.as_deref(), engine.violations())
}

fn validate(cmd: &Validate) -> anyhow::Result<()> {
    let service = read_service(&cmd.input.service_path)?;
    let options = read_options(cmd.input.options.as_deref())?;
    let engine = Engine::new(&service, &options);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(engine.violations())?);
    }

    check(&service, cmd.input.source.as_deref(), engine.violations())
}

fn read_service(path: &Path) -> anyhow::Result<Service> {
    eprintln!("{} {}", "reading the service description from".bold(), path.display().to_string().yellow());

    Service::from_path(path).context("Error reading the service description")
}

fn read_options(path: Option<&Path>) -> anyhow::Result<GraphQLOptions> {
    let Some(path) = path else {
        return Ok(GraphQLOptions::default());
    };

    let json = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let options: NamespacedGraphQLOptions =
        serde_json::from_str(&json).with_context(|| format!("Parsing the options in {}", path.display()))?;

    Ok(options.graphql())
}

/// Print the violations and fail when there are any.
fn check(service: &Service, source: Option<&Path>, violations: &[Violation]) -> anyhow::Result<()> {
    if violations.is_empty() {
        eprintln!("{}", "No violations found.".green());
        return Ok(());
    }

    let source_path = source.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(service.source_path()));
    let text = fs::read_to_string(&source_path).ok();
    let file_name = source_path.display().to_string();
    let mut stderr = io::stderr().lock();

    for violation in violations {
        match text {
            Some(ref text) => violation.pretty_print(&mut stderr, &file_name, text)?,
            None => writeln!(stderr, "{violation}")?,
        }
    }

    anyhow::bail!(
        "{}",
        format!("{} relationship violation(s) in {}", violations.len(), service.title()).bold().red()
    )
}

fn init_logger() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| eprintln!("Error initializing the global logger: {err}"))
        .ok();
}
