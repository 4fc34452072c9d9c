use std::{env, path::PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use asbindgen::{Generator, Source};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "asbindgen

Usage:
  asbindgen help
  asbindgen [options]

Generates C++ code registering the Dear ImGui API in an AngelScript engine
from cimgui's JSON definitions.

Options:
  --definitions <path>  Function catalog (default: definitions.json)
  --structs <path>      Struct and enum catalog (default: structs_and_enums.json)
  --output <path>       Generated C++ file (default: as-imgui-gen.cpp)
  --namespace <name>    Register global functions in this script namespace
  --quiet               Do not write debug comments into the generated code
  --skip-unsupported-fields
                        Do not register array, bitfield, pointer and inline struct fields
  --no-header           Do not write as-imgui.hpp next to the output
  -h, --help            Show this help.

Logging goes to stderr and is filtered by RUST_LOG (default: info).
";

/// Options collected from the command line
#[derive(Debug, PartialEq, Eq)]
struct Options {
    definitions: PathBuf,
    structs: PathBuf,
    output: PathBuf,
    namespace: Option<String>,
    verbose: bool,
    skip_unsupported_fields: bool,
    header: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            definitions: PathBuf::from(asbindgen::DEFINITIONS_FILE),
            structs: PathBuf::from(asbindgen::STRUCTS_AND_ENUMS_FILE),
            output: PathBuf::from(asbindgen::OUTPUT_FILE),
            namespace: None,
            verbose: true,
            skip_unsupported_fields: false,
            header: true,
        }
    }
}

/// `None` means help was requested
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{flag} requires a value"))
        };
        match arg.as_str() {
            "help" | "-h" | "--help" => return Ok(None),
            "--definitions" => options.definitions = value("--definitions")?.into(),
            "--structs" => options.structs = value("--structs")?.into(),
            "--output" => options.output = value("--output")?.into(),
            "--namespace" => options.namespace = Some(value("--namespace")?),
            "--quiet" => options.verbose = false,
            "--skip-unsupported-fields" => options.skip_unsupported_fields = true,
            "--no-header" => options.header = false,
            other => bail!("unknown argument: {}\n\n{}", other, USAGE),
        }
    }
    Ok(Some(options))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = real_main() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let Some(options) = parse_args(env::args().skip(1))? else {
        println!("{}", USAGE);
        return Ok(());
    };
    run(&options)
}

fn run(options: &Options) -> Result<()> {
    let source = Source::new(&options.definitions, &options.structs)
        .context("loading cimgui catalogs")?;

    let mut builder = Generator::builder()
        .verbose(options.verbose)
        .skip_unsupported_fields(options.skip_unsupported_fields);
    if let Some(ns) = &options.namespace {
        builder = builder.script_namespace(ns.as_str());
    }
    let destination = builder.build().generate(&source);

    let path = destination
        .write(&options.output)
        .with_context(|| format!("writing {}", options.output.display()))?;
    println!("Generated {}", path.display());

    if options.header {
        let header_path = match options.output.parent() {
            Some(dir) => dir.join(asbindgen::HEADER_FILE),
            None => PathBuf::from(asbindgen::HEADER_FILE),
        };
        let path = Generator::header()
            .write(&header_path)
            .with_context(|| format!("writing {}", header_path.display()))?;
        println!("Generated {}", path.display());
    }
    Ok(())
}
