use anyhow::Result;
use clap::{App, Arg};
use prototype_index::build::build_index;
use prototype_index::config::Config;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = App::new("prototype-index")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates an index.html listing the project directories under a root")
        .arg(
            Arg::with_name("root")
                .long("root")
                .value_name("DIR")
                .takes_value(true)
                .help("The directory to scan (defaults to the current directory)"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .takes_value(true)
                .help("Where to write the listing page (defaults to <root>/index.html)"),
        )
        .get_matches();

    let root = match matches.value_of("root") {
        Some(root) => PathBuf::from(root),
        None => std::env::current_dir()?,
    };
    let config = Config::from_directory(&root, matches.value_of("output").map(Path::new))?;
    let projects = build_index(&config)?;

    println!("Found {} project(s):", projects.len());
    for p in &projects {
        println!("  - {}: {}", p.name, p.description);
    }

    let output_name = config
        .output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.output_file.display().to_string());
    println!("\n✓ Generated {} with {} project(s)", output_name, projects.len());
    Ok(())
}
