use anyhow::Result;
use html5lib_testgen::emitter::csharp::StringSyntax;
use html5lib_testgen::emitter::tokenization::{self, Generation};
use html5lib_testgen::emitter::EmitterConfig;
use html5lib_testgen::tokenizer::fixture;
use log::info;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fs;

fn main() -> Result<()> {
    let matches = clap::Command::new("Tokenization test generator")
        .version("0.1.0")
        .about("Generates a C# test class from a html5lib tokenizer fixture file")
        .arg(
            clap::Arg::new("input")
                .help("Path to the JSON fixture file")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("output")
                .help("Path of the source file to write")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("prefix")
                .help("Prefix spliced into generated method names (dots become underscores)")
                .required(true)
                .index(3),
        )
        .arg(
            clap::Arg::new("legacy")
                .help("Target the legacy two-argument DoTest harness")
                .long("legacy")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbatim")
                .help("Emit verbatim (@\"...\") string literals")
                .long("verbatim")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("namespace")
                .help("Namespace of the emitted partial class")
                .long("namespace")
                .default_value("Html5.Tests"),
        )
        .arg(
            clap::Arg::new("class")
                .help("Name of the emitted partial class")
                .long("class")
                .default_value("HtmlTokenizationTest"),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let input: &String = matches.get_one("input").expect("input");
    let output: &String = matches.get_one("output").expect("output");
    let prefix: &String = matches.get_one("prefix").expect("prefix");
    let namespace: &String = matches.get_one("namespace").expect("namespace");
    let class: &String = matches.get_one("class").expect("class");

    let generation = if matches.get_flag("legacy") {
        Generation::Legacy
    } else {
        Generation::Current
    };

    let mut config = EmitterConfig::new(prefix, namespace, class);
    if matches.get_flag("verbatim") {
        config.syntax = StringSyntax::Verbatim;
    }

    let root = fixture::read_fixture_from_path(input)?;
    info!("read {} tokenizer cases from {input}", root.tests.len());

    let source = tokenization::generate(&root, &config, generation)?;
    fs::write(output, source)?;
    info!("wrote {output}");

    Ok(())
}
