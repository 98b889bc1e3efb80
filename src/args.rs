use clap::{App, Arg, ArgMatches, SubCommand};

use crate::enzyme::Enzyme;
use crate::errors::*;

#[derive(Debug)]
pub struct EnzymesArgs {
    pub output: Option<String>,
}

#[derive(Debug)]
pub struct MotifArgs {
    pub notations: Vec<String>,
    pub output: Option<String>,
}

#[derive(Debug)]
pub struct RangesArgs {
    pub table: String,
    pub enzyme: Enzyme,
    pub output: Option<String>,
    pub threads: usize,
    pub strict: bool,
}

#[derive(Debug)]
pub struct ExtractArgs {
    pub table: String,
    pub enzyme: Enzyme,
    pub output: Option<String>,
    pub strict: bool,
}

pub enum Args {
    Enzymes(EnzymesArgs),
    Motif(MotifArgs),
    Ranges(RangesArgs),
    Extract(ExtractArgs),
    None,
}

fn output_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("output")
        .long("output")
        .short("o")
        .takes_value(true)
        .help("Write table to this file instead of STDOUT.")
}

fn enzyme_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("enzyme")
        .long("enzyme")
        .takes_value(true)
        .default_value("SpCas9")
        .help("Built-in CRISPR nuclease; see the 'enzymes' command.")
}

fn strict_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("strict")
        .long("strict")
        .help("Abort on the first invalid row instead of reporting NA.")
}

fn enzymes_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("enzymes")
        .about("List built-in nucleases, their motifs and cut sites")
        .arg(output_arg())
}

fn motif_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("motif")
        .about("Parse motifs such as G^AATTC, (3/3)NGG or TTTV(18/23)")
        .arg(
            Arg::with_name("notation")
                .help("One or more motifs in compact notation.")
                .multiple(true)
                .required(true),
        )
        .arg(output_arg())
}

fn ranges_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("ranges")
        .about("Compute PAM, protospacer, spacer and target ranges from PAM sites")
        .arg(
            Arg::with_name("table")
                .help("Table of PAM sites (contig, position, strand).")
                .required(true),
        )
        .arg(enzyme_arg())
        .arg(output_arg())
        .arg(strict_arg())
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn extract_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("extract")
        .about("Extract PAM, protospacer and spacer sequences from target sequences")
        .arg(
            Arg::with_name("table")
                .help("Table with target sequences in the first column.")
                .required(true),
        )
        .arg(enzyme_arg())
        .arg(output_arg())
        .arg(strict_arg())
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_output(matches: &ArgMatches) -> Option<String> {
    matches.value_of("output").map(|s| s.to_string())
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

fn parse_enzyme(matches: &ArgMatches) -> Result<Enzyme> {
    let enzyme_str = get_str(matches, "enzyme")?;

    match Enzyme::get(enzyme_str) {
        Some(enzyme) => Ok(enzyme),
        None => Err(format!("Unknown enzyme {:?}", enzyme_str).into()),
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("crisprbase")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Nuclease motifs and CRISPR target coordinates")
        .subcommand(enzymes_command())
        .subcommand(motif_command())
        .subcommand(ranges_command())
        .subcommand(extract_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("enzymes") {
        Ok(Args::Enzymes(EnzymesArgs {
            output: get_output(matches),
        }))
    } else if let Some(matches) = matches.subcommand_matches("motif") {
        let notations = match matches.values_of("notation") {
            Some(values) => values.map(|v| v.to_string()).collect(),
            None => return Err("Required option \"notation\" not set".into()),
        };

        Ok(Args::Motif(MotifArgs {
            notations,
            output: get_output(matches),
        }))
    } else if let Some(matches) = matches.subcommand_matches("ranges") {
        Ok(Args::Ranges(RangesArgs {
            table: get_string(matches, "table")?,
            enzyme: parse_enzyme(matches)?,
            output: get_output(matches),
            threads: parse_threads(matches)?,
            strict: matches.is_present("strict"),
        }))
    } else if let Some(matches) = matches.subcommand_matches("extract") {
        Ok(Args::Extract(ExtractArgs {
            table: get_string(matches, "table")?,
            enzyme: parse_enzyme(matches)?,
            output: get_output(matches),
            strict: matches.is_present("strict"),
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
