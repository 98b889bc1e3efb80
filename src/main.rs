use env_logger::Env;

use crisprbase::args;
use crisprbase::commands;
use crisprbase::errors;

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn inner_main() -> errors::Result<()> {
    match args::parse_args()? {
        args::Args::Enzymes(args) => commands::enzymes::main(&args),
        args::Args::Motif(args) => commands::motif::main(&args),
        args::Args::Ranges(args) => commands::ranges::main(&args),
        args::Args::Extract(args) => commands::extract::main(&args),
        args::Args::None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
