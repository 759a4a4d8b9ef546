use std::process::ExitCode;

fn main() -> ExitCode {
    phylo::logging::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(phylo::cli::run(std::env::args_os(), &mut out))
}
