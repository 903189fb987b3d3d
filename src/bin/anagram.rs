use anagram_server::cli;
use std::io;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    std::process::exit(code);
}
