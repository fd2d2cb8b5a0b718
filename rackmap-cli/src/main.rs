//! Entry point for the rackmap command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = rackmap_cli::run() {
        eprintln!("rackmap: {err}");
        std::process::exit(1);
    }
}
