use jukebox::clap::AppSettings;
use jukebox::{libc, log};

mod logging;
use logging::init_logging;

mod optargs;
use optargs::midijukebox_optargs;

fn main() {
    let matches = midijukebox_optargs()
        .setting(AppSettings::SubcommandRequired)
        .subcommand(dirscan::optargs())
        .get_matches();

    if let Err(err) = init_logging(&matches) {
        eprintln!("Failed to initialize logging: {}", err);
        std::process::exit(libc::EXIT_FAILURE);
    }

    if let Err(err) = match matches.subcommand() {
        ("scan", Some(sub_m)) => dirscan::cmd(sub_m),
        (name, _) => {
            unimplemented!("subcommand '{}'", name)
        }
    } {
        log::error!("Error: {:#}", &err);
        std::process::exit(jukebox::error_to_exitcode(&err));
    } else {
        log::info!("OK");
    }
}
