use jukebox::clap::{crate_authors, crate_version, App, Arg};

pub fn midijukebox_optargs() -> App<'static, 'static> {
    App::new("midijukebox")
        .version(crate_version!())
        .author(crate_authors!())
        .about("plays the MIDI files found in a directory")
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .multiple(true)
                .help("Enable debug mode, given twice for tracing"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Suppress any log output"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Increment verbosity level"),
        )
        .arg(
            Arg::with_name("logfile")
                .long("logfile")
                .takes_value(true)
                .value_name("FILE")
                .help("Append log output to FILE"),
        )
        .arg(
            Arg::with_name("syslog")
                .long("syslog")
                .help("Send log output to syslog as well"),
        )
}
