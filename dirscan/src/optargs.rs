use jukebox::clap::{App, Arg, SubCommand};

pub fn optargs() -> App<'static, 'static> {
    SubCommand::with_name("scan")
        .about("List the MIDI files in a directory in play order")
        .arg(
            Arg::with_name("DIRECTORY")
                .required(true)
                .help("The music directory"),
        )
        .arg(
            Arg::with_name("prefixed")
                .short("p")
                .long("prefixed")
                .help("Open each file and print it with a '//' prefix"),
        )
        .arg(
            Arg::with_name("loop")
                .short("l")
                .long("loop")
                .takes_value(true)
                .value_name("PASSES")
                .validator(|v| {
                    v.parse::<usize>()
                        .map(|_| ())
                        .map_err(|err| format!("{:?}: {}", v, err))
                })
                .help("Play the directory <PASSES> times"),
        )
}
