extern crate log;
extern crate simplelog;

use std::env;
use std::process;
use std::sync::atomic::AtomicBool;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use colorctl::client::{ColorClient, ColorClientError, UpdateStep};
use colorctl::config::ServerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Update,
    Monitor,
}

fn parse_mode(args: &[String]) -> Option<Mode> {
    if args.len() != 2 {
        return None;
    }
    match args[1].as_str() {
        "update" => Some(Mode::Update),
        "monitor" => Some(Mode::Monitor),
        _ => None,
    }
}

fn run_update(client: &mut ColorClient) -> Result<(), ColorClientError> {
    let outcome = client.update(&mut rand::thread_rng(), |step| match step {
        UpdateStep::Current(color) => println!("current color is {}", color),
        UpdateStep::Proposed(color) => println!("updating color to {}", color),
    })?;

    if let Some(name) = outcome.committed.name() {
        info!("server acknowledged {}", name);
    }

    client.shutdown()?;
    Ok(())
}

fn run_monitor(client: &mut ColorClient) -> Result<(), ColorClientError> {
    // nothing raises this flag here; the loop ends when the server
    // closes the stream
    let stop = AtomicBool::new(false);
    let seen = client.monitor(&stop, |color| {
        println!("current color is {}", color);
    })?;

    info!("server closed the stream after {} color(s)", seen);
    Ok(())
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let args: Vec<String> = env::args().collect();
    let mode = match parse_mode(&args) {
        Some(mode) => mode,
        None => {
            let program = args.first().map(String::as_str).unwrap_or("colorctl");
            println!("usage: {} update | monitor", program);
            process::exit(2);
        }
    };

    let config = ServerConfig::from_env();
    let result = ColorClient::connect(&config).and_then(|mut client| {
        info!("connected to {}", config);
        match mode {
            Mode::Update => run_update(&mut client),
            Mode::Monitor => run_monitor(&mut client),
        }
    });

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
