use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use serialport::{FlowControl as SerialFlowControl, SerialPort};
use std::{path::PathBuf, time::Duration};
use tracing::debug;

pub struct CommandBuilder {
    command: clap::Command,
}

/// Arguments common to both loaders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderArgs {
    pub port: String,
    pub baud: u32,
    pub file: PathBuf,
    pub debug: bool,
}

impl CommandBuilder {
    /// `file_help` describes what the `--file` argument points to
    pub fn new(name: &'static str, about: &'static str, file_help: &'static str) -> Self {
        let command = clap::Command::new(name)
            .about(about)
            .version(clap::crate_version!())
            .arg_required_else_help(true)
            .arg(
                Arg::new("port")
                    .value_name("port")
                    .short('p')
                    .long("port")
                    .required(true)
                    .help("Serial port the uBlox receiver is connected to"),
            )
            .arg(
                Arg::new("baud")
                    .value_name("baud")
                    .short('s')
                    .long("baud")
                    .visible_alias("speed")
                    .required(false)
                    .default_value("9600")
                    .value_parser(value_parser!(u32))
                    .help("Baud rate for the selected port"),
            )
            .arg(
                Arg::new("file")
                    .value_name("file")
                    .short('f')
                    .long("file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help(file_help),
            )
            .arg(
                Arg::new("debug")
                    .short('d')
                    .long("debug")
                    .action(ArgAction::SetTrue)
                    .help("Log every message sent to the receiver"),
            );
        Self { command }
    }

    pub fn build(&self) -> clap::Command {
        self.command.clone()
    }
}

pub fn assistnow_command() -> clap::Command {
    CommandBuilder::new(
        "ublox-assistnow-loader",
        "Downloads AssistNow Online data and feeds it to a uBlox receiver",
        "TOML file holding the [AssistNowOnline] section",
    )
    .build()
}

pub fn cfg_command() -> clap::Command {
    CommandBuilder::new(
        "ublox-cfg-loader",
        "Sends the CFG messages of a u-center configuration file to a uBlox receiver",
        "Configuration file saved from u-center (Tools > Receiver Configuration)",
    )
    .build()
}

impl LoaderArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let port = matches
            .get_one::<String>("port")
            .context("Expected required 'port' cli argument")?
            .clone();
        let file = matches
            .get_one::<PathBuf>("file")
            .context("Expected required 'file' cli argument")?
            .clone();
        Ok(Self {
            port,
            baud: matches.get_one::<u32>("baud").copied().unwrap_or(9600),
            file,
            debug: matches.get_flag("debug"),
        })
    }
}

/// Opens the port as 8N1 without flow control, which is what the receivers ship with
pub fn open_serialport(args: &LoaderArgs) -> Result<Box<dyn SerialPort>> {
    let builder = serialport::new(&args.port, args.baud)
        .stop_bits(serialport::StopBits::One)
        .data_bits(serialport::DataBits::Eight)
        .parity(serialport::Parity::None)
        .timeout(Duration::from_millis(500))
        .flow_control(SerialFlowControl::None);

    debug!("{:?}", &builder);
    builder
        .open()
        .with_context(|| format!("Failed to open port: {}", args.port))
}
