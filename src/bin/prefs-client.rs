use clap::clap_app;
use prefs::error::SettingsError;
use prefs::{CommandRequest, CommandResponse};
use std::io::{BufReader, BufWriter, Write};
use std::net::TcpStream;

fn main() -> Result<(), failure::Error> {
    let matches = clap_app!(prefs_client =>
        (version: env!("CARGO_PKG_VERSION"))
        (about: "A user settings store client")
        (@subcommand add =>
            (about: "add a new setting")
            (@arg KEY: +required "setting name")
            (@arg VALUE: +required "setting value")
            (@arg ADDR: --addr +takes_value "addr")
        )
        (@subcommand update =>
            (about: "update an existing setting")
            (@arg KEY: +required "setting name")
            (@arg VALUE: +required "setting value")
            (@arg ADDR: --addr +takes_value "addr")
        )
        (@subcommand delete =>
            (about: "delete a setting by name")
            (@arg KEY: +required "setting name")
            (@arg ADDR: --addr +takes_value "addr")
        )
        (@subcommand view =>
            (about: "view all settings")
            (@arg ADDR: --addr +takes_value "addr")
        )
    )
    .get_matches();

    let command;
    let addr;

    {
        match matches.subcommand() {
            ("add", Some(cmd)) => {
                let key = cmd
                    .value_of("KEY")
                    .ok_or(SettingsError::CliError {
                        parameter: "key".into(),
                        required_by: "add".into(),
                    })?
                    .into();
                let value = cmd
                    .value_of("VALUE")
                    .ok_or(SettingsError::CliError {
                        parameter: "value".into(),
                        required_by: "add".into(),
                    })?
                    .into();

                addr = cmd.value_of("ADDR").unwrap_or("127.0.0.1:4000");
                command = CommandRequest::Add { key, value };
            }
            ("update", Some(cmd)) => {
                let key = cmd
                    .value_of("KEY")
                    .ok_or(SettingsError::CliError {
                        parameter: "key".into(),
                        required_by: "update".into(),
                    })?
                    .into();
                let value = cmd
                    .value_of("VALUE")
                    .ok_or(SettingsError::CliError {
                        parameter: "value".into(),
                        required_by: "update".into(),
                    })?
                    .into();

                addr = cmd.value_of("ADDR").unwrap_or("127.0.0.1:4000");
                command = CommandRequest::Update { key, value };
            }
            ("delete", Some(cmd)) => {
                let key = cmd
                    .value_of("KEY")
                    .ok_or(SettingsError::CliError {
                        parameter: "key".into(),
                        required_by: "delete".into(),
                    })?
                    .into();

                addr = cmd.value_of("ADDR").unwrap_or("127.0.0.1:4000");
                command = CommandRequest::Delete { key };
            }
            ("view", Some(cmd)) => {
                addr = cmd.value_of("ADDR").unwrap_or("127.0.0.1:4000");
                command = CommandRequest::View {};
            }
            _ => {
                eprintln!("unknown command");
                return Err(SettingsError::CliUnknownCommand {}.into());
            }
        }
    }

    let mut connection = TcpStream::connect(addr)?;
    let mut writer = BufWriter::new(&mut connection);
    serde_json::to_writer(&mut writer, &command)?;
    writeln!(writer)?;
    drop(writer);
    let reader = BufReader::new(&mut connection);

    match serde_json::from_reader(reader)? {
        CommandResponse::Message { text } => println!("{}", text),
        CommandResponse::Report { text } => println!("{}", text.trim_end_matches('\n')),
        CommandResponse::Error { reason } => {
            eprintln!("{}", reason);
            return Err(SettingsError::RequestError { reason }.into());
        }
    }
    Ok(())
}
