use crate::{CommandRequest, CommandResponse, Result, SettingsEngine};
use slog::{info, Logger};
use std::io::{BufRead, BufReader, BufWriter};
use std::net::TcpListener;

pub struct SettingsServer {
    listener: TcpListener,
    engine: Box<dyn SettingsEngine>,
}

impl SettingsServer {
    pub fn new(listener: TcpListener, engine: Box<dyn SettingsEngine>) -> Self {
        Self { listener, engine }
    }

    pub fn serve(&mut self, log: &Logger) -> Result<()> {
        for connection in self.listener.incoming() {
            let mut connection = connection?;
            info!(log, "new connection"; "peer" => %connection.peer_addr()?);
            let mut reader = BufReader::new(&mut connection);
            let mut line = String::new();
            reader.read_line(&mut line)?;
            drop(reader);
            let response = match serde_json::from_str(line.as_str())? {
                CommandRequest::Add { key, value } => {
                    info!(log, "client"; "command" => "add", "key" => key.as_str(), "value" => value.as_str());
                    CommandResponse::Message {
                        text: self.engine.add(key, value),
                    }
                }
                CommandRequest::Update { key, value } => {
                    info!(log, "client"; "command" => "update", "key" => key.as_str(), "value" => value.as_str());
                    CommandResponse::Message {
                        text: self.engine.update(key, value),
                    }
                }
                CommandRequest::Delete { key } => {
                    info!(log, "client"; "command" => "delete", "key" => key.as_str());
                    CommandResponse::Message {
                        text: self.engine.delete(key),
                    }
                }
                CommandRequest::View {} => {
                    info!(log, "client"; "command" => "view");
                    CommandResponse::Report {
                        text: self.engine.view(),
                    }
                }
            };
            let mut writer = BufWriter::new(connection);
            serde_json::to_writer(&mut writer, &response)?;
        }

        Ok(())
    }
}
