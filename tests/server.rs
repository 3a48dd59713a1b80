use prefs::server::SettingsServer;
use prefs::{CommandRequest, CommandResponse, SettingsEngine, SettingsStore};
use slog::o;
use std::io::{BufReader, BufWriter, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let log = slog::Logger::root(slog::Discard, o!());
        let engine: Box<dyn SettingsEngine> = Box::new(SettingsStore::new());
        SettingsServer::new(listener, engine).serve(&log).ok();
    });
    addr
}

fn request(addr: SocketAddr, command: &CommandRequest) -> CommandResponse {
    let mut connection = TcpStream::connect(addr).unwrap();
    let mut writer = BufWriter::new(&mut connection);
    serde_json::to_writer(&mut writer, command).unwrap();
    writeln!(writer).unwrap();
    drop(writer);
    let reader = BufReader::new(&mut connection);
    serde_json::from_reader(reader).unwrap()
}

fn message(addr: SocketAddr, command: CommandRequest) -> String {
    match request(addr, &command) {
        CommandResponse::Message { text } => text,
        response => panic!("unexpected response: {:?}", response),
    }
}

fn report(addr: SocketAddr) -> String {
    match request(addr, &CommandRequest::View {}) {
        CommandResponse::Report { text } => text,
        response => panic!("unexpected response: {:?}", response),
    }
}

#[test]
fn add_round_trip() {
    let addr = spawn_server();
    let text = message(
        addr,
        CommandRequest::Add {
            key: "theme".into(),
            value: "dark".into(),
        },
    );
    assert_eq!(text, "Setting 'theme' added with value 'dark' successfully!");
    assert_eq!(report(addr), "Current User Settings:\nTheme: dark\n");
}

#[test]
fn view_empty_store() {
    let addr = spawn_server();
    assert_eq!(report(addr), "No settings available.");
}

#[test]
fn delete_missing_setting() {
    let addr = spawn_server();
    let text = message(
        addr,
        CommandRequest::Delete {
            key: "language".into(),
        },
    );
    assert_eq!(text, "Setting not found!");
}

#[test]
fn full_session() {
    let addr = spawn_server();

    message(
        addr,
        CommandRequest::Add {
            key: "theme".into(),
            value: "dark".into(),
        },
    );
    message(
        addr,
        CommandRequest::Add {
            key: "notifications".into(),
            value: "enabled".into(),
        },
    );
    message(
        addr,
        CommandRequest::Add {
            key: "volume".into(),
            value: "high".into(),
        },
    );

    let text = message(
        addr,
        CommandRequest::Add {
            key: "theme".into(),
            value: "light".into(),
        },
    );
    assert_eq!(
        text,
        "Setting 'theme' already exists! Cannot add a new setting with this name."
    );

    let text = message(
        addr,
        CommandRequest::Update {
            key: "theme".into(),
            value: "light".into(),
        },
    );
    assert_eq!(text, "Setting 'theme' updated to 'light' successfully!");

    let text = message(
        addr,
        CommandRequest::Delete {
            key: "notifications".into(),
        },
    );
    assert_eq!(text, "Setting 'notifications' deleted successfully!");

    assert_eq!(
        report(addr),
        "Current User Settings:\nTheme: light\nVolume: high\n"
    );
}
