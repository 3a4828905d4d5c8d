#[macro_use]
extern crate afl;
extern crate ubx_assist;

use std::time::Duration;
use ubx_assist::{parse_cfg_line, split_frames, validate, DispatchConfig, Dispatcher};

fn dispatch(data: &[u8]) {
    let config = DispatchConfig {
        inter_message_delay: Duration::from_millis(100),
        verbose: true,
    };
    let mut pauses = 0;
    let mut dispatcher = Dispatcher::with_pacer(Vec::new(), |_: Duration| pauses += 1, config);
    let report = dispatcher.dispatch_stream(data).unwrap();
    let written = dispatcher.into_sink();
    assert_eq!(report.forwarded, pauses);

    // Forwarded frames start with the MGA class and hold no marker, so
    // splitting the output again must give back exactly those frames
    let mut resplit = 0;
    for candidate in split_frames(&written) {
        assert!(validate(candidate).is_ok());
        resplit += 1;
    }
    assert_eq!(resplit, report.forwarded);
}

fn parse_cfg(text: &str) {
    for (idx, line) in text.lines().enumerate() {
        if let Some(Ok(msg)) = parse_cfg_line(line, idx + 1) {
            assert!(line.starts_with(&msg.name));
            assert_eq!(msg.to_frame().len(), msg.body.len() + 4);
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        dispatch(data);
        if let Ok(text) = std::str::from_utf8(data) {
            parse_cfg(text);
        }
    });
}
