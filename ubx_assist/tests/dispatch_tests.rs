use pretty_assertions::assert_eq;
use std::time::Duration;
use ubx_assist::{
    classify, frame_message, split_frames, validate, Classification, DispatchConfig,
    DispatchReport, Dispatcher, RejectReason,
};

// UBX-MGA-GPS-EPH with a one byte stub payload
static GPS_EPH: [u8; 9] = [0xb5, 0x62, 0x13, 0x00, 0x01, 0x00, 0x01, 0x15, 0x63];
// UBX-ACK-ACK for CFG-PRT
static ACK_ACK: [u8; 10] = [0xb5, 0x62, 0x5, 0x1, 0x2, 0x0, 0x6, 0x1, 0xf, 0x38];

fn run(stream: &[u8]) -> (DispatchReport, Vec<u8>, Vec<Duration>) {
    let mut pauses = vec![];
    let mut dispatcher = Dispatcher::with_pacer(
        Vec::new(),
        |d: Duration| pauses.push(d),
        DispatchConfig::default(),
    );
    let report = dispatcher.dispatch_stream(stream).unwrap();
    let written = dispatcher.into_sink();
    (report, written, pauses)
}

#[test]
fn test_empty_stream() {
    let (report, written, pauses) = run(&[]);
    assert_eq!(report, DispatchReport::default());
    assert!(written.is_empty());
    assert!(pauses.is_empty());
}

#[test]
fn test_gps_eph_is_forwarded_verbatim() {
    let (report, written, pauses) = run(&GPS_EPH);
    assert_eq!(report.forwarded, 1);
    assert_eq!(written, GPS_EPH.to_vec());
    assert_eq!(pauses, vec![Duration::from_millis(100)]);

    let candidate = split_frames(&GPS_EPH).next().unwrap();
    assert_eq!(
        classify(&validate(candidate).unwrap()),
        Classification::Known("UBX-MGA-GPS-EPH: GPS Ephemeris Assistance")
    );
}

#[test]
fn test_non_mga_frame_is_dropped() {
    let mut stream = ACK_ACK.to_vec();
    stream.extend_from_slice(&GPS_EPH);
    let (report, written, pauses) = run(&stream);
    assert_eq!(
        report,
        DispatchReport {
            forwarded: 1,
            wrong_class: 1,
            bad_checksum: 0,
        }
    );
    assert_eq!(written, GPS_EPH.to_vec());
    assert_eq!(pauses.len(), 1);
}

#[test]
fn test_corrupted_frame_between_good_ones() {
    let mut bad = GPS_EPH;
    bad[6] = 0x02;
    let mut stream = GPS_EPH.to_vec();
    stream.extend_from_slice(&bad);
    stream.extend_from_slice(&GPS_EPH);

    let (report, written, pauses) = run(&stream);
    assert_eq!(report.forwarded, 2);
    assert_eq!(report.bad_checksum, 1);
    assert_eq!(written, [GPS_EPH, GPS_EPH].concat());
    assert_eq!(pauses.len(), 2);

    let candidate = split_frames(&bad).next().unwrap();
    assert_eq!(
        validate(candidate),
        Err(RejectReason::BadChecksum {
            calculated: (0x16, 0x64),
            received: Some((0x15, 0x63)),
        })
    );
}

#[test]
fn test_leading_garbage_is_a_candidate_too() {
    // Bytes in front of the first marker are treated like any other candidate
    let mut stream = vec![0x13, 0x00];
    stream.extend_from_slice(&GPS_EPH);
    let (report, written, _) = run(&stream);
    assert_eq!(report.forwarded, 1);
    assert_eq!(report.bad_checksum, 1);
    assert_eq!(written, GPS_EPH.to_vec());
}

#[test]
fn test_truncated_download() {
    let mut stream = GPS_EPH.to_vec();
    stream.extend_from_slice(&GPS_EPH[..5]);
    let (report, written, _) = run(&stream);
    assert_eq!(report.forwarded, 1);
    assert_eq!(report.rejected(), 1);
    assert_eq!(written, GPS_EPH.to_vec());
}

#[test]
fn test_marker_inside_payload_splits_the_frame() {
    // A payload carrying b5 62 is cut in two and neither half survives
    let framed = frame_message(&[0x13, 0x40, 0x04, 0x00, 0x10, 0xb5, 0x62, 0x00]);
    let (report, written, _) = run(&framed);
    assert_eq!(report.forwarded, 0);
    assert_eq!(report.rejected(), 2);
    assert!(written.is_empty());
}

#[test]
fn test_zero_delay_still_paces_each_frame() {
    let config = DispatchConfig {
        inter_message_delay: Duration::ZERO,
        verbose: true,
    };
    let stream = [GPS_EPH, GPS_EPH, GPS_EPH].concat();
    let mut pauses = vec![];
    let mut dispatcher =
        Dispatcher::with_pacer(Vec::new(), |d: Duration| pauses.push(d), config);
    let report = dispatcher.dispatch_stream(&stream).unwrap();
    assert_eq!(report.forwarded, 3);
    assert_eq!(pauses, vec![Duration::ZERO; 3]);
}
